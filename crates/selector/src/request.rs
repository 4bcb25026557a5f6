use carepick_api::{Candidate, SearchError, SearchFailure};

use crate::generation::Generation;

/// A search the selector wants dispatched to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
	pub generation: Generation,
	pub query: String,
}

/// Provider answer travelling back from a worker, tagged with its generation.
#[derive(Debug, Clone)]
pub struct SearchResponse {
	pub generation: Generation,
	pub query: String,
	pub result: Result<Vec<Candidate>, SearchError>,
}

/// What applying a response did to the selector state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
	/// The response belonged to the current generation and now populates the
	/// candidate list.
	Applied { count: usize },
	/// The provider failed for the current generation; candidates were
	/// cleared.
	Failed(SearchFailure),
	/// The response was superseded (newer query, or the selector closed) and
	/// was dropped.
	Stale,
}

impl ResponseOutcome {
	#[must_use]
	pub fn is_stale(&self) -> bool {
		matches!(self, ResponseOutcome::Stale)
	}
}
