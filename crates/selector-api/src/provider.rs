use std::sync::Arc;

use crate::error::SearchError;
use crate::types::Candidate;

/// Remote lookup capability supplied by the host application.
///
/// Implementations are called from the selector's background workers, so they
/// must be shareable across threads. The provider owns limit and relevance
/// policy: the selector displays whatever comes back, in the order it comes
/// back, and passes the query through untouched (including whitespace).
pub trait SearchProvider: Send + Sync {
	/// Return zero or more candidates matching `query`, in display order.
	///
	/// An empty query asks for the provider's default top results.
	fn search(&self, query: &str) -> Result<Vec<Candidate>, SearchError>;

	/// Look a single record up by id.
	///
	/// Hosts use this to label a selection that is not part of the current
	/// result set. Providers without a by-id endpoint return `Ok(None)`.
	fn fetch(&self, id: &str) -> Result<Option<Candidate>, SearchError> {
		let _ = id;
		Ok(None)
	}
}

impl<P: SearchProvider + ?Sized> SearchProvider for Arc<P> {
	fn search(&self, query: &str) -> Result<Vec<Candidate>, SearchError> {
		(**self).search(query)
	}

	fn fetch(&self, id: &str) -> Result<Option<Candidate>, SearchError> {
		(**self).fetch(id)
	}
}

impl<P: SearchProvider + ?Sized> SearchProvider for Box<P> {
	fn search(&self, query: &str) -> Result<Vec<Candidate>, SearchError> {
		(**self).search(query)
	}

	fn fetch(&self, id: &str) -> Result<Option<Candidate>, SearchError> {
		(**self).fetch(id)
	}
}
