//! Reporting of failed searches to the host's logging collaborator.

use crate::error::SearchError;

/// A search that the provider rejected or could not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFailure {
	/// Generation of the failed request.
	pub generation: u64,
	/// Query text exactly as it was handed to the provider.
	pub query: String,
	/// Provider error.
	pub error: SearchError,
}

/// Fire-and-forget sink for search failures.
///
/// The selector calls this once per failed generation that was still current
/// when its response arrived. Superseded responses are never reported.
pub trait FailureLog {
	/// Record a failure.
	fn search_failed(&self, failure: &SearchFailure);
}

impl<F> FailureLog for F
where
	F: Fn(&SearchFailure),
{
	fn search_failed(&self, failure: &SearchFailure) {
		self(failure);
	}
}

/// Default [`FailureLog`] that emits a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFailureLog;

impl FailureLog for TracingFailureLog {
	fn search_failed(&self, failure: &SearchFailure) {
		tracing::warn!(
			generation = failure.generation,
			query = %failure.query,
			error = %failure.error,
			"search provider failed"
		);
	}
}
