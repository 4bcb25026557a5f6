use carepick_api::Candidate;
use serde::Serialize;

/// How the picker session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickOutcome {
	/// Whether the user confirmed with `Enter`.
	pub accepted: bool,
	/// The host's value when accepted; always `None` when cancelled.
	pub selection: Option<Candidate>,
	/// Query text at the time the picker exited.
	pub query: String,
}

impl PickOutcome {
	#[must_use]
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			selection: None,
			query: query.into(),
		}
	}
}
