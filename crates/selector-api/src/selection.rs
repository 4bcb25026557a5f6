//! Notification channel from the selector up to the owning form.

use std::sync::mpsc::Sender;

use crate::types::Candidate;

/// Receives the user's final pick.
///
/// The host owns the selected id; the selector only reports picks and never
/// remembers them. `None` means the user cleared the selection.
pub trait SelectionSink {
	/// Called once per pick.
	fn candidate_selected(&mut self, candidate: Option<&Candidate>);
}

impl<F> SelectionSink for F
where
	F: FnMut(Option<&Candidate>),
{
	fn candidate_selected(&mut self, candidate: Option<&Candidate>) {
		self(candidate);
	}
}

impl SelectionSink for Sender<Option<Candidate>> {
	fn candidate_selected(&mut self, candidate: Option<&Candidate>) {
		let _ = self.send(candidate.cloned());
	}
}

/// Sink used when no host form is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSelection;

impl SelectionSink for DiscardSelection {
	fn candidate_selected(&mut self, _candidate: Option<&Candidate>) {}
}
