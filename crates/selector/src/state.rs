//! Explicit state machine behind [`RemoteSelector`](crate::RemoteSelector).
//!
//! Every transition is a plain method on [`SelectorState`] so the race-safety
//! rules can be exercised without threads: transitions that need a search
//! return a [`SearchRequest`], and provider answers are fed back through
//! [`SelectorState::apply_response`].

use carepick_api::{Candidate, SearchError, SearchFailure};

use crate::generation::Generation;
use crate::request::{ResponseOutcome, SearchRequest};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorState {
	is_open: bool,
	query_text: String,
	candidates: Vec<Candidate>,
	is_loading: bool,
	generation: Generation,
}

impl SelectorState {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether the candidate list is visible.
	#[must_use]
	pub fn is_open(&self) -> bool {
		self.is_open
	}

	/// Raw text typed by the user.
	#[must_use]
	pub fn query_text(&self) -> &str {
		&self.query_text
	}

	/// Latest results for the current query, in provider order.
	#[must_use]
	pub fn candidates(&self) -> &[Candidate] {
		&self.candidates
	}

	/// True while the current generation has been requested but not resolved.
	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.is_loading
	}

	#[must_use]
	pub fn generation(&self) -> Generation {
		self.generation
	}

	/// Show the candidate list and request results for the current text.
	///
	/// Returns `None` when the selector is already open.
	pub fn open(&mut self) -> Option<SearchRequest> {
		if self.is_open {
			return None;
		}
		self.is_open = true;
		Some(self.begin_generation())
	}

	/// Hide the candidate list and reset to defaults.
	///
	/// The generation still advances so that any outstanding response is
	/// recognised as stale when it lands.
	pub fn close(&mut self) {
		let generation = self.generation.next();
		*self = Self {
			generation,
			..Self::default()
		};
	}

	/// Replace the query text, requesting a search when open.
	pub fn set_query_text(&mut self, text: impl Into<String>) -> Option<SearchRequest> {
		self.query_text = text.into();
		if !self.is_open {
			return None;
		}
		Some(self.begin_generation())
	}

	/// Apply a provider answer for `generation`.
	///
	/// Only the current generation of an open selector is applied; everything
	/// else is [`ResponseOutcome::Stale`] and leaves the state untouched.
	pub fn apply_response(
		&mut self,
		generation: Generation,
		query: &str,
		result: Result<Vec<Candidate>, SearchError>,
	) -> ResponseOutcome {
		if !self.is_open || generation != self.generation {
			return ResponseOutcome::Stale;
		}

		self.is_loading = false;
		match result {
			Ok(candidates) => {
				let count = candidates.len();
				self.candidates = candidates;
				ResponseOutcome::Applied { count }
			}
			Err(error) => {
				self.candidates.clear();
				ResponseOutcome::Failed(SearchFailure {
					generation: generation.get(),
					query: query.to_string(),
					error,
				})
			}
		}
	}

	fn begin_generation(&mut self) -> SearchRequest {
		self.generation = self.generation.next();
		self.is_loading = true;
		SearchRequest {
			generation: self.generation,
			query: self.query_text.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn alice() -> Vec<Candidate> {
		vec![Candidate::new("1", "Alice")]
	}

	#[test]
	fn open_with_empty_query_applies_results() {
		let mut state = SelectorState::new();
		let request = state.open().expect("open issues a search");
		assert_eq!(request.query, "");
		assert!(state.is_loading());

		let outcome = state.apply_response(request.generation, &request.query, Ok(alice()));

		assert_eq!(outcome, ResponseOutcome::Applied { count: 1 });
		assert_eq!(state.candidates(), alice().as_slice());
		assert!(!state.is_loading());
	}

	#[test]
	fn reopening_while_open_is_a_no_op() {
		let mut state = SelectorState::new();
		let first = state.open().expect("first open");
		assert!(state.open().is_none());
		assert_eq!(state.generation(), first.generation);
	}

	#[test]
	fn typing_while_closed_does_not_search() {
		let mut state = SelectorState::new();
		assert!(state.set_query_text("smith").is_none());
		assert_eq!(state.query_text(), "smith");
		assert!(!state.is_loading());

		let request = state.open().expect("open searches the typed text");
		assert_eq!(request.query, "smith");
	}

	#[test]
	fn out_of_order_response_is_dropped() {
		let mut state = SelectorState::new();
		let opened = state.open().expect("open");
		state.apply_response(opened.generation, "", Ok(alice()));

		let bo = state.set_query_text("Bo").expect("gen 2");
		let bob = state.set_query_text("Bob").expect("gen 3");
		assert_eq!(bo.generation, Generation::new(2));
		assert_eq!(bob.generation, Generation::new(3));

		let newest = state.apply_response(
			bob.generation,
			&bob.query,
			Ok(vec![Candidate::new("3", "Bob B.")]),
		);
		let late = state.apply_response(
			bo.generation,
			&bo.query,
			Ok(vec![Candidate::new("2", "Bob A.")]),
		);

		assert_eq!(newest, ResponseOutcome::Applied { count: 1 });
		assert!(late.is_stale());
		assert_eq!(state.candidates(), &[Candidate::new("3", "Bob B.")]);
		assert!(!state.is_loading());
	}

	#[test]
	fn loading_tracks_only_the_latest_generation() {
		let mut state = SelectorState::new();
		state.open().expect("open");
		let first = state.set_query_text("a").expect("first");
		state.set_query_text("ab").expect("second");

		state.apply_response(first.generation, &first.query, Ok(alice()));
		assert!(state.is_loading());
		assert!(state.candidates().is_empty());
	}

	#[test]
	fn failure_clears_candidates_and_reports_once() {
		let mut state = SelectorState::new();
		let opened = state.open().expect("open");
		state.apply_response(opened.generation, "", Ok(alice()));

		let request = state.set_query_text("xyz").expect("search");
		let error = SearchError::Transport {
			url: "http://api/patients".into(),
			message: "connection refused".into(),
		};
		let outcome =
			state.apply_response(request.generation, &request.query, Err(error.clone()));

		assert_eq!(
			outcome,
			ResponseOutcome::Failed(SearchFailure {
				generation: request.generation.get(),
				query: "xyz".into(),
				error,
			})
		);
		assert!(state.candidates().is_empty());
		assert!(!state.is_loading());
	}

	#[test]
	fn close_discards_results_and_late_responses() {
		let mut state = SelectorState::new();
		state.open().expect("open");
		let foo = state.set_query_text("foo").expect("search");

		state.close();
		let outcome = state.apply_response(foo.generation, &foo.query, Ok(alice()));

		assert!(outcome.is_stale());
		assert!(!state.is_open());
		assert!(state.candidates().is_empty());
		assert!(!state.is_loading());
	}

	#[test]
	fn close_resets_text_but_keeps_counting() {
		let mut state = SelectorState::new();
		state.open().expect("open");
		state.set_query_text("jones").expect("search");
		let before = state.generation();

		state.close();

		assert_eq!(state.query_text(), "");
		assert_eq!(state.generation(), before.next());
		let reopened = state.open().expect("reopen");
		assert_eq!(reopened.generation, before.next().next());
	}

	#[test]
	fn whitespace_is_forwarded_verbatim() {
		let mut state = SelectorState::new();
		state.open().expect("open");
		let request = state.set_query_text("  smith ").expect("search");
		assert_eq!(request.query, "  smith ");
	}
}
