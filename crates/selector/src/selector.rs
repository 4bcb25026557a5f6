use std::sync::Arc;
use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::{Duration, Instant};

use carepick_api::{
	Candidate, DiscardSelection, FailureLog, SearchFailure, SearchProvider, SelectionSink,
	TracingFailureLog,
};

use crate::debounce::QueryDebouncer;
use crate::generation::Generation;
use crate::options::SelectorOptions;
use crate::request::{ResponseOutcome, SearchResponse};
use crate::runtime::SearchRuntime;
use crate::state::SelectorState;

impl Drop for RemoteSelector {
	fn drop(&mut self) {
		self.runtime.shutdown();
	}
}

/// Searchable single-value picker backed by a remote [`SearchProvider`].
///
/// The selector is controlled: the host owns the selected id and is told about
/// picks through its [`SelectionSink`]. All state changes happen on the thread
/// that owns the selector; provider calls run on background workers and their
/// answers are applied by [`RemoteSelector::poll`].
pub struct RemoteSelector {
	state: SelectorState,
	debouncer: QueryDebouncer,
	runtime: SearchRuntime,
	failure_log: Box<dyn FailureLog>,
	selection_sink: Box<dyn SelectionSink>,
	last_failure: Option<SearchFailure>,
}

impl RemoteSelector {
	/// Mount a closed selector over `provider`.
	pub fn new(provider: Arc<dyn SearchProvider>, options: SelectorOptions) -> Self {
		Self {
			state: SelectorState::new(),
			debouncer: QueryDebouncer::new(options.debounce),
			runtime: SearchRuntime::new(provider, options.workers),
			failure_log: Box::new(TracingFailureLog),
			selection_sink: Box::new(DiscardSelection),
			last_failure: None,
		}
	}

	/// Replace the default `tracing` failure log.
	#[must_use]
	pub fn with_failure_log(mut self, log: impl FailureLog + 'static) -> Self {
		self.failure_log = Box::new(log);
		self
	}

	/// Attach the host form that receives picks.
	#[must_use]
	pub fn with_selection_sink(mut self, sink: impl SelectionSink + 'static) -> Self {
		self.selection_sink = Box::new(sink);
		self
	}

	#[must_use]
	pub fn state(&self) -> &SelectorState {
		&self.state
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.state.is_open()
	}

	#[must_use]
	pub fn query_text(&self) -> &str {
		self.state.query_text()
	}

	#[must_use]
	pub fn candidates(&self) -> &[Candidate] {
		self.state.candidates()
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.state.is_loading()
	}

	#[must_use]
	pub fn generation(&self) -> Generation {
		self.state.generation()
	}

	/// Failure of the current result set, if the last search failed.
	#[must_use]
	pub fn last_failure(&self) -> Option<&SearchFailure> {
		self.last_failure.as_ref()
	}

	/// Show the list and search the current text right away.
	pub fn open(&mut self) {
		if let Some(request) = self.state.open() {
			self.debouncer.cancel();
			self.last_failure = None;
			self.runtime.dispatch(request);
		}
	}

	/// Hide the list, drop results and ignore whatever is still outstanding.
	pub fn close(&mut self) {
		if let Some(pending) = self.debouncer.cancel() {
			tracing::trace!(generation = %pending.generation, "discarding debounced search");
		}
		self.state.close();
		self.last_failure = None;
		self.runtime.advance(self.state.generation());
	}

	/// Update the query text, scheduling a search when open.
	pub fn set_query_text(&mut self, text: impl Into<String>) {
		self.set_query_text_at(text, Instant::now());
	}

	/// [`RemoteSelector::set_query_text`] with an explicit clock reading.
	pub fn set_query_text_at(&mut self, text: impl Into<String>, now: Instant) {
		let Some(request) = self.state.set_query_text(text) else {
			return;
		};
		if self.debouncer.is_passthrough() {
			self.runtime.dispatch(request);
		} else {
			self.runtime.advance(request.generation);
			self.debouncer.schedule(request, now);
		}
	}

	/// Report the user's final pick (or `None` to clear) to the host.
	pub fn select_candidate(&mut self, candidate: Option<Candidate>) {
		tracing::debug!(
			id = candidate.as_ref().map(|c| c.id.as_str()),
			"candidate selected"
		);
		self.selection_sink.candidate_selected(candidate.as_ref());
	}

	/// Dispatch due debounced searches and apply every response that has
	/// arrived. Returns the number of responses handled.
	pub fn poll(&mut self, now: Instant) -> usize {
		if let Some(request) = self.debouncer.flush_ready(now) {
			self.runtime.dispatch(request);
		}

		let mut handled = 0;
		loop {
			match self.runtime.try_recv() {
				Ok(response) => {
					self.handle_response(response);
					handled += 1;
				}
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
		handled
	}

	/// Block up to `timeout` for the next response and apply it.
	///
	/// Debounced searches are flushed first. Intended for hosts without an
	/// event loop and for tests.
	pub fn wait_for_response(&mut self, timeout: Duration) -> Option<ResponseOutcome> {
		if let Some(request) = self.debouncer.cancel() {
			self.runtime.dispatch(request);
		}
		match self.runtime.recv_timeout(timeout) {
			Ok(response) => Some(self.handle_response(response)),
			Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
		}
	}

	/// Time until the pending debounced search is due.
	#[must_use]
	pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
		self.debouncer.due_in(now)
	}

	fn handle_response(&mut self, response: SearchResponse) -> ResponseOutcome {
		let SearchResponse {
			generation,
			query,
			result,
		} = response;
		let outcome = self.state.apply_response(generation, &query, result);
		match &outcome {
			ResponseOutcome::Applied { count } => {
				tracing::debug!(%generation, count, "applied search results");
				self.last_failure = None;
			}
			ResponseOutcome::Failed(failure) => {
				self.failure_log.search_failed(failure);
				self.last_failure = Some(failure.clone());
			}
			ResponseOutcome::Stale => {
				tracing::trace!(%generation, "dropping stale search response");
			}
		}
		outcome
	}
}
