//! Coalescing of rapid keystrokes into a single provider request.
//!
//! The debouncer holds at most one pending [`SearchRequest`]: scheduling a new
//! one replaces it and restarts the window. The caller supplies `now`, so the
//! structure performs no I/O and never sleeps.

use std::time::{Duration, Instant};

use crate::request::SearchRequest;

/// Delay applied when the host does not configure one.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

#[derive(Debug)]
pub struct QueryDebouncer {
	window: Duration,
	pending: Option<(SearchRequest, Instant)>,
}

impl QueryDebouncer {
	#[must_use]
	pub fn new(window: Duration) -> Self {
		Self {
			window,
			pending: None,
		}
	}

	/// A zero window means every request is dispatched as soon as it exists.
	#[must_use]
	pub fn is_passthrough(&self) -> bool {
		self.window.is_zero()
	}

	/// Park `request`, superseding anything already waiting.
	pub fn schedule(&mut self, request: SearchRequest, now: Instant) {
		self.pending = Some((request, now));
	}

	/// Take the pending request if its window has elapsed.
	pub fn flush_ready(&mut self, now: Instant) -> Option<SearchRequest> {
		let (_, scheduled_at) = self.pending.as_ref()?;
		if now.saturating_duration_since(*scheduled_at) < self.window {
			return None;
		}
		self.pending.take().map(|(request, _)| request)
	}

	/// Drop the pending request without dispatching it.
	pub fn cancel(&mut self) -> Option<SearchRequest> {
		self.pending.take().map(|(request, _)| request)
	}

	/// Time left until the pending request is due, if there is one.
	#[must_use]
	pub fn due_in(&self, now: Instant) -> Option<Duration> {
		let (_, scheduled_at) = self.pending.as_ref()?;
		Some(
			self.window
				.saturating_sub(now.saturating_duration_since(*scheduled_at)),
		)
	}
}

impl Default for QueryDebouncer {
	fn default() -> Self {
		Self::new(DEFAULT_DEBOUNCE)
	}
}
