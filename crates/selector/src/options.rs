use std::time::Duration;

use crate::debounce::DEFAULT_DEBOUNCE;

/// Worker threads used when the host does not ask for a specific number.
pub const DEFAULT_WORKERS: usize = 2;

/// Tuning knobs for a [`RemoteSelector`](crate::RemoteSelector).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorOptions {
	/// Quiet period after a keystroke before the search is dispatched.
	/// [`Duration::ZERO`] dispatches on every keystroke.
	pub debounce: Duration,
	/// Number of background threads calling the provider. At least one is
	/// always started.
	pub workers: usize,
}

impl SelectorOptions {
	#[must_use]
	pub fn with_debounce(mut self, debounce: Duration) -> Self {
		self.debounce = debounce;
		self
	}

	#[must_use]
	pub fn with_workers(mut self, workers: usize) -> Self {
		self.workers = workers;
		self
	}
}

impl Default for SelectorOptions {
	fn default() -> Self {
		Self {
			debounce: DEFAULT_DEBOUNCE,
			workers: DEFAULT_WORKERS,
		}
	}
}
