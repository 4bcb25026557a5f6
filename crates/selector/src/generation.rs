use std::fmt;

/// Monotonically increasing identifier for a logical search request.
///
/// Generation zero means "nothing issued yet". Every open, keystroke while open
/// and close moves the counter forward; a response is only ever applied when
/// its generation is still the current one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
	pub const ZERO: Generation = Generation(0);

	#[must_use]
	pub fn new(value: u64) -> Self {
		Self(value)
	}

	#[must_use]
	pub fn get(self) -> u64 {
		self.0
	}

	/// The generation that supersedes this one.
	#[must_use]
	pub fn next(self) -> Self {
		Self(self.0.saturating_add(1))
	}
}

impl fmt::Display for Generation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

impl From<Generation> for u64 {
	fn from(generation: Generation) -> Self {
		generation.0
	}
}
