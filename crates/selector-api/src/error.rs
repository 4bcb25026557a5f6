use thiserror::Error;

/// Errors a [`SearchProvider`](crate::SearchProvider) can report.
///
/// None of these are fatal to the selector: a failed search degrades to an
/// empty result set and is forwarded to the [`FailureLog`](crate::FailureLog).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
	/// The request never produced a response (connection refused, DNS, reset).
	#[error("request to {url} failed: {message}")]
	Transport { url: String, message: String },

	/// The server answered with a non-success status code.
	#[error("{url} responded with HTTP {status}")]
	Status { url: String, status: u16 },

	/// The response body did not have the expected shape.
	#[error("could not decode search response: {0}")]
	Decode(String),

	/// The configured endpoint could not be turned into a request URL.
	#[error("invalid endpoint url '{0}'")]
	InvalidUrl(String),

	/// Provider specific failure that fits none of the other variants.
	#[error("{0}")]
	Other(String),
}

impl SearchError {
	/// Build a [`SearchError::Decode`] from any displayable cause.
	pub fn decode(cause: impl std::fmt::Display) -> Self {
		Self::Decode(cause.to_string())
	}
}
