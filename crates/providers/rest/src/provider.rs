use std::time::Duration;

use carepick_api::{Candidate, SearchError, SearchProvider};
use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::decode::{decode_candidates, decode_record};
use crate::endpoint::RestEndpoint;

const DEFAULT_USER_AGENT: &str = concat!("carepick/", env!("CARGO_PKG_VERSION"));

/// Transport settings for [`RestSearchProvider`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestOptions {
	/// Per-request timeout. `None` waits indefinitely, leaving the selector
	/// in its loading state until the server answers.
	pub timeout: Option<Duration>,
	pub user_agent: Option<String>,
}

/// Parse a service root that collection paths can be appended to.
pub fn parse_base_url(raw: &str) -> Result<Url, SearchError> {
	let url = Url::parse(raw).map_err(|_| SearchError::InvalidUrl(raw.to_string()))?;
	if url.cannot_be_a_base() {
		return Err(SearchError::InvalidUrl(raw.to_string()));
	}
	Ok(url)
}

/// Blocking HTTP provider; runs on the selector's worker threads.
#[derive(Debug, Clone)]
pub struct RestSearchProvider {
	client: Client,
	base_url: Url,
	endpoint: RestEndpoint,
}

impl RestSearchProvider {
	pub fn new(
		base_url: &str,
		endpoint: RestEndpoint,
		options: RestOptions,
	) -> Result<Self, SearchError> {
		let base_url = parse_base_url(base_url)?;

		let client = Client::builder()
			.timeout(options.timeout)
			.user_agent(
				options
					.user_agent
					.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
			)
			.build()
			.map_err(|err| SearchError::Other(format!("failed to build HTTP client: {err}")))?;

		Ok(Self {
			client,
			base_url,
			endpoint,
		})
	}

	#[must_use]
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	#[must_use]
	pub fn endpoint(&self) -> &RestEndpoint {
		&self.endpoint
	}

	fn get(&self, url: &Url) -> Result<Response, SearchError> {
		tracing::debug!(%url, "GET");
		self.client
			.get(url.clone())
			.header(ACCEPT, "application/json")
			.send()
			.map_err(|err| SearchError::Transport {
				url: url.to_string(),
				message: err.to_string(),
			})
	}
}

fn read_json(url: &Url, response: Response) -> Result<Value, SearchError> {
	let status = response.status();
	if !status.is_success() {
		return Err(SearchError::Status {
			url: url.to_string(),
			status: status.as_u16(),
		});
	}
	response.json::<Value>().map_err(SearchError::decode)
}

impl SearchProvider for RestSearchProvider {
	fn search(&self, query: &str) -> Result<Vec<Candidate>, SearchError> {
		let url = self.endpoint.search_url(&self.base_url, query)?;
		let body = read_json(&url, self.get(&url)?)?;
		decode_candidates(&body, &self.endpoint)
	}

	fn fetch(&self, id: &str) -> Result<Option<Candidate>, SearchError> {
		let url = self.endpoint.record_url(&self.base_url, id)?;
		let response = self.get(&url)?;
		if response.status() == StatusCode::NOT_FOUND {
			return Ok(None);
		}
		let body = read_json(&url, response)?;
		Ok(decode_record(&body, &self.endpoint))
	}
}
