use carepick_api::{RecordKind, SearchError};
use reqwest::Url;

use crate::label::LabelTemplate;

/// Query parameter carrying the user's text unless configured otherwise.
pub const DEFAULT_QUERY_PARAM: &str = "search";
/// Query parameter carrying the result cap unless configured otherwise.
pub const DEFAULT_LIMIT_PARAM: &str = "limit";
/// Record field holding the identifier unless configured otherwise.
pub const DEFAULT_ID_FIELD: &str = "id";

/// Where and how to search one record collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestEndpoint {
	/// Collection path below the base URL, e.g. `patients`.
	pub collection: String,
	pub query_param: String,
	pub limit_param: String,
	/// Result cap sent to the server; `None` leaves it to the server.
	pub limit: Option<usize>,
	pub id_field: String,
	pub label: LabelTemplate,
}

impl RestEndpoint {
	/// Defaults for the collection serving `kind`.
	#[must_use]
	pub fn for_kind(kind: RecordKind) -> Self {
		Self {
			collection: kind.collection().to_string(),
			query_param: DEFAULT_QUERY_PARAM.to_string(),
			limit_param: DEFAULT_LIMIT_PARAM.to_string(),
			limit: None,
			id_field: DEFAULT_ID_FIELD.to_string(),
			label: LabelTemplate::parse(kind.default_label_template()),
		}
	}

	#[must_use]
	pub fn with_limit(mut self, limit: Option<usize>) -> Self {
		self.limit = limit;
		self
	}

	#[must_use]
	pub fn with_label(mut self, label: LabelTemplate) -> Self {
		self.label = label;
		self
	}

	/// `GET` target for a text search.
	pub fn search_url(&self, base: &Url, query: &str) -> Result<Url, SearchError> {
		let mut url = self.collection_url(base)?;
		{
			let mut pairs = url.query_pairs_mut();
			pairs.append_pair(&self.query_param, query);
			if let Some(limit) = self.limit {
				pairs.append_pair(&self.limit_param, &limit.to_string());
			}
		}
		Ok(url)
	}

	/// `GET` target for a single record.
	pub fn record_url(&self, base: &Url, id: &str) -> Result<Url, SearchError> {
		let mut url = self.collection_url(base)?;
		url.path_segments_mut()
			.map_err(|()| SearchError::InvalidUrl(base.to_string()))?
			.push(id);
		Ok(url)
	}

	fn collection_url(&self, base: &Url) -> Result<Url, SearchError> {
		let mut url = base.clone();
		{
			let mut segments = url
				.path_segments_mut()
				.map_err(|()| SearchError::InvalidUrl(base.to_string()))?;
			segments.pop_if_empty();
			for segment in self.collection.split('/').filter(|s| !s.is_empty()) {
				segments.push(segment);
			}
		}
		Ok(url)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn base(raw: &str) -> Url {
		Url::parse(raw).expect("valid base url")
	}

	#[test]
	fn search_url_encodes_query_verbatim() {
		let endpoint = RestEndpoint::for_kind(RecordKind::Patient).with_limit(Some(20));
		let url = endpoint
			.search_url(&base("https://agency.example/api/"), "  o'neil ")
			.expect("search url");
		assert_eq!(
			url.as_str(),
			"https://agency.example/api/patients?search=++o%27neil+&limit=20"
		);
	}

	#[test]
	fn empty_query_is_still_sent() {
		let endpoint = RestEndpoint::for_kind(RecordKind::Physician);
		let url = endpoint
			.search_url(&base("http://localhost:8080/v1"), "")
			.expect("search url");
		assert_eq!(url.as_str(), "http://localhost:8080/v1/physicians?search=");
	}

	#[test]
	fn record_url_escapes_the_id() {
		let endpoint = RestEndpoint::for_kind(RecordKind::Patient);
		let url = endpoint
			.record_url(&base("https://agency.example/api"), "a/b 1")
			.expect("record url");
		assert_eq!(url.as_str(), "https://agency.example/api/patients/a%2Fb%201");
	}

	#[test]
	fn nested_collections_are_split_into_segments() {
		let mut endpoint = RestEndpoint::for_kind(RecordKind::Physician);
		endpoint.collection = "/directory/physicians/".to_string();
		let url = endpoint
			.search_url(&base("https://agency.example"), "x")
			.expect("search url");
		assert_eq!(
			url.as_str(),
			"https://agency.example/directory/physicians?search=x"
		);
	}

	#[test]
	fn opaque_base_is_rejected() {
		let endpoint = RestEndpoint::for_kind(RecordKind::Patient);
		let err = endpoint
			.search_url(&base("mailto:desk@agency.example"), "x")
			.expect_err("mailto cannot be a base");
		assert!(matches!(err, SearchError::InvalidUrl(_)));
	}
}
