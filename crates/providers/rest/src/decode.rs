use carepick_api::{Candidate, SearchError};
use serde_json::Value;

use crate::endpoint::RestEndpoint;

/// Wrapper keys used by paginated list responses.
const LIST_KEYS: [&str; 3] = ["data", "results", "items"];

/// Turn a search response body into candidates, keeping server order.
///
/// Accepts a bare array of records or an object wrapping the array under one
/// of `data`, `results` or `items`. Records without a usable id are skipped.
pub fn decode_candidates(
	body: &Value,
	endpoint: &RestEndpoint,
) -> Result<Vec<Candidate>, SearchError> {
	let records = match body {
		Value::Array(records) => records,
		Value::Object(map) => LIST_KEYS
			.iter()
			.find_map(|key| map.get(*key).and_then(Value::as_array))
			.ok_or_else(|| SearchError::decode("expected a list of records"))?,
		_ => return Err(SearchError::decode("expected a list of records")),
	};

	Ok(records
		.iter()
		.filter_map(|record| decode_record(record, endpoint))
		.collect())
}

/// Turn one record (bare or wrapped under `data`) into a candidate.
#[must_use]
pub fn decode_record(record: &Value, endpoint: &RestEndpoint) -> Option<Candidate> {
	let record = match record.get("data") {
		Some(inner @ Value::Object(_)) if record.get(&endpoint.id_field).is_none() => inner,
		_ => record,
	};

	let id = match record.get(&endpoint.id_field)? {
		Value::String(id) if !id.is_empty() => id.clone(),
		Value::Number(id) => id.to_string(),
		_ => {
			tracing::trace!(field = %endpoint.id_field, "skipping record without id");
			return None;
		}
	};

	let label = endpoint.label.render(record);
	let label = if label.is_empty() { id.clone() } else { label };
	Some(Candidate { id, label })
}
