use std::fmt;

use serde::{Deserialize, Serialize};

/// A single selectable record surfaced by a search.
///
/// Candidates only live inside a result set. The `id` is opaque to the
/// selector and is what the host persists; `label` is display text derived by
/// the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
	/// Unique, opaque record identifier.
	pub id: String,
	/// Human readable text shown in the candidate list.
	pub label: String,
}

impl Candidate {
	/// Construct a candidate from an id and a label.
	#[must_use]
	pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
		}
	}
}

impl fmt::Display for Candidate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.label)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deserializes_fixture_records() {
		let json = r#"[{"id":"1","label":"Alice"},{"id":"2","label":"Bob"}]"#;
		let parsed: Vec<Candidate> = serde_json::from_str(json).expect("parse fixture");
		assert_eq!(
			parsed,
			vec![Candidate::new("1", "Alice"), Candidate::new("2", "Bob")]
		);
	}

	#[test]
	fn displays_label() {
		assert_eq!(Candidate::new("7", "Dr. Grey").to_string(), "Dr. Grey");
	}
}
