use std::fmt;

use serde_json::Value;

/// Display text recipe for a REST record.
///
/// Placeholders in braces name record fields (`{last_name}`), optionally as a
/// dotted path into nested objects (`{name.family}`). Everything else is
/// literal text. Parsing is lenient: an unterminated or empty brace pair is
/// kept as literal text.
///
/// Rendering tidies up after missing fields: empty `()` groups disappear,
/// whitespace runs collapse, and leading or trailing commas are dropped, so
/// `"{last_name}, {first_name} ({date_of_birth})"` renders a record without a
/// birth date as `"Doe, Jane"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTemplate {
	source: String,
	segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Literal(String),
	Field(Vec<String>),
}

impl LabelTemplate {
	#[must_use]
	pub fn parse(source: &str) -> Self {
		let mut segments = Vec::new();
		let mut literal = String::new();
		let mut rest = source;

		while let Some(open) = rest.find('{') {
			literal.push_str(&rest[..open]);
			let after = &rest[open + 1..];
			let field = after
				.find('}')
				.map(|close| (close, after[..close].trim()))
				.filter(|(_, name)| !name.is_empty() && !name.contains('{'));
			match field {
				Some((close, name)) => {
					if !literal.is_empty() {
						segments.push(Segment::Literal(std::mem::take(&mut literal)));
					}
					segments.push(Segment::Field(name.split('.').map(str::to_string).collect()));
					rest = &after[close + 1..];
				}
				None => {
					literal.push('{');
					rest = after;
				}
			}
		}
		literal.push_str(rest);
		if !literal.is_empty() {
			segments.push(Segment::Literal(literal));
		}

		Self {
			source: source.to_string(),
			segments,
		}
	}

	/// Template text as configured.
	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.source
	}

	/// Fill the template from `record`. May return an empty string when every
	/// referenced field is missing.
	#[must_use]
	pub fn render(&self, record: &Value) -> String {
		let mut raw = String::new();
		for segment in &self.segments {
			match segment {
				Segment::Literal(text) => raw.push_str(text),
				Segment::Field(path) => {
					if let Some(value) = lookup(record, path) {
						raw.push_str(&value);
					}
				}
			}
		}
		tidy(&raw)
	}
}

impl fmt::Display for LabelTemplate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.source)
	}
}

fn lookup(record: &Value, path: &[String]) -> Option<String> {
	let mut current = record;
	for key in path {
		current = current.get(key)?;
	}
	match current {
		Value::String(text) => Some(text.clone()),
		Value::Number(number) => Some(number.to_string()),
		Value::Bool(flag) => Some(flag.to_string()),
		Value::Null | Value::Array(_) | Value::Object(_) => None,
	}
}

fn tidy(raw: &str) -> String {
	let mut text = raw.to_string();
	loop {
		let collapsed = text.replace("()", "").replace("( )", "");
		if collapsed == text {
			break;
		}
		text = collapsed;
	}
	let joined = text.split_whitespace().collect::<Vec<_>>().join(" ");
	joined
		.trim_matches(|ch: char| ch == ',' || ch.is_whitespace())
		.to_string()
}
