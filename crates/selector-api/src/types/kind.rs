use std::fmt;

use serde::{Deserialize, Serialize};

/// Record families the agency front end picks from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
	/// Patients under the agency's care.
	#[default]
	Patient,
	/// Referring or attending physicians.
	Physician,
}

impl RecordKind {
	/// Every kind, in display order.
	pub const ALL: [RecordKind; 2] = [RecordKind::Patient, RecordKind::Physician];

	/// REST collection serving records of this kind.
	#[must_use]
	pub fn collection(self) -> &'static str {
		match self {
			RecordKind::Patient => "patients",
			RecordKind::Physician => "physicians",
		}
	}

	/// Singular, capitalised noun used in prompts and titles.
	#[must_use]
	pub fn noun(self) -> &'static str {
		match self {
			RecordKind::Patient => "Patient",
			RecordKind::Physician => "Physician",
		}
	}

	/// Label template used when the configuration does not provide one.
	#[must_use]
	pub fn default_label_template(self) -> &'static str {
		match self {
			RecordKind::Patient => "{last_name}, {first_name} ({date_of_birth})",
			RecordKind::Physician => "{first_name} {last_name}",
		}
	}
}

impl fmt::Display for RecordKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			RecordKind::Patient => "patient",
			RecordKind::Physician => "physician",
		})
	}
}
