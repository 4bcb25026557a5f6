//! The host form's side of the picker: it owns the selected id.

use carepick_api::Candidate;
use carepick_selector::resolve_display_value;

/// Selected id plus the last label the host learned for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostSelection {
	id: Option<String>,
	label: Option<String>,
}

impl HostSelection {
	#[must_use]
	pub fn new(id: Option<String>, label: Option<String>) -> Self {
		match id {
			Some(id) => Self {
				id: Some(id),
				label,
			},
			None => Self::default(),
		}
	}

	#[must_use]
	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	#[must_use]
	pub fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.id.is_none()
	}

	/// Record a pick (or a clear) reported by the selector.
	pub fn apply(&mut self, candidate: Option<Candidate>) {
		*self = match candidate {
			Some(Candidate { id, label }) => Self {
				id: Some(id),
				label: Some(label),
			},
			None => Self::default(),
		};
	}

	/// Text for the selected value: the matching candidate's label when the id
	/// is in `candidates`, else the known label, else the raw id.
	#[must_use]
	pub fn display<'a>(&'a self, candidates: &'a [Candidate]) -> Option<&'a str> {
		resolve_display_value(self.id(), candidates)
			.map(|candidate| candidate.label.as_str())
			.or(self.label())
			.or(self.id())
	}

	/// The selection as a candidate, labelled with the id when no label is known.
	#[must_use]
	pub fn to_candidate(&self) -> Option<Candidate> {
		let id = self.id.clone()?;
		let label = self.label.clone().unwrap_or_else(|| id.clone());
		Some(Candidate { id, label })
	}
}
