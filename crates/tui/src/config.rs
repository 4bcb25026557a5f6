use carepick_api::RecordKind;

use crate::host::HostSelection;
use crate::style::Theme;

/// Text rendered around the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerLabels {
	/// Shown in front of the query input.
	pub title: String,
	/// Dimmed text in the empty query input.
	pub placeholder: String,
	/// Header of the label column.
	pub label_header: String,
	/// Header of the id column.
	pub id_header: String,
	/// Shown instead of the list while the selector is closed.
	pub closed_hint: String,
	/// Shown while the first results for a query are loading.
	pub searching: String,
	/// Shown when a search came back empty.
	pub no_results: String,
	/// Appended to the status line when the last search failed.
	pub failed: String,
	/// Status line text when nothing is selected.
	pub nothing_selected: String,
}

impl PickerLabels {
	#[must_use]
	pub fn for_kind(kind: RecordKind) -> Self {
		let noun = kind.noun();
		let plural = kind.collection();
		Self {
			title: noun.to_string(),
			placeholder: format!("Search {plural}"),
			label_header: noun.to_string(),
			id_header: "ID".to_string(),
			closed_hint: format!("Press Tab to search {plural}"),
			searching: "Searching...".to_string(),
			no_results: "No results".to_string(),
			failed: "last search failed".to_string(),
			nothing_selected: "none".to_string(),
		}
	}
}

impl Default for PickerLabels {
	fn default() -> Self {
		Self::for_kind(RecordKind::default())
	}
}

/// Everything the picker needs besides the provider.
#[derive(Debug, Clone, Default)]
pub struct PickerConfig {
	pub labels: PickerLabels,
	/// Query text the selector opens with.
	pub initial_query: String,
	/// Value the host form already holds.
	pub selection: HostSelection,
	pub theme: Theme,
}

impl PickerConfig {
	#[must_use]
	pub fn for_kind(kind: RecordKind) -> Self {
		Self {
			labels: PickerLabels::for_kind(kind),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.labels.title = title.into();
		self
	}

	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	#[must_use]
	pub fn with_selection(mut self, selection: HostSelection) -> Self {
		self.selection = selection;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}
}
