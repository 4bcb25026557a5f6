use std::fmt::Write;
use std::path::PathBuf;
use std::time::Duration;

use carepick::logging::LogSettings;
use carepick_api::RecordKind;
use carepick_rest::{LabelTemplate, Url};
use carepick_selector::SelectorOptions;
use carepick_tui::Theme;

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub(crate) kind: RecordKind,
	pub(crate) source: SearchSource,
	pub(crate) selector: SelectorOptions,
	/// Candidates requested per search.
	pub(crate) limit: usize,
	pub(crate) label_template: LabelTemplate,
	pub(crate) ui: UiSettings,
	pub(crate) log: LogSettings,
}

/// Where candidates come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SearchSource {
	Rest(RestSettings),
	/// JSON file of `{"id", "label"}` records searched in memory.
	Fixture(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RestSettings {
	pub(crate) base_url: Url,
	pub(crate) timeout: Option<Duration>,
	pub(crate) query_param: String,
	pub(crate) limit_param: String,
	pub(crate) id_field: String,
}

#[derive(Debug, Clone)]
pub(crate) struct UiSettings {
	pub(crate) title: String,
	pub(crate) initial_query: String,
	pub(crate) theme_name: String,
	pub(crate) theme: Theme,
	/// Id the host form starts out with.
	pub(crate) selected: Option<String>,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		print!("{}", self.summary());
	}

	fn summary(&self) -> String {
		let mut out = String::new();
		let _ = writeln!(out, "Effective configuration:");
		let _ = writeln!(out, "  Record kind: {}", self.kind);
		match &self.source {
			SearchSource::Rest(rest) => {
				let _ = writeln!(out, "  API base URL: {}", rest.base_url);
				match rest.timeout {
					Some(timeout) => {
						let _ = writeln!(out, "  Request timeout: {}s", timeout.as_secs());
					}
					None => {
						let _ = writeln!(out, "  Request timeout: none");
					}
				}
				let _ = writeln!(
					out,
					"  Query parameters: {} / {}",
					rest.query_param, rest.limit_param
				);
				let _ = writeln!(out, "  Id field: {}", rest.id_field);
				let _ = writeln!(out, "  Label template: {}", self.label_template.as_str());
			}
			SearchSource::Fixture(path) => {
				let _ = writeln!(out, "  Fixture: {}", path.display());
			}
		}
		let _ = writeln!(out, "  Result limit: {}", self.limit);
		let _ = writeln!(
			out,
			"  Debounce: {} ms",
			self.selector.debounce.as_millis()
		);
		let _ = writeln!(out, "  Workers: {}", self.selector.workers);
		let _ = writeln!(out, "  UI theme: {}", self.ui.theme_name);
		let _ = writeln!(out, "  Prompt title: {}", self.ui.title);
		if !self.ui.initial_query.is_empty() {
			let _ = writeln!(out, "  Initial query: {}", self.ui.initial_query);
		}
		let _ = writeln!(
			out,
			"  Selected id: {}",
			self.ui.selected.as_deref().unwrap_or("(none)")
		);
		let _ = writeln!(out, "  Log level: {}", self.log.level);
		let _ = writeln!(out, "  Log file: {}", self.log.file.display());
		out
	}
}
