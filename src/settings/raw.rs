use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail, ensure};
use carepick::logging::{DEFAULT_LOG_LEVEL, LogSettings, default_log_file};
use carepick_api::{DEFAULT_MEMORY_LIMIT, RecordKind};
use carepick_rest::{
	DEFAULT_ID_FIELD, DEFAULT_LIMIT_PARAM, DEFAULT_QUERY_PARAM, LabelTemplate, parse_base_url,
};
use carepick_selector::{DEFAULT_DEBOUNCE, DEFAULT_WORKERS, SelectorOptions};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ResolvedConfig, RestSettings, SearchSource, UiSettings};

const DEFAULT_THEME: &str = "default";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	search: SearchSection,
	labels: LabelsSection,
	ui: UiSection,
	log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
	base_url: Option<String>,
	timeout_secs: Option<u64>,
	query_param: Option<String>,
	limit_param: Option<String>,
	id_field: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
	kind: Option<String>,
	debounce_ms: Option<u64>,
	limit: Option<usize>,
	workers: Option<usize>,
	fixture: Option<PathBuf>,
}

/// Label templates per record kind.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LabelsSection {
	patient: Option<String>,
	physician: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	title: Option<String>,
	initial_query: Option<String>,
	theme: Option<String>,
	selected: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
	level: Option<String>,
	file: Option<PathBuf>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.base_url.clone() {
			self.api.base_url = Some(url);
		}
		if let Some(secs) = cli.timeout_secs {
			self.api.timeout_secs = Some(secs);
		}

		if let Some(kind) = cli.kind {
			self.search.kind = Some(kind.as_str().to_string());
		}
		if let Some(value) = cli.debounce_ms {
			self.search.debounce_ms = Some(value);
		}
		if let Some(value) = cli.limit {
			self.search.limit = Some(value);
		}
		if let Some(value) = cli.workers {
			self.search.workers = Some(value);
		}
		if let Some(path) = cli.fixture.clone() {
			self.search.fixture = Some(path);
		}

		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(query) = cli.query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(id) = cli.selected.clone() {
			self.ui.selected = Some(id);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let kind = match self.search.kind.as_deref() {
			Some(value) => parse_kind(value)?,
			None => RecordKind::default(),
		};

		let workers = self.search.workers.unwrap_or(DEFAULT_WORKERS);
		ensure!(workers > 0, "search.workers must be greater than zero");
		let limit = self.search.limit.unwrap_or(DEFAULT_MEMORY_LIMIT);
		ensure!(limit > 0, "search.limit must be greater than zero");
		let debounce = self
			.search
			.debounce_ms
			.map_or(DEFAULT_DEBOUNCE, Duration::from_millis);
		let selector = SelectorOptions::default()
			.with_debounce(debounce)
			.with_workers(workers);

		let source = match (self.search.fixture, self.api.base_url) {
			(Some(path), _) => SearchSource::Fixture(path),
			(None, Some(raw)) => {
				let base_url = parse_base_url(raw.trim())
					.with_context(|| format!("api.base_url `{raw}` is not a usable URL"))?;
				SearchSource::Rest(RestSettings {
					base_url,
					timeout: self.api.timeout_secs.map(Duration::from_secs),
					query_param: non_empty(self.api.query_param)
						.unwrap_or_else(|| DEFAULT_QUERY_PARAM.to_string()),
					limit_param: non_empty(self.api.limit_param)
						.unwrap_or_else(|| DEFAULT_LIMIT_PARAM.to_string()),
					id_field: non_empty(self.api.id_field)
						.unwrap_or_else(|| DEFAULT_ID_FIELD.to_string()),
				})
			}
			(None, None) => {
				bail!("no search backend configured: set api.base_url or search.fixture")
			}
		};

		let template = match kind {
			RecordKind::Patient => self.labels.patient,
			RecordKind::Physician => self.labels.physician,
		};
		let label_template = LabelTemplate::parse(
			non_empty(template)
				.as_deref()
				.unwrap_or(kind.default_label_template()),
		);

		let theme_name = non_empty(self.ui.theme).unwrap_or_else(|| DEFAULT_THEME.to_string());
		let theme = carepick_tui::style::by_name(&theme_name)?;
		let ui = UiSettings {
			title: non_empty(self.ui.title).unwrap_or_else(|| kind.noun().to_string()),
			initial_query: self.ui.initial_query.unwrap_or_default(),
			theme_name,
			theme,
			selected: non_empty(self.ui.selected),
		};

		let log = LogSettings {
			level: non_empty(self.log.level).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
			file: match self.log.file {
				Some(path) => path,
				None => default_log_file().context("failed to locate the default log file")?,
			},
		};

		Ok(ResolvedConfig {
			kind,
			source,
			selector,
			limit,
			label_template,
			ui,
			log,
		})
	}
}

fn parse_kind(value: &str) -> Result<RecordKind> {
	let normalized = value.trim().to_ascii_lowercase();
	RecordKind::ALL
		.into_iter()
		.find(|kind| kind.to_string() == normalized || kind.collection() == normalized)
		.with_context(|| {
			format!("unknown search.kind `{value}` (expected `patient` or `physician`)")
		})
}

/// Trimmed value, or `None` when blank.
fn non_empty(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}
