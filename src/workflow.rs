use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use carepick_api::{MemoryProvider, SearchProvider};
use carepick_rest::{RestEndpoint, RestOptions, RestSearchProvider};
use carepick_selector::SelectorOptions;
use carepick_tui::{HostSelection, PickOutcome, PickerConfig};

use crate::settings::{ResolvedConfig, RestSettings, SearchSource};

/// Coordinates building and running the interactive picker.
pub(crate) struct PickerWorkflow {
	provider: Arc<dyn SearchProvider>,
	options: SelectorOptions,
	picker: PickerConfig,
}

impl PickerWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let provider = build_provider(&config)?;
		let ResolvedConfig {
			kind, selector, ui, ..
		} = config;

		let selection = resolve_selection(provider.as_ref(), ui.selected);
		let picker = PickerConfig::for_kind(kind)
			.with_title(ui.title)
			.with_initial_query(ui.initial_query)
			.with_selection(selection)
			.with_theme(ui.theme);

		Ok(Self {
			provider,
			options: selector,
			picker,
		})
	}

	pub(crate) fn run(self) -> Result<PickOutcome> {
		carepick_tui::run(self.provider, self.options, self.picker)
	}
}

fn build_provider(config: &ResolvedConfig) -> Result<Arc<dyn SearchProvider>> {
	match &config.source {
		SearchSource::Fixture(path) => {
			let provider = load_fixture(path)?.with_limit(config.limit);
			tracing::info!(
				fixture = %path.display(),
				records = provider.len(),
				"searching fixture"
			);
			Ok(Arc::new(provider))
		}
		SearchSource::Rest(rest) => {
			let provider = rest_provider(config, rest)?;
			tracing::info!(
				base_url = %provider.base_url(),
				collection = %provider.endpoint().collection,
				"searching REST API"
			);
			Ok(Arc::new(provider))
		}
	}
}

fn load_fixture(path: &Path) -> Result<MemoryProvider> {
	let file = File::open(path)
		.with_context(|| format!("failed to open fixture {}", path.display()))?;
	MemoryProvider::from_json_reader(BufReader::new(file))
		.with_context(|| format!("failed to read fixture {}", path.display()))
}

fn rest_provider(config: &ResolvedConfig, rest: &RestSettings) -> Result<RestSearchProvider> {
	let mut endpoint = RestEndpoint::for_kind(config.kind)
		.with_limit(Some(config.limit))
		.with_label(config.label_template.clone());
	endpoint.query_param = rest.query_param.clone();
	endpoint.limit_param = rest.limit_param.clone();
	endpoint.id_field = rest.id_field.clone();

	let options = RestOptions {
		timeout: rest.timeout,
		..RestOptions::default()
	};
	RestSearchProvider::new(rest.base_url.as_str(), endpoint, options)
		.context("failed to set up the REST search provider")
}

/// Label the id the host starts with. A failed lookup keeps the bare id.
fn resolve_selection(provider: &dyn SearchProvider, selected: Option<String>) -> HostSelection {
	let Some(id) = selected else {
		return HostSelection::default();
	};
	match provider.fetch(&id) {
		Ok(Some(candidate)) => HostSelection::new(Some(candidate.id), Some(candidate.label)),
		Ok(None) => {
			tracing::debug!(%id, "initial selection not found");
			HostSelection::new(Some(id), None)
		}
		Err(error) => {
			tracing::warn!(%id, %error, "failed to look up initial selection");
			HostSelection::new(Some(id), None)
		}
	}
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::path::PathBuf;

	use carepick::logging::LogSettings;
	use carepick_api::{Candidate, RecordKind, SearchError};
	use carepick_rest::{LabelTemplate, parse_base_url};
	use carepick_tui::Theme;
	use tempfile::tempdir;

	use super::*;
	use crate::settings::UiSettings;

	fn config(source: SearchSource, selected: Option<&str>) -> ResolvedConfig {
		ResolvedConfig {
			kind: RecordKind::Physician,
			source,
			selector: SelectorOptions::default(),
			limit: 1,
			label_template: LabelTemplate::parse("Dr. {last_name}"),
			ui: UiSettings {
				title: "Doctor".into(),
				initial_query: "gr".into(),
				theme_name: "default".into(),
				theme: Theme::default(),
				selected: selected.map(str::to_string),
			},
			log: LogSettings {
				level: "info".into(),
				file: PathBuf::from("/tmp/carepick.log"),
			},
		}
	}

	struct Unreachable;

	impl SearchProvider for Unreachable {
		fn search(&self, _query: &str) -> Result<Vec<Candidate>, SearchError> {
			Ok(Vec::new())
		}

		fn fetch(&self, id: &str) -> Result<Option<Candidate>, SearchError> {
			Err(SearchError::Transport {
				url: format!("http://agency.local/physicians/{id}"),
				message: "connection refused".into(),
			})
		}
	}

	#[test]
	fn fixture_provider_honours_the_limit_and_labels_the_selection() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("physicians.json");
		fs::write(
			&path,
			r#"[{"id":"d-1","label":"Dr. Grey"},{"id":"d-2","label":"Dr. Green"}]"#,
		)
		.expect("write fixture");

		let config = config(SearchSource::Fixture(path), Some("d-2"));
		let provider = build_provider(&config).expect("provider");
		assert_eq!(
			provider.search("dr. gr").expect("search"),
			vec![Candidate::new("d-1", "Dr. Grey")]
		);

		let workflow = PickerWorkflow::from_config(config).expect("workflow");
		assert_eq!(workflow.picker.selection.label(), Some("Dr. Green"));
		assert_eq!(workflow.picker.labels.title, "Doctor");
		assert_eq!(workflow.picker.initial_query, "gr");
	}

	#[test]
	fn malformed_fixture_is_reported() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("broken.json");
		fs::write(&path, "{not json").expect("write fixture");

		let err = build_provider(&config(SearchSource::Fixture(path), None))
			.err()
			.expect("decode error");
		assert!(err.to_string().starts_with("failed to read fixture"));
	}

	#[test]
	fn rest_provider_uses_configured_parameters() {
		let rest = RestSettings {
			base_url: parse_base_url("https://agency.example/api/").expect("url"),
			timeout: None,
			query_param: "q".into(),
			limit_param: "per_page".into(),
			id_field: "npi".into(),
		};
		let config = config(SearchSource::Rest(rest.clone()), None);

		let provider = rest_provider(&config, &rest).expect("provider");
		let endpoint = provider.endpoint();

		assert_eq!(endpoint.collection, "physicians");
		assert_eq!(endpoint.query_param, "q");
		assert_eq!(endpoint.limit_param, "per_page");
		assert_eq!(endpoint.limit, Some(1));
		assert_eq!(endpoint.id_field, "npi");
		assert_eq!(endpoint.label.as_str(), "Dr. {last_name}");
	}

	#[test]
	fn failed_lookup_keeps_the_bare_id() {
		let selection = resolve_selection(&Unreachable, Some("d-9".into()));
		assert_eq!(selection.id(), Some("d-9"));
		assert_eq!(selection.label(), None);

		assert!(resolve_selection(&Unreachable, None).is_empty());
	}
}
