use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File, Map};

use crate::cli::CliArgs;
use carepick::app_dirs;

/// Prefix of environment overrides, e.g. `CAREPICK__API__BASE_URL`.
const ENV_PREFIX: &str = "carepick";

/// Build a [`Config`] instance by combining default locations with CLI
/// overrides. `env` replaces the process environment when given.
///
/// Environment values stay strings; numeric keys are converted when the
/// settings are deserialized, so ids like `007` survive untouched.
pub(super) fn build_config(cli: &CliArgs, env: Option<Map<String, String>>) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.source(env),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".carepick.toml"));
		files.push(current_dir.join("carepick.toml"));
	}

	files
}
