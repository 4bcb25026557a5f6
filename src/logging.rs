//! File logging for the `carepick` binary.
//!
//! The picker owns the terminal, so `tracing` events from the selector and the
//! providers are written to a log file instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// Environment variable holding `tracing` filter directives.
pub const LOG_ENV: &str = "CAREPICK_LOG";
pub const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_FILE_NAME: &str = "carepick.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
	/// Filter directives used when `CAREPICK_LOG` is unset.
	pub level: String,
	pub file: PathBuf,
}

/// `<data dir>/carepick.log`
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Directives from `CAREPICK_LOG` take precedence over the configured level.
pub fn build_filter(env_directives: Option<&str>, level: &str) -> Result<EnvFilter> {
	match env_directives.map(str::trim).filter(|value| !value.is_empty()) {
		Some(directives) => EnvFilter::try_new(directives)
			.with_context(|| format!("invalid {LOG_ENV} directives `{directives}`")),
		None => EnvFilter::try_new(level)
			.with_context(|| format!("invalid log level `{level}`")),
	}
}

/// Install the global subscriber writing to `settings.file`.
pub fn initialize(settings: &LogSettings) -> Result<()> {
	let env_directives = std::env::var(LOG_ENV).ok();
	let filter = build_filter(env_directives.as_deref(), &settings.level)?;

	if let Some(parent) = settings.file.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&settings.file)
		.with_context(|| format!("failed to open log file {}", settings.file.display()))?;

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	tracing::debug!(file = %settings.file.display(), "logging initialised");
	Ok(())
}

#[cfg(test)]
mod tests {
	use tracing_subscriber::filter::LevelFilter;

	use super::*;

	#[test]
	fn configured_level_is_used_without_env_directives() {
		let filter = build_filter(None, "debug").expect("filter");
		assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

		let blank = build_filter(Some("  "), "warn").expect("filter");
		assert_eq!(blank.max_level_hint(), Some(LevelFilter::WARN));
	}

	#[test]
	fn env_directives_win() {
		let filter = build_filter(Some("carepick_selector=trace"), "info").expect("filter");
		assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
	}
}
