use anyhow::{Result, anyhow};
use config::Map;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	load_with_env(cli, None)
}

/// [`load`] with an explicit environment instead of the process one.
pub(super) fn load_with_env(
	cli: &CliArgs,
	env: Option<Map<String, String>>,
) -> Result<ResolvedConfig> {
	let builder = build_config(cli, env)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}
