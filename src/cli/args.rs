use std::fmt::Write;
use std::path::PathBuf;

use carepick::app_dirs;
use carepick_api::RecordKind;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum};

use super::annotations::dim_cli_annotations;

/// Version banner listing the directories carepick reads and writes.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let cache_dir = match app_dirs::get_cache_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("carepick {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");
	let _ = writeln!(details, "cache directory: {cache_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = tinted_cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn tinted_cli_command() -> Command {
	CliArgs::command().mut_args(dim_cli_annotations)
}

#[derive(Parser, Debug)]
#[command(
	name = "carepick",
	version,
	long_version = long_version(),
	about = "Pick a patient or physician from a remote directory",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CAREPICK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip the default configuration files"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'k',
		long,
		value_enum,
		help = "Record kind to pick (default: patient)"
	)]
	pub(crate) kind: Option<KindArg>,
	#[arg(
		short = 'u',
		long = "base-url",
		value_name = "URL",
		help = "Root URL of the search API"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		short = 'f',
		long,
		value_name = "FILE",
		help = "Search a JSON fixture instead of the API"
	)]
	pub(crate) fixture: Option<PathBuf>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Initial query text (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short = 's',
		long,
		value_name = "ID",
		help = "Id the form already holds (default: none)"
	)]
	pub(crate) selected: Option<String>,
	#[arg(
		short = 'd',
		long = "debounce-ms",
		value_name = "MS",
		help = "Delay before a keystroke triggers a search (default: 150)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long,
		value_name = "NUM",
		help = "Maximum candidates per search (default: 20)"
	)]
	pub(crate) limit: Option<usize>,
	#[arg(
		short = 'j',
		long,
		value_name = "NUM",
		help = "Concurrent search workers (default: 2)"
	)]
	pub(crate) workers: Option<usize>,
	#[arg(
		long = "timeout-secs",
		value_name = "SECS",
		help = "HTTP request timeout (default: none)"
	)]
	pub(crate) timeout_secs: Option<u64>,
	#[arg(long, value_name = "THEME", help = "Colour theme (default: default)")]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Prompt title (default: record kind)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "How to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running"
	)]
	pub(crate) print_config: bool,
	#[arg(short = 'l', long = "list-themes", help = "List themes and exit")]
	pub(crate) list_themes: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum KindArg {
	Patient,
	Physician,
}

impl KindArg {
	/// Value understood by `search.kind`.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			KindArg::Patient => "patient",
			KindArg::Physician => "physician",
		}
	}
}

impl From<KindArg> for RecordKind {
	fn from(kind: KindArg) -> Self {
		match kind {
			KindArg::Patient => RecordKind::Patient,
			KindArg::Physician => RecordKind::Physician,
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	/// `id<TAB>label`, nothing when cancelled.
	Plain,
	/// The whole outcome as JSON.
	Json,
}
