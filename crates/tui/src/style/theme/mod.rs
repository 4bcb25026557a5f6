mod loader;
mod types;

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use loader::{BuiltinThemes, load_builtin_themes};
pub use types::{Theme, ThemeRegistration};

const BUILTIN_THEME_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/style/theme/themes");

/// Theme lookup failures.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
	#[error("unknown theme `{name}` (available: {available})")]
	Unknown { name: String, available: String },
	#[error("failed to load built-in themes: {0}")]
	Builtin(String),
}

fn builtins() -> Result<&'static BuiltinThemes, ThemeError> {
	static BUILTINS: OnceLock<Result<BuiltinThemes, String>> = OnceLock::new();
	BUILTINS
		.get_or_init(|| load_builtin_themes(&BUILTIN_THEME_DIR).map_err(|err| format!("{err:#}")))
		.as_ref()
		.map_err(|err| ThemeError::Builtin(err.clone()))
}

/// The themes bundled with the picker, sorted by file name.
pub fn builtin_themes() -> Result<&'static [ThemeRegistration], ThemeError> {
	builtins().map(|themes| themes.registrations.as_slice())
}

/// The theme marked as default, or [`Theme::plain`] if none could be loaded.
#[must_use]
pub fn default_theme() -> Theme {
	builtins().map_or(Theme::plain(), |themes| themes.default_theme)
}

/// Look a theme up by name or alias, ignoring ASCII case.
pub fn by_name(name: &str) -> Result<Theme, ThemeError> {
	let registrations = builtin_themes()?;
	registrations
		.iter()
		.find(|registration| registration.answers_to(name))
		.map(|registration| registration.theme)
		.ok_or_else(|| ThemeError::Unknown {
			name: name.to_string(),
			available: names().unwrap_or_default().join(", "),
		})
}

/// Primary names of the bundled themes.
pub fn names() -> Result<Vec<String>, ThemeError> {
	Ok(builtin_themes()?
		.iter()
		.map(|registration| registration.name.clone())
		.collect())
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_themes_load() {
		assert_eq!(
			names().expect("builtin themes"),
			vec!["default".to_string(), "light".to_string()]
		);
		assert_eq!(default_theme(), by_name("default").expect("default theme"));
	}

	#[test]
	fn aliases_resolve_case_insensitively() {
		assert_eq!(
			by_name("DAY").expect("alias"),
			by_name("light").expect("light")
		);
		assert_ne!(by_name("light").expect("light"), default_theme());
	}

	#[test]
	fn unknown_theme_lists_alternatives() {
		let err = by_name("neon").expect_err("no such theme");
		assert_eq!(
			err.to_string(),
			"unknown theme `neon` (available: default, light)"
		);
	}
}
