//! Visual styling for the picker.
//!
//! Themes are colour schemes loaded from the TOML definitions bundled with the
//! crate and looked up by name or alias.

pub mod theme;

pub use theme::{Theme, ThemeError, ThemeRegistration, builtin_themes, by_name, default_theme, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
