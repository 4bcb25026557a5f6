use ratatui::style::{Color, Style};

/// Styles for the picker's UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Table headers, borders and separators.
	pub header: Style,
	/// The highlighted candidate row.
	pub row_highlight: Style,
	/// The prompt title in front of the query input.
	pub prompt: Style,
	/// Placeholders, hints and empty states.
	pub empty: Style,
	/// Emphasis, e.g. the failure marker.
	pub highlight: Style,
	/// The selection status line.
	pub status: Style,
}

impl Theme {
	/// Colourless theme used when the bundled definitions are unavailable.
	#[must_use]
	pub const fn plain() -> Self {
		Self {
			header: Style::new(),
			row_highlight: Style::new(),
			prompt: Style::new(),
			empty: Style::new(),
			highlight: Style::new(),
			status: Style::new(),
		}
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	/// Foreground-only variant of the header style for borders and rules.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::default().fg(self.header.fg.unwrap_or(Color::Reset))
	}
}

/// A named theme with its alternate names.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	/// Whether `name` refers to this theme, ignoring ASCII case.
	#[must_use]
	pub fn answers_to(&self, name: &str) -> bool {
		let name = name.trim();
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}
