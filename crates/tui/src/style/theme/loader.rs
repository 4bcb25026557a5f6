//! Parses the bundled `themes/*.toml` files into [`ThemeRegistration`]s.

use anyhow::{Context, Result, anyhow, bail};
use include_dir::Dir;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use super::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStyles,
}

#[derive(Debug, Deserialize)]
struct ThemeStyles {
	header: StyleEntry,
	row_highlight: StyleEntry,
	prompt: StyleEntry,
	empty: StyleEntry,
	highlight: StyleEntry,
	/// Falls back to `highlight`.
	status: Option<StyleEntry>,
}

/// Colours use ratatui's names, `#rrggbb` or a palette index.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StyleEntry {
	fg: Option<String>,
	bg: Option<String>,
	modifiers: Vec<String>,
}

impl StyleEntry {
	fn to_style(&self, key: &str) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(parse_color(fg).with_context(|| format!("{key}.fg"))?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(parse_color(bg).with_context(|| format!("{key}.bg"))?);
		}
		for name in &self.modifiers {
			let modifier = parse_modifier(name).with_context(|| format!("{key}.modifiers"))?;
			style = style.add_modifier(modifier);
		}
		Ok(style)
	}
}

impl ThemeStyles {
	fn into_theme(self) -> Result<Theme> {
		let highlight = self.highlight.to_style("styles.highlight")?;
		let status = match &self.status {
			Some(status) => status.to_style("styles.status")?,
			None => highlight,
		};
		Ok(Theme {
			header: self.header.to_style("styles.header")?,
			row_highlight: self.row_highlight.to_style("styles.row_highlight")?,
			prompt: self.prompt.to_style("styles.prompt")?,
			empty: self.empty.to_style("styles.empty")?,
			highlight,
			status,
		})
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<_> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut registrations = Vec::new();
	let mut default_theme = None;
	for file in files {
		let path = file.path().display().to_string();
		let contents = file
			.contents_utf8()
			.with_context(|| format!("{path} is not valid UTF-8"))?;
		let (registration, is_default) =
			parse_theme(contents).with_context(|| format!("invalid theme file {path}"))?;
		if is_default {
			if default_theme.is_some() {
				bail!("more than one built-in theme is marked as default");
			}
			default_theme = Some(registration.theme);
		}
		registrations.push(registration);
	}

	let Some(first) = registrations.first() else {
		bail!("no built-in theme definitions were found");
	};
	let default_theme = default_theme.unwrap_or(first.theme);
	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}

fn parse_theme(contents: &str) -> Result<(ThemeRegistration, bool)> {
	let file: ThemeFile = toml::from_str(contents)?;
	let theme = file.styles.into_theme()?;
	let registration = file
		.aliases
		.iter()
		.map(|alias| alias.trim())
		.filter(|alias| !alias.is_empty())
		.fold(ThemeRegistration::new(file.name, theme), |registration, alias| {
			registration.alias(alias)
		});
	Ok((registration, file.default))
}

fn parse_color(value: &str) -> Result<Color> {
	value
		.trim()
		.parse()
		.map_err(|_| anyhow!("unknown colour `{value}`"))
}

fn parse_modifier(name: &str) -> Result<Modifier> {
	match name.trim().to_ascii_lowercase().as_str() {
		"bold" => Ok(Modifier::BOLD),
		"dim" => Ok(Modifier::DIM),
		"italic" => Ok(Modifier::ITALIC),
		"underlined" => Ok(Modifier::UNDERLINED),
		"reversed" => Ok(Modifier::REVERSED),
		other => bail!("unknown modifier `{other}`"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn colours_use_ratatui_names_and_hex() {
		assert_eq!(parse_color("light_cyan").expect("named"), Color::LightCyan);
		assert_eq!(parse_color("dark_gray").expect("named"), Color::DarkGray);
		assert_eq!(parse_color("#2e3440").expect("hex"), Color::Rgb(0x2e, 0x34, 0x40));
		assert!(parse_color("chartreuse").is_err());
	}

	#[test]
	fn status_style_falls_back_to_highlight() {
		let (registration, is_default) = parse_theme(
			r##"
name = "mono"
aliases = [" m ", ""]

[styles.header]
[styles.row_highlight]
modifiers = ["reversed"]
[styles.prompt]
[styles.empty]
[styles.highlight]
fg = "#ff0000"
"##,
		)
		.expect("parse theme");

		assert_eq!(registration.name, "mono");
		assert_eq!(registration.aliases, vec!["m".to_string()]);
		assert_eq!(registration.theme.status, registration.theme.highlight);
		assert!(!is_default);
	}

	#[test]
	fn unknown_modifier_names_the_key() {
		let err = parse_theme(
			r#"
name = "broken"
[styles.header]
modifiers = ["sparkly"]
[styles.row_highlight]
[styles.prompt]
[styles.empty]
[styles.highlight]
"#,
		)
		.err()
		.expect("invalid modifier");
		let message = format!("{err:#}");
		assert!(message.contains("styles.header.modifiers"));
		assert!(message.contains("sparkly"));
	}
}
