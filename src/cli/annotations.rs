use clap::Arg;
use clap::builder::StyledStr;
use clap::builder::styling::{AnsiColor, Color, Style};

/// Move clap's possible-value, default and env annotations into the help text,
/// rendered in a muted style.
pub(crate) fn dim_cli_annotations(mut arg: Arg) -> Arg {
	let help_text = arg
		.get_help()
		.map(ToString::to_string)
		.unwrap_or_default();
	let mut annotations = Vec::new();

	if let Some(annotation) = render_possible_values_annotation(&arg) {
		arg = arg.hide_possible_values(true);
		annotations.push(annotation);
	}
	if !help_text.contains("(default:")
		&& let Some(annotation) = render_default_value_annotation(&arg)
	{
		arg = arg.hide_default_value(true);
		annotations.push(annotation);
	}
	if let Some(annotation) = render_env_annotation(&arg) {
		arg = arg.hide_env(true);
		annotations.push(annotation);
	}

	if help_text.is_empty() && annotations.is_empty() {
		return arg;
	}

	let mut styled = style_base_help(&help_text);
	let mut needs_space = !help_text.is_empty();
	for annotation in annotations {
		if needs_space {
			styled.push_str(" ");
		}
		append_muted(&mut styled, &annotation);
		needs_space = true;
	}
	arg.help(styled)
}

fn muted_style() -> Style {
	Style::new()
		.fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)))
		.dimmed()
}

fn append_muted(target: &mut StyledStr, text: &str) {
	let style = muted_style();
	let _ = std::fmt::write(target, format_args!("{style}{text}{style:#}"));
}

/// Mute a trailing `(default: ...)` already written into the help text.
pub(crate) fn style_base_help(text: &str) -> StyledStr {
	let mut styled = StyledStr::new();
	match text.find("(default: ") {
		Some(start) => {
			let end = text[start..].find(')').map_or(text.len(), |rel| start + rel + 1);
			styled.push_str(&text[..start]);
			append_muted(&mut styled, &text[start..end]);
			styled.push_str(&text[end..]);
		}
		None => styled.push_str(text),
	}
	styled
}

pub(crate) fn render_possible_values_annotation(arg: &Arg) -> Option<String> {
	if !arg.get_action().takes_values() {
		return None;
	}
	let visible = arg
		.get_possible_values()
		.into_iter()
		.filter(|value| !value.is_hide_set())
		.map(|value| value.get_name().to_string())
		.collect::<Vec<_>>();
	if visible.is_empty() {
		return None;
	}
	Some(format!("[possible values: {}]", visible.join(", ")))
}

pub(crate) fn render_default_value_annotation(arg: &Arg) -> Option<String> {
	let rendered = arg
		.get_default_values()
		.iter()
		.map(|value| value.to_string_lossy())
		.filter(|text| !text.trim().is_empty())
		.map(|text| text.into_owned())
		.collect::<Vec<_>>();
	if rendered.is_empty() {
		return None;
	}
	Some(format!("(default: {})", rendered.join(", ")))
}

pub(crate) fn render_env_annotation(arg: &Arg) -> Option<String> {
	let name = arg.get_env()?.to_string_lossy();
	if name.trim().is_empty() {
		return None;
	}
	Some(format!("[env: {name}=]"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn possible_values_skip_hidden_entries() {
		let arg = Arg::new("kind").value_parser([
			clap::builder::PossibleValue::new("patient"),
			clap::builder::PossibleValue::new("physician"),
			clap::builder::PossibleValue::new("staff").hide(true),
		]);

		let annotation = render_possible_values_annotation(&arg).expect("annotation");
		assert_eq!(annotation, "[possible values: patient, physician]");
	}

	#[test]
	fn default_values_ignore_blank_entries() {
		let arg = Arg::new("workers").default_values(["2", " "]);
		let annotation = render_default_value_annotation(&arg).expect("annotation");
		assert_eq!(annotation, "(default: 2)");
	}

	#[test]
	fn env_annotation_names_the_variable() {
		let arg = Arg::new("config").env("CAREPICK_CONFIG");
		let annotation = render_env_annotation(&arg).expect("annotation");
		assert_eq!(annotation, "[env: CAREPICK_CONFIG=]");
	}

	#[test]
	fn base_help_keeps_its_text() {
		let text = "Search debounce window (default: 150) in milliseconds";
		assert_eq!(style_base_help(text).to_string(), text);
	}
}
