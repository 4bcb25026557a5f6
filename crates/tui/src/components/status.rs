use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::style::Theme;

pub struct StatusContext<'a> {
	/// Resolved text for the selected value, if any.
	pub selected: Option<&'a str>,
	pub nothing_selected: &'a str,
	/// Marker appended when the current results come from a failed search.
	pub failure: Option<&'a str>,
	pub area: Rect,
	pub theme: &'a Theme,
}

pub fn render_status(frame: &mut Frame, status: StatusContext<'_>) {
	let StatusContext {
		selected,
		nothing_selected,
		failure,
		area,
		theme,
	} = status;

	let mut spans = vec![Span::styled("Selected: ", theme.empty_style())];
	spans.push(match selected {
		Some(text) => Span::styled(text.to_string(), theme.status),
		None => Span::styled(nothing_selected.to_string(), theme.empty_style()),
	});
	if let Some(marker) = failure {
		spans.push(Span::raw("  "));
		spans.push(Span::styled(format!("({marker})"), theme.highlight_style()));
	}
	frame.render_widget(Line::from(spans), area);
}
