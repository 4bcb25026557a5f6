use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

const TITLE_SEPARATOR: &str = " › ";

/// Argument bundle for rendering the prompt row.
pub struct PromptContext<'a> {
	pub title: &'a str,
	pub input: &'a QueryInput<'a>,
	/// Shown while the input is empty.
	pub placeholder: Option<&'a str>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Loading indicator drawn at the right edge of the prompt.
pub struct ProgressState<'a> {
	pub progress_text: &'a str,
	pub progress_complete: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render the title, the query input and the loading indicator.
pub fn render_prompt(frame: &mut Frame, prompt: PromptContext<'_>, progress: ProgressState<'_>) {
	let PromptContext {
		title,
		input,
		placeholder,
		area,
		theme,
	} = prompt;

	let title_line = Line::from(vec![
		Span::styled(title.to_string(), theme.prompt),
		Span::styled(TITLE_SEPARATOR, theme.empty_style()),
	]);
	let title_width = (title.width() + TITLE_SEPARATOR.width()) as u16;
	let [title_area, input_area] =
		Layout::horizontal([Constraint::Length(title_width), Constraint::Fill(1)]).areas(area);

	frame.render_widget(title_line, title_area);
	input.render(frame, input_area);

	if input.text().is_empty()
		&& let Some(placeholder_text) = placeholder
	{
		render_placeholder(frame, input_area, placeholder_text, theme);
	}

	render_progress(frame, input_area, progress, theme);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width <= 1 || area.height == 0 || text.is_empty() {
		return;
	}
	// Leave the first cell to the cursor.
	let available_width = (area.width - 1) as usize;
	let display_text: String = text.chars().take(available_width).collect();
	frame.buffer_mut().set_line(
		area.left() + 1,
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty_style())),
		area.width - 1,
	);
}

fn render_progress(frame: &mut Frame, area: Rect, progress: ProgressState<'_>, theme: &Theme) {
	let ProgressState {
		progress_text,
		progress_complete,
		throbber_state,
	} = progress;
	if area.width == 0 || area.height == 0 || progress_complete {
		return;
	}

	let muted_style = theme.empty_style();
	let spinner = Throbber::default()
		.style(muted_style)
		.throbber_style(muted_style);
	let mut line = Line::default();
	line.spans.push(spinner.to_symbol_span(throbber_state));
	if !progress_text.is_empty() {
		line.spans.push(Span::styled(progress_text.to_string(), muted_style));
	}

	let line_width = line.width() as u16;
	let buffer = frame.buffer_mut();
	let mut start_x = area.right().saturating_sub(line_width).max(area.left());

	// Keep clear of the typed text.
	let input_row = area.top();
	let last_char_x = (area.left()..area.right())
		.rev()
		.find(|&x| {
			buffer
				.cell((x, input_row))
				.is_some_and(|cell| !cell.symbol().trim().is_empty())
		});
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}

	if start_x >= area.right() {
		return;
	}
	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, input_row, &line, max_width);
}
