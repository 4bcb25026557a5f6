use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, ScrollbarState, Table, TableState,
};

use crate::components::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
pub(crate) const TABLE_HIGHLIGHT_SPACING: HighlightSpacing = HighlightSpacing::Always;
/// Header row plus separator inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	pub headers: Vec<String>,
	pub widths: Vec<Constraint>,
	pub rows: Vec<Row<'a>>,
	pub title: Option<String>,
}

fn bordered(title: Option<String>, theme: &Theme) -> Block<'static> {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style());
	match title {
		Some(title) => block.title(title),
		None => block,
	}
}

/// Render the candidate table inside a rounded border.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	scrollbar_state: &mut ScrollbarState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let block = bordered(spec.title.clone(), theme);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let header_cells = spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>();
	let header = Row::new(header_cells)
		.style(theme.header)
		.height(1)
		.bottom_margin(1);

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let available_rows = usize::from(inner.height.saturating_sub(TABLE_HEADER_ROWS));
	let metrics = ScrollMetrics::compute(spec.rows.len(), available_rows);

	let table_area = if metrics.needs_scrollbar {
		*scrollbar_state = ScrollbarState::new(metrics.content_length)
			.viewport_content_length(metrics.viewport_len)
			.position(table_state.selected().unwrap_or_default());
		render_scrollbar(frame, inner, scrollbar_state, theme)
	} else {
		inner
	};

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(TABLE_HIGHLIGHT_SPACING)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, table_state);

	render_header_separator(frame, table_area, theme);
}

/// Render a bordered box holding one centered line of text.
pub fn render_message(
	frame: &mut Frame,
	area: Rect,
	title: Option<String>,
	message: &str,
	style: Style,
	theme: &Theme,
) {
	let block = bordered(title, theme);
	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.height == 0 {
		return;
	}

	let message_area = Rect {
		y: inner.y + inner.height.saturating_sub(1) / 2,
		height: 1,
		..inner
	};
	let paragraph = Paragraph::new(Line::from(Span::styled(message.to_string(), style)))
		.alignment(Alignment::Center);
	frame.render_widget(paragraph, message_area);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= 1 || area.width <= 2 {
		return;
	}
	let sep_rect = Rect {
		y: area.y + 1,
		height: 1,
		..area
	};
	let rule = "─".repeat(usize::from(area.width) - 2);
	let line = Line::from(vec![
		Span::raw(" "),
		Span::styled(rule, theme.border_style()),
		Span::raw(" "),
	]);
	frame.render_widget(Paragraph::new(line), sep_rect);
}
