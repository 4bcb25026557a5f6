use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::widgets::HighlightSpacing;
use unicode_width::UnicodeWidthStr;

use crate::app::PickerApp;
use crate::components::tables::{
	HIGHLIGHT_SYMBOL, TABLE_COLUMN_SPACING, TABLE_HIGHLIGHT_SPACING, TableSpec,
};
use crate::components::{
	ProgressState, PromptContext, StatusContext, build_candidate_rows, render_message,
	render_prompt, render_status, render_table,
};

/// Width reserved for the id column.
const ID_COLUMN_WIDTH: u16 = 12;

impl PickerApp<'_> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [prompt_area, results_area, status_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Min(3),
			Constraint::Length(1),
		])
		.areas(area);

		let theme = self.style.theme;
		let loading = self.selector.is_loading();
		render_prompt(
			frame,
			PromptContext {
				title: &self.labels.title,
				input: &self.input,
				placeholder: Some(&self.labels.placeholder),
				area: prompt_area,
				theme: &theme,
			},
			ProgressState {
				progress_text: "",
				progress_complete: !loading,
				throbber_state: &self.throbber_state,
			},
		);

		self.results_area = Some(results_area);
		self.render_results(frame, results_area);

		render_status(
			frame,
			StatusContext {
				selected: self.selection.display(self.selector.candidates()),
				nothing_selected: &self.labels.nothing_selected,
				failure: self
					.selector
					.last_failure()
					.map(|_| self.labels.failed.as_str()),
				area: status_area,
				theme: &theme,
			},
		);
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		let theme = self.style.theme;
		let title = Some(format!(" {} ", self.labels.label_header));
		let candidates = self.selector.candidates();

		let message = if !self.selector.is_open() {
			Some(&self.labels.closed_hint)
		} else if candidates.is_empty() && self.selector.is_loading() {
			Some(&self.labels.searching)
		} else if candidates.is_empty() {
			Some(&self.labels.no_results)
		} else {
			None
		};
		if let Some(message) = message {
			render_message(frame, area, title, message, theme.empty_style(), &theme);
			return;
		}

		let widths = vec![Constraint::Fill(1), Constraint::Length(ID_COLUMN_WIDTH)];
		let column_widths = resolve_column_widths(area, &widths, self.table_state.selected().is_some());
		let rows = build_candidate_rows(candidates, column_widths.first().copied());
		let spec = TableSpec {
			headers: vec![self.labels.label_header.clone(), self.labels.id_header.clone()],
			widths,
			rows,
			title,
		};
		render_table(
			frame,
			area,
			&mut self.table_state,
			&mut self.scrollbar_state,
			spec,
			&theme,
		);
	}
}

/// Column widths the table will lay out inside `area`'s border.
pub(crate) fn resolve_column_widths(
	area: Rect,
	widths: &[Constraint],
	has_selection: bool,
) -> Vec<u16> {
	let table_width = area.width.saturating_sub(2);
	if widths.is_empty() || table_width == 0 {
		return Vec::new();
	}

	let highlight_width = match TABLE_HIGHLIGHT_SPACING {
		HighlightSpacing::Always => HIGHLIGHT_SYMBOL.width() as u16,
		HighlightSpacing::WhenSelected if has_selection => HIGHLIGHT_SYMBOL.width() as u16,
		HighlightSpacing::WhenSelected | HighlightSpacing::Never => 0,
	};

	let [_selection, columns_area] =
		Layout::horizontal([Constraint::Length(highlight_width), Constraint::Fill(0)])
			.areas(Rect::new(0, 0, table_width, 1));

	Layout::horizontal(widths.to_vec())
		.spacing(TABLE_COLUMN_SPACING)
		.split(columns_area)
		.iter()
		.map(|rect| rect.width)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn column_widths_use_table_inner_area() {
		let area = Rect::new(0, 0, 10, 5);
		let resolved = resolve_column_widths(area, &[Constraint::Length(20)], false);
		let symbol = HIGHLIGHT_SYMBOL.width() as u16;
		assert_eq!(resolved, vec![area.width - 2 - symbol]);
	}

	#[test]
	fn id_column_keeps_its_width() {
		let area = Rect::new(0, 0, 60, 5);
		let widths = [Constraint::Fill(1), Constraint::Length(ID_COLUMN_WIDTH)];
		let resolved = resolve_column_widths(area, &widths, true);

		assert_eq!(resolved.len(), 2);
		assert_eq!(resolved[1], ID_COLUMN_WIDTH);
		let symbol = HIGHLIGHT_SYMBOL.width() as u16;
		assert_eq!(
			resolved[0] + resolved[1] + TABLE_COLUMN_SPACING,
			area.width - 2 - symbol
		);
	}
}
