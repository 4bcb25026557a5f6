use std::time::Instant;

use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::PickerApp;
use crate::components::point_in_rect;
use crate::components::tables::TABLE_HEADER_ROWS;
use crate::outcome::PickOutcome;

impl PickerApp<'_> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<PickOutcome> {
		self.handle_key_at(key, Instant::now())
	}

	pub(crate) fn handle_key_at(&mut self, key: KeyEvent, now: Instant) -> Option<PickOutcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Char('c') if ctrl => return Some(self.outcome(false)),
			KeyCode::Char('x') if ctrl => {
				self.selector.select_candidate(None);
				self.pump_selections();
			}
			KeyCode::Esc => {
				if !self.selector.is_open() {
					return Some(self.outcome(false));
				}
				self.close();
			}
			KeyCode::Enter => {
				if let Some(candidate) = self.highlighted().cloned() {
					self.selector.select_candidate(Some(candidate));
					self.pump_selections();
				}
				return Some(self.outcome(true));
			}
			KeyCode::Tab | KeyCode::BackTab => {
				if self.selector.is_open() {
					self.close();
				} else {
					self.open();
				}
			}
			KeyCode::Up => self.move_highlight_up(),
			KeyCode::Down => self.move_highlight_down(),
			KeyCode::PageUp => self.move_highlight_by(-10),
			KeyCode::PageDown => self.move_highlight_by(10),
			_ => {
				if self.input.input(key) {
					self.query_changed(now);
				}
			}
		}
		None
	}

	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		let Some(area) = self.results_area else {
			return;
		};
		if !point_in_rect(mouse.column, mouse.row, area) {
			return;
		}
		match mouse.kind {
			MouseEventKind::ScrollUp => self.move_highlight_up(),
			MouseEventKind::ScrollDown => self.move_highlight_down(),
			MouseEventKind::Down(MouseButton::Left) => {
				self.highlight_row_at(mouse.row);
			}
			_ => {}
		}
	}

	fn move_highlight_up(&mut self) {
		self.move_highlight_by(-1);
	}

	fn move_highlight_down(&mut self) {
		self.move_highlight_by(1);
	}

	fn move_highlight_by(&mut self, delta: isize) {
		let len = self.selector.candidates().len();
		if len == 0 {
			return;
		}
		let next = match self.table_state.selected() {
			Some(current) => current.saturating_add_signed(delta).min(len - 1),
			None => 0,
		};
		self.table_state.select(Some(next));
	}

	/// Highlight the candidate drawn on screen row `row`.
	fn highlight_row_at(&mut self, row: u16) -> bool {
		let Some(area) = self.results_area else {
			return false;
		};
		// Skip the top border plus header and separator.
		let first_row = area.y + 1 + TABLE_HEADER_ROWS;
		if row < first_row {
			return false;
		}
		let index = self.table_state.offset() + usize::from(row - first_row);
		if index >= self.selector.candidates().len() {
			return false;
		}
		self.table_state.select(Some(index));
		true
	}
}
