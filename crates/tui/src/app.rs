//! State container for the picker.
//!
//! [`PickerApp`] mounts one [`RemoteSelector`] and plays the host form around
//! it: picks come back through an mpsc sink and land in a [`HostSelection`].

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::time::Instant;

use carepick_api::{Candidate, SearchProvider};
use carepick_selector::{Generation, RemoteSelector, SelectorOptions};
use ratatui::layout::Rect;
use ratatui::widgets::{ScrollbarState, TableState};
use throbber_widgets_tui::ThrobberState;

use crate::config::{PickerConfig, PickerLabels};
use crate::host::HostSelection;
use crate::input::QueryInput;
use crate::outcome::PickOutcome;
use crate::style::StyleConfig;

pub struct PickerApp<'a> {
	pub(crate) selector: RemoteSelector,
	pub(crate) input: QueryInput<'a>,
	pub(crate) table_state: TableState,
	pub(crate) scrollbar_state: ScrollbarState,
	pub(crate) labels: PickerLabels,
	pub(crate) style: StyleConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) selection: HostSelection,
	/// Where the candidate rows were last drawn, for mouse hit tests.
	pub(crate) results_area: Option<Rect>,
	selections: Receiver<Option<Candidate>>,
	/// Generation whose results the highlight was last reset for.
	shown_generation: Option<Generation>,
}

impl<'a> PickerApp<'a> {
	/// Build a picker over `provider`. The selector starts closed; the event
	/// loop opens it on start.
	pub fn new(
		provider: Arc<dyn SearchProvider>,
		options: SelectorOptions,
		config: PickerConfig,
	) -> Self {
		let (selection_tx, selections) = mpsc::channel();
		let mut selector = RemoteSelector::new(provider, options).with_selection_sink(selection_tx);
		selector.set_query_text(config.initial_query.clone());

		Self {
			selector,
			input: QueryInput::new(config.initial_query),
			table_state: TableState::default(),
			scrollbar_state: ScrollbarState::default(),
			labels: config.labels,
			style: StyleConfig::with_theme(config.theme),
			throbber_state: ThrobberState::default(),
			selection: config.selection,
			results_area: None,
			selections,
			shown_generation: None,
		}
	}

	#[must_use]
	pub fn selector(&self) -> &RemoteSelector {
		&self.selector
	}

	#[must_use]
	pub fn selection(&self) -> &HostSelection {
		&self.selection
	}

	#[must_use]
	pub fn query(&self) -> &str {
		self.input.text()
	}

	/// Index of the highlighted candidate row.
	#[must_use]
	pub fn highlighted_index(&self) -> Option<usize> {
		self.table_state.selected()
	}

	pub(crate) fn highlighted(&self) -> Option<&Candidate> {
		self.table_state
			.selected()
			.and_then(|index| self.selector.candidates().get(index))
	}

	pub(crate) fn open(&mut self) {
		self.selector.open();
	}

	pub(crate) fn close(&mut self) {
		self.selector.close();
		self.input.clear();
		self.table_state.select(None);
		self.shown_generation = None;
	}

	/// Push the input text into the selector, reopening it if needed.
	pub(crate) fn query_changed(&mut self, now: Instant) {
		let text = self.input.text().to_string();
		self.selector.set_query_text_at(text, now);
		if !self.selector.is_open() {
			self.open();
		}
	}

	/// Apply due searches and arrived responses, then sync the view with them.
	pub(crate) fn tick(&mut self, now: Instant) {
		self.selector.poll(now);
		self.pump_selections();
		self.sync_highlight();
		if self.selector.is_loading() {
			self.throbber_state.calc_next();
		}
	}

	pub(crate) fn pump_selections(&mut self) {
		while let Ok(candidate) = self.selections.try_recv() {
			self.selection.apply(candidate);
		}
	}

	/// Reset the highlight to the first row whenever a new result set lands.
	fn sync_highlight(&mut self) {
		if self.selector.is_loading() || !self.selector.is_open() {
			return;
		}
		let generation = self.selector.generation();
		if self.shown_generation == Some(generation) {
			return;
		}
		self.shown_generation = Some(generation);
		let first = (!self.selector.candidates().is_empty()).then_some(0);
		self.table_state.select(first);
		*self.table_state.offset_mut() = 0;
	}

	pub(crate) fn outcome(&self, accepted: bool) -> PickOutcome {
		if !accepted {
			return PickOutcome::cancelled(self.query());
		}
		PickOutcome {
			accepted,
			selection: self.selection.to_candidate(),
			query: self.query().to_string(),
		}
	}
}
