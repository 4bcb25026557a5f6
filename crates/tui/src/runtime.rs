//! Terminal setup and the event loop.

use std::io::stdout;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use carepick_api::SearchProvider;
use carepick_selector::SelectorOptions;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use crate::app::PickerApp;
use crate::config::PickerConfig;
use crate::outcome::PickOutcome;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Build a [`PickerApp`] and run it to completion.
pub fn run(
	provider: Arc<dyn SearchProvider>,
	options: SelectorOptions,
	config: PickerConfig,
) -> Result<PickOutcome> {
	let mut app = PickerApp::new(provider, options, config);
	app.run()
}

impl PickerApp<'_> {
	/// Take over the terminal until the user accepts or cancels.
	pub fn run(&mut self) -> Result<PickOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;

		self.open();

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let result: Result<PickOutcome> = 'event_loop: loop {
			loop {
				let event = match event_rx.try_recv() {
					Ok(event) => event,
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				};
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if let Some(outcome) = self.handle_key(key) {
							break 'event_loop Ok(outcome);
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
			}

			self.tick(Instant::now());
			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			let idle = self
				.selector
				.next_deadline(Instant::now())
				.map_or(FRAME_INTERVAL, |due| due.min(FRAME_INTERVAL));
			thread::sleep(idle);
		};

		ratatui::restore();
		execute!(stdout(), DisableMouseCapture)?;

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}
