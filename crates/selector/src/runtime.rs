//! Background workers that run provider searches off the UI thread.
//!
//! The [`SearchRuntime`] owns the command and response channels. Workers share
//! one command queue, so with more than one worker responses can come back in
//! any order; the selector sorts that out by generation. Workers also consult
//! the shared latest generation and skip queued queries that were superseded
//! before they got a chance to run.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use carepick_api::SearchProvider;

use crate::generation::Generation;
use crate::request::{SearchRequest, SearchResponse};

/// Commands understood by the background workers.
#[derive(Debug)]
pub(crate) enum SearchCommand {
	/// Ask the provider for candidates.
	Query(SearchRequest),
	/// Stop one worker thread.
	Shutdown,
}

/// Launch `workers` search threads and return the communication channels.
pub(crate) fn spawn(
	provider: Arc<dyn SearchProvider>,
	workers: usize,
) -> (Sender<SearchCommand>, Receiver<SearchResponse>, Arc<AtomicU64>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (response_tx, response_rx) = mpsc::channel();
	let latest = Arc::new(AtomicU64::new(0));
	let command_rx = Arc::new(Mutex::new(command_rx));

	for index in 0..workers.max(1) {
		let provider = Arc::clone(&provider);
		let command_rx = Arc::clone(&command_rx);
		let response_tx = response_tx.clone();
		let latest = Arc::clone(&latest);
		let spawned = thread::Builder::new()
			.name(format!("carepick-search-{index}"))
			.spawn(move || worker_loop(provider.as_ref(), &command_rx, &response_tx, &latest));
		if let Err(err) = spawned {
			tracing::error!(worker = index, error = %err, "failed to spawn search worker");
		}
	}

	(command_tx, response_rx, latest)
}

fn worker_loop(
	provider: &dyn SearchProvider,
	command_rx: &Mutex<Receiver<SearchCommand>>,
	response_tx: &Sender<SearchResponse>,
	latest: &AtomicU64,
) {
	loop {
		let command = {
			let Ok(receiver) = command_rx.lock() else {
				break;
			};
			match receiver.recv() {
				Ok(command) => command,
				Err(_) => break,
			}
		};
		if !handle_command(provider, response_tx, latest, command) {
			break;
		}
	}
}

fn handle_command(
	provider: &dyn SearchProvider,
	response_tx: &Sender<SearchResponse>,
	latest: &AtomicU64,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Query(SearchRequest { generation, query }) => {
			if latest.load(AtomicOrdering::Acquire) > generation.get() {
				tracing::trace!(%generation, "skipping superseded query");
				return true;
			}
			let result = provider.search(&query);
			response_tx
				.send(SearchResponse {
					generation,
					query,
					result,
				})
				.is_ok()
		}
		SearchCommand::Shutdown => false,
	}
}

/// Thin wrapper around the worker channels.
pub(crate) struct SearchRuntime {
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchResponse>,
	latest: Arc<AtomicU64>,
	workers: usize,
}

impl SearchRuntime {
	pub(crate) fn new(provider: Arc<dyn SearchProvider>, workers: usize) -> Self {
		let workers = workers.max(1);
		let (tx, rx, latest) = spawn(provider, workers);
		Self {
			tx,
			rx,
			latest,
			workers,
		}
	}

	/// Publish the newest generation so workers can skip older queued work.
	pub(crate) fn advance(&self, generation: Generation) {
		self.latest.fetch_max(generation.get(), AtomicOrdering::AcqRel);
	}

	pub(crate) fn dispatch(&self, request: SearchRequest) {
		self.advance(request.generation);
		tracing::debug!(
			generation = %request.generation,
			query = %request.query,
			"dispatching search"
		);
		if self.tx.send(SearchCommand::Query(request)).is_err() {
			tracing::warn!("search workers are gone; dropping query");
		}
	}

	pub(crate) fn try_recv(&self) -> Result<SearchResponse, TryRecvError> {
		self.rx.try_recv()
	}

	/// Skipped queries never answer, so a timeout does not imply a hung provider.
	pub(crate) fn recv_timeout(&self, timeout: Duration) -> Result<SearchResponse, RecvTimeoutError> {
		self.rx.recv_timeout(timeout)
	}

	pub(crate) fn shutdown(&self) {
		for _ in 0..self.workers {
			let _ = self.tx.send(SearchCommand::Shutdown);
		}
	}
}
