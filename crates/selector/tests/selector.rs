use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use carepick_api::{Candidate, SearchError, SearchFailure, SearchProvider};
use carepick_selector::{RemoteSelector, ResponseOutcome, SelectorOptions, resolve_display_value};

const WAIT: Duration = Duration::from_secs(2);

/// Provider whose answers and timing are scripted per query.
#[derive(Default)]
struct ScriptedProvider {
	responses: HashMap<String, Result<Vec<Candidate>, SearchError>>,
	gates: Mutex<HashMap<String, Receiver<()>>>,
	started: Mutex<Option<Sender<String>>>,
	calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
	fn respond(mut self, query: &str, result: Result<Vec<Candidate>, SearchError>) -> Self {
		self.responses.insert(query.to_string(), result);
		self
	}

	/// Hold `query` inside the provider until the returned sender fires.
	fn gate(&self, query: &str) -> Sender<()> {
		let (tx, rx) = mpsc::channel();
		self.gates
			.lock()
			.expect("gates lock")
			.insert(query.to_string(), rx);
		tx
	}

	fn notify_starts(&self) -> Receiver<String> {
		let (tx, rx) = mpsc::channel();
		*self.started.lock().expect("started lock") = Some(tx);
		rx
	}

	fn calls(&self) -> Vec<String> {
		self.calls.lock().expect("calls lock").clone()
	}
}

impl SearchProvider for ScriptedProvider {
	fn search(&self, query: &str) -> Result<Vec<Candidate>, SearchError> {
		self.calls
			.lock()
			.expect("calls lock")
			.push(query.to_string());
		if let Some(tx) = self.started.lock().expect("started lock").as_ref() {
			let _ = tx.send(query.to_string());
		}
		let gate = self.gates.lock().expect("gates lock").remove(query);
		if let Some(gate) = gate {
			let _ = gate.recv();
		}
		self.responses
			.get(query)
			.cloned()
			.unwrap_or_else(|| Ok(Vec::new()))
	}
}

fn immediate(workers: usize) -> SelectorOptions {
	SelectorOptions::default()
		.with_debounce(Duration::ZERO)
		.with_workers(workers)
}

fn settle(selector: &mut RemoteSelector) {
	let deadline = Instant::now() + WAIT;
	while selector.is_loading() && Instant::now() < deadline {
		selector.wait_for_response(Duration::from_millis(20));
	}
}

#[test]
fn open_with_empty_query_shows_top_results() {
	let provider = Arc::new(
		ScriptedProvider::default().respond("", Ok(vec![Candidate::new("1", "Alice")])),
	);
	let mut selector = RemoteSelector::new(provider.clone(), immediate(1));

	selector.open();
	assert!(selector.is_loading());
	let outcome = selector.wait_for_response(WAIT);

	assert_eq!(outcome, Some(ResponseOutcome::Applied { count: 1 }));
	assert_eq!(selector.candidates(), &[Candidate::new("1", "Alice")]);
	assert!(!selector.is_loading());
	assert_eq!(provider.calls(), vec![String::new()]);
}

#[test]
fn late_response_for_older_query_is_ignored() {
	let provider = Arc::new(
		ScriptedProvider::default()
			.respond("Bo", Ok(vec![Candidate::new("2", "Bob A.")]))
			.respond("Bob", Ok(vec![Candidate::new("3", "Bob B.")])),
	);
	let started = provider.notify_starts();
	let release_bo = provider.gate("Bo");
	let mut selector = RemoteSelector::new(provider.clone(), immediate(2));

	selector.open();
	assert_eq!(started.recv_timeout(WAIT).expect("open search"), "");
	settle(&mut selector);

	selector.set_query_text("Bo");
	assert_eq!(started.recv_timeout(WAIT).expect("Bo in flight"), "Bo");
	selector.set_query_text("Bob");

	let newest = selector.wait_for_response(WAIT);
	assert_eq!(newest, Some(ResponseOutcome::Applied { count: 1 }));

	release_bo.send(()).expect("release Bo");
	let late = selector.wait_for_response(WAIT);
	assert_eq!(late, Some(ResponseOutcome::Stale));

	assert_eq!(selector.candidates(), &[Candidate::new("3", "Bob B.")]);
	assert!(!selector.is_loading());
}

#[test]
fn rapid_typing_always_ends_on_the_last_query() {
	struct SlowEcho;

	impl SearchProvider for SlowEcho {
		fn search(&self, query: &str) -> Result<Vec<Candidate>, SearchError> {
			// Shorter (older) queries take longer, so they tend to land last.
			let delay = 40u64.saturating_sub(query.len() as u64 * 5);
			thread::sleep(Duration::from_millis(delay));
			Ok(vec![Candidate::new(query, query)])
		}
	}

	let mut selector = RemoteSelector::new(Arc::new(SlowEcho), immediate(4));
	selector.open();

	let mut text = String::new();
	for ch in "abcdefg".chars() {
		text.push(ch);
		selector.set_query_text(text.clone());
		selector.poll(Instant::now());
	}

	settle(&mut selector);
	let deadline = Instant::now() + Duration::from_millis(200);
	while Instant::now() < deadline {
		selector.poll(Instant::now());
		thread::sleep(Duration::from_millis(10));
	}

	assert_eq!(selector.candidates(), &[Candidate::new("abcdefg", "abcdefg")]);
	assert!(!selector.is_loading());
}

#[test]
fn provider_failure_degrades_to_no_results() {
	let provider = Arc::new(
		ScriptedProvider::default()
			.respond("", Ok(vec![Candidate::new("1", "Alice")]))
			.respond(
				"xyz",
				Err(SearchError::Transport {
					url: "http://agency.local/patients".into(),
					message: "connection reset".into(),
				}),
			),
	);
	let failures = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&failures);
	let mut selector = RemoteSelector::new(provider, immediate(1))
		.with_failure_log(move |_: &SearchFailure| {
			counter.fetch_add(1, Ordering::SeqCst);
		});

	selector.open();
	settle(&mut selector);
	selector.set_query_text("xyz");
	let outcome = selector.wait_for_response(WAIT);

	assert!(matches!(
		outcome,
		Some(ResponseOutcome::Failed(ref failure)) if failure.query == "xyz"
	));
	assert!(selector.candidates().is_empty());
	assert!(!selector.is_loading());
	assert_eq!(failures.load(Ordering::SeqCst), 1);
	assert!(selector.last_failure().is_some());

	// The user can keep typing after a failure.
	selector.set_query_text("");
	settle(&mut selector);
	assert_eq!(selector.candidates().len(), 1);
	assert!(selector.last_failure().is_none());
}

#[test]
fn close_while_searching_keeps_the_list_empty() {
	let provider = Arc::new(
		ScriptedProvider::default().respond("foo", Ok(vec![Candidate::new("5", "Foo")])),
	);
	let started = provider.notify_starts();
	let release = provider.gate("foo");
	let failures = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&failures);
	let mut selector = RemoteSelector::new(provider, immediate(1)).with_failure_log(
		move |_: &SearchFailure| {
			counter.fetch_add(1, Ordering::SeqCst);
		},
	);

	selector.open();
	started.recv_timeout(WAIT).expect("open search");
	settle(&mut selector);
	selector.set_query_text("foo");
	assert_eq!(started.recv_timeout(WAIT).expect("foo in flight"), "foo");

	selector.close();
	release.send(()).expect("release foo");
	let outcome = selector.wait_for_response(WAIT);

	assert_eq!(outcome, Some(ResponseOutcome::Stale));
	assert!(!selector.is_open());
	assert!(selector.candidates().is_empty());
	assert!(!selector.is_loading());
	assert_eq!(failures.load(Ordering::SeqCst), 0);
}

#[test]
fn reopening_fetches_again() {
	let provider = Arc::new(
		ScriptedProvider::default().respond("", Ok(vec![Candidate::new("1", "Alice")])),
	);
	let mut selector = RemoteSelector::new(provider.clone(), immediate(1));

	selector.open();
	settle(&mut selector);
	selector.close();
	assert!(selector.candidates().is_empty());

	selector.open();
	settle(&mut selector);
	assert_eq!(selector.candidates().len(), 1);
	assert_eq!(provider.calls().len(), 2);
}

#[test]
fn debounce_coalesces_keystrokes() {
	let provider = Arc::new(
		ScriptedProvider::default().respond("ali", Ok(vec![Candidate::new("1", "Alice")])),
	);
	let options = SelectorOptions::default()
		.with_debounce(Duration::from_millis(50))
		.with_workers(1);
	let mut selector = RemoteSelector::new(provider.clone(), options);

	selector.open();
	settle(&mut selector);

	let start = Instant::now();
	selector.set_query_text_at("a", start);
	selector.set_query_text_at("al", start + Duration::from_millis(10));
	selector.set_query_text_at("ali", start + Duration::from_millis(20));
	assert!(selector.is_loading());

	selector.poll(start + Duration::from_millis(40));
	assert_eq!(
		selector.next_deadline(start + Duration::from_millis(40)),
		Some(Duration::from_millis(30))
	);

	selector.poll(start + Duration::from_millis(70));
	settle(&mut selector);

	assert_eq!(selector.candidates(), &[Candidate::new("1", "Alice")]);
	assert_eq!(provider.calls(), vec![String::new(), "ali".to_string()]);
}

#[test]
fn zero_debounce_dispatches_every_keystroke() {
	let provider = Arc::new(
		ScriptedProvider::default().respond("abc", Ok(vec![Candidate::new("9", "Abcott")])),
	);
	let started = provider.notify_starts();
	let mut selector = RemoteSelector::new(provider.clone(), immediate(1));

	selector.open();
	assert_eq!(started.recv_timeout(WAIT).expect("open search"), "");
	settle(&mut selector);

	let release_a = provider.gate("a");
	selector.set_query_text("a");
	assert_eq!(started.recv_timeout(WAIT).expect("a in flight"), "a");
	selector.set_query_text("ab");
	selector.set_query_text("abc");
	assert_eq!(selector.next_deadline(Instant::now()), None);

	// No poll has run: "abc" reaches the worker because typing queued it.
	release_a.send(()).expect("release a");
	assert_eq!(started.recv_timeout(WAIT).expect("abc in flight"), "abc");

	settle(&mut selector);
	assert_eq!(selector.candidates(), &[Candidate::new("9", "Abcott")]);
	// "ab" was superseded while queued behind "a", so the worker skipped it.
	assert_eq!(
		provider.calls(),
		vec![String::new(), "a".to_string(), "abc".to_string()]
	);
}

#[test]
fn close_drops_a_debounced_search() {
	let provider = Arc::new(ScriptedProvider::default());
	let options = SelectorOptions::default()
		.with_debounce(Duration::from_millis(50))
		.with_workers(1);
	let mut selector = RemoteSelector::new(provider.clone(), options);

	selector.open();
	settle(&mut selector);
	let start = Instant::now();
	selector.set_query_text_at("pending", start);
	selector.close();
	selector.poll(start + Duration::from_secs(1));

	assert_eq!(provider.calls(), vec![String::new()]);
	assert!(!selector.is_loading());
}

#[test]
fn picks_are_reported_without_touching_state() {
	let provider = Arc::new(
		ScriptedProvider::default().respond("", Ok(vec![Candidate::new("1", "Alice")])),
	);
	let picks = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&picks);
	let mut selector = RemoteSelector::new(provider, immediate(1)).with_selection_sink(
		move |candidate: Option<&Candidate>| sink.borrow_mut().push(candidate.cloned()),
	);

	selector.open();
	settle(&mut selector);
	let before = selector.state().clone();

	let alice = selector.candidates().first().cloned();
	selector.select_candidate(alice);
	selector.select_candidate(None);

	assert_eq!(
		*picks.borrow(),
		vec![Some(Candidate::new("1", "Alice")), None]
	);
	assert_eq!(selector.state(), &before);
	assert_eq!(
		resolve_display_value(Some("1"), selector.candidates()).map(|c| c.label.as_str()),
		Some("Alice")
	);
}
