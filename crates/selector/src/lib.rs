//! Remote-backed, single-value selector.
//!
//! [`RemoteSelector`] lets a user pick one record out of a remote collection by
//! typing a partial query. Each keystroke while the list is open starts a new
//! [`Generation`]; provider answers for anything but the current generation
//! are dropped, so the list always reflects the most recently requested query
//! no matter in which order responses arrive.
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use carepick_api::{Candidate, MemoryProvider};
//! use carepick_selector::{RemoteSelector, SelectorOptions};
//!
//! let provider = MemoryProvider::new(vec![Candidate::new("1", "Alice")]);
//! let options = SelectorOptions::default().with_debounce(Duration::ZERO);
//! let mut selector = RemoteSelector::new(Arc::new(provider), options);
//!
//! selector.open();
//! selector.wait_for_response(Duration::from_secs(1));
//! assert_eq!(selector.candidates(), &[Candidate::new("1", "Alice")]);
//! ```

mod debounce;
mod generation;
mod options;
mod request;
mod resolve;
mod runtime;
mod selector;
mod state;

pub use debounce::{DEFAULT_DEBOUNCE, QueryDebouncer};
pub use generation::Generation;
pub use options::{DEFAULT_WORKERS, SelectorOptions};
pub use request::{ResponseOutcome, SearchRequest, SearchResponse};
pub use resolve::resolve_display_value;
pub use selector::RemoteSelector;
pub use state::SelectorState;
