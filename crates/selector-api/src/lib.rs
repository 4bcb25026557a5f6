//! Shared types and collaborator interfaces for carepick selectors.
//!
//! Hosts depend on this crate to supply a [`SearchProvider`] (the remote
//! lookup), a [`SelectionSink`] (the owning form) and optionally a
//! [`FailureLog`]. The selector itself lives in `carepick-selector`.

pub mod error;
pub mod failure;
pub mod memory;
pub mod provider;
pub mod selection;
pub mod types;

pub use error::SearchError;
pub use failure::{FailureLog, SearchFailure, TracingFailureLog};
pub use memory::{DEFAULT_MEMORY_LIMIT, MemoryProvider};
pub use provider::SearchProvider;
pub use selection::{DiscardSelection, SelectionSink};
pub use types::{Candidate, RecordKind};
