//! Configuration loading and resolution.
//!
//! Values are layered from built-in defaults, configuration files, `CAREPICK__*`
//! environment variables and finally CLI flags. [`load`] validates the result
//! and returns a [`ResolvedConfig`] the workflow can run with.

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::{ResolvedConfig, RestSettings, SearchSource, UiSettings};
