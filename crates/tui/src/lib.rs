//! Interactive terminal picker built on the carepick selector.
//!
//! [`PickerApp`] renders the selector with `ratatui`: a prompt with the query
//! input and a loading spinner, the candidate table and a status line with the
//! host's current selection. [`run`] owns the terminal and returns a
//! [`PickOutcome`] once the user accepts or cancels.

mod actions;
mod app;
pub mod components;
mod config;
mod host;
pub mod input;
mod outcome;
mod render;
mod runtime;
pub mod style;


pub use app::PickerApp;
pub use config::{PickerConfig, PickerLabels};
pub use host::HostSelection;
pub use input::QueryInput;
pub use outcome::PickOutcome;
pub use runtime::run;
pub use style::{StyleConfig, Theme, ThemeError};
