//! Widgets composed by the picker's renderer.

/// Query prompt with title and loading indicator.
pub mod prompt;
/// Candidate rows and label truncation.
pub mod rows;
pub mod scrollbar;
/// Selection status line.
pub mod status;
/// Bordered candidate table.
pub mod tables;

pub use prompt::{PromptContext, ProgressState, render_prompt};
pub use rows::build_candidate_rows;
pub use scrollbar::{ScrollMetrics, point_in_rect, render_scrollbar};
pub use status::{StatusContext, render_status};
pub use tables::{TableSpec, render_message, render_table};
