//! Support code shared by the `carepick` binary: directory discovery and log
//! setup. The picker itself lives in the `carepick-*` workspace crates.

pub mod app_dirs;
pub mod logging;
