/// dirtally CLI — console frontend for the `count-files` and `count-media` tools.
///
/// This crate contains argument parsing, logging setup, the progress spinner,
/// and report rendering. Traversal and aggregation live in `dirtally-core`.
pub mod args;
pub mod logging;
pub mod progress;
pub mod report;
pub mod run;

pub use run::{run_count_files, run_count_media};
