/// dirtally Core — traversal, classification, and aggregation.
///
/// This crate contains all business logic with zero terminal I/O.
/// Frontends (the `count-files` / `count-media` binaries) drive it and
/// render the resulting tallies.
///
/// # Modules
///
/// - [`model`] — Visited entries, counters, and size formatting.
/// - [`scanner`] — Single-threaded directory walker with exclusion filtering.
/// - [`analysis`] — Aggregators that fold a walk into file and media tallies.
/// - [`error`] — Error type shared by the scanner and its callers.
pub mod analysis;
pub mod error;
pub mod model;
pub mod scanner;

pub use error::ScanError;
