/// Structured logging setup.
///
/// Logs go to stderr so they never interleave with the report on stdout.
use tracing::Level;

/// Initialise the global `tracing` subscriber. Call once from `main`.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
