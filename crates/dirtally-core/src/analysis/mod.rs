/// Analysis modules — aggregators that fold a walk into tallies.
///
/// Both aggregators consume their input exactly once and own the tally they
/// return; nothing is shared between invocations.
pub mod media;
pub mod tally;

pub use media::{classify_extension, tally_media, MediaCounts, MediaFile, MediaKind, MediaTally};
pub use tally::{tally_files, FileTally};

use crate::error::ScanError;
use crate::scanner::{ProgressSink, ScanProgress};
use tracing::{error, warn};

/// Log and report an entry the walker could not read.
fn report_skipped<P: ProgressSink + ?Sized>(err: &ScanError, progress: &mut P) {
    if err.is_recoverable() {
        warn!("Skipping entry: {err}");
    } else {
        error!("Skipping entry after unexpected error: {err}");
    }
    progress.report(ScanProgress::Error {
        path: err.path().to_string_lossy().into_owned(),
        message: err.to_string(),
    });
}
