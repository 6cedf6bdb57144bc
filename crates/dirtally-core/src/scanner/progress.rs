/// Scan progress reporting — lightweight events emitted by the aggregators
/// while they consume a walk.
///
/// Everything runs on one thread, so progress is delivered through a
/// callback rather than a channel. Frontends decide how (or whether) to
/// display it.
use crate::analysis::MediaKind;
use compact_str::CompactString;
use std::time::Duration;

/// Number of files between two [`ScanProgress::Update`] events.
pub const PROGRESS_INTERVAL: u64 = 10;

/// Progress events emitted during a tally.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanProgress {
    /// Periodic update with running totals.
    Update {
        files_found: u64,
        dirs_found: u64,
        current_name: CompactString,
    },
    /// A file was classified as image or video.
    MediaFound { kind: MediaKind, name: CompactString },
    /// A non-fatal error (e.g. permission denied on one entry). The entry was skipped.
    Error { path: String, message: String },
    /// The walk is exhausted.
    Complete { duration: Duration, skipped: u64 },
}

/// Receiver for [`ScanProgress`] events.
pub trait ProgressSink {
    fn report(&mut self, progress: ScanProgress);
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _progress: ScanProgress) {}
}

impl<F> ProgressSink for F
where
    F: FnMut(ScanProgress),
{
    fn report(&mut self, progress: ScanProgress) {
        self(progress)
    }
}
