/// General file tally — counts every file by extension and by top-level
/// directory, and counts directories separately.
use super::report_skipped;
use crate::error::ScanError;
use crate::model::{Counter, EntryKind, FileEntry};
use crate::scanner::{ProgressSink, ScanProgress, PROGRESS_INTERVAL};
use std::time::Instant;
use tracing::debug;

/// Aggregate produced by [`tally_files`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileTally {
    pub total_files: u64,
    pub total_dirs: u64,
    /// Sum of all counted file sizes.
    pub total_bytes: u64,
    /// Entries that could not be read and were left out.
    pub skipped: u64,
    /// Extension (or `"(no extension)"`) → file count.
    pub by_extension: Counter,
    /// Top-level directory (or `"(root)"`) → file count.
    pub by_directory: Counter,
}

impl FileTally {
    /// Fold one entry into the tally.
    ///
    /// Files increment exactly one bucket in each mapping; directories only
    /// increment `total_dirs`.
    pub fn record(&mut self, entry: &FileEntry) {
        match entry.kind {
            EntryKind::Directory => self.total_dirs += 1,
            EntryKind::File => {
                self.total_files += 1;
                self.total_bytes += entry.size;
                self.by_extension.increment(entry.extension_key());
                self.by_directory.increment(entry.top_level_key());
            }
        }
    }
}

/// Consume `entries` and count every file and directory.
///
/// Per-entry errors are logged, reported to `progress`, and counted in
/// [`FileTally::skipped`]; they never abort the tally.
pub fn tally_files<I, P>(entries: I, progress: &mut P) -> FileTally
where
    I: IntoIterator<Item = Result<FileEntry, ScanError>>,
    P: ProgressSink + ?Sized,
{
    let start = Instant::now();
    let mut tally = FileTally::default();

    for item in entries {
        let entry = match item {
            Ok(entry) => entry,
            Err(err) => {
                tally.skipped += 1;
                report_skipped(&err, progress);
                continue;
            }
        };

        tally.record(&entry);

        if entry.is_file() && tally.total_files.is_multiple_of(PROGRESS_INTERVAL) {
            progress.report(ScanProgress::Update {
                files_found: tally.total_files,
                dirs_found: tally.total_dirs,
                current_name: entry.name(),
            });
        }
    }

    let duration = start.elapsed();
    debug!(
        "File tally complete: {} files, {} dirs, {} skipped in {:?}",
        tally.total_files, tally.total_dirs, tally.skipped, duration
    );
    progress.report(ScanProgress::Complete {
        duration,
        skipped: tally.skipped,
    });

    tally
}
