/// Media classification based on file extensions.
///
/// Files are either images, videos, or unclassified. Only classified files
/// enter the [`MediaTally`]; everything else is ignored by this aggregator.
use super::report_skipped;
use crate::error::ScanError;
use crate::model::{Counter, FileEntry};
use crate::scanner::{ProgressSink, ScanProgress};
use compact_str::CompactString;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

/// Image extensions, lower-case with leading dot.
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".bmp", ".svg", ".ico", ".webp"];

/// Video extensions, lower-case with leading dot.
pub const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".avi", ".mov", ".wmv", ".flv", ".webm", ".mkv"];

/// Media category of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
}

/// Classify an extension as image or video.
///
/// Accepts the extension with or without its leading dot, in any case.
/// Extensions are lowercased into a stack buffer; anything longer than
/// 16 bytes cannot be media and returns `None`.
pub fn classify_extension(ext: &str) -> Option<MediaKind> {
    let bytes = ext.strip_prefix('.').unwrap_or(ext).as_bytes();
    if bytes.is_empty() || bytes.len() > 16 {
        return None;
    }

    let mut lower = [0u8; 16];
    for (dest, &src) in lower.iter_mut().zip(bytes.iter()) {
        *dest = src.to_ascii_lowercase();
    }
    let lower_str = std::str::from_utf8(&lower[..bytes.len()]).ok()?;

    match lower_str {
        "png" | "jpg" | "jpeg" | "gif" | "bmp" | "svg" | "ico" | "webp" => Some(MediaKind::Image),
        "mp4" | "avi" | "mov" | "wmv" | "flv" | "webm" | "mkv" => Some(MediaKind::Video),
        _ => None,
    }
}

/// A matched media file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    /// Path relative to the scan root.
    pub path: PathBuf,
    pub size: u64,
    /// Lower-cased extension with leading dot.
    pub extension: CompactString,
}

/// Image and video counts for one top-level directory.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MediaCounts {
    pub images: u64,
    pub videos: u64,
}

impl MediaCounts {
    pub fn total(self) -> u64 {
        self.images + self.videos
    }
}

/// Aggregate produced by [`tally_media`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MediaTally {
    /// Image files in walk order.
    pub images: Vec<MediaFile>,
    /// Video files in walk order.
    pub videos: Vec<MediaFile>,
    pub images_by_type: Counter,
    pub videos_by_type: Counter,
    /// Top-level directory (or `"(root)"`) → image/video counts.
    pub by_directory: HashMap<CompactString, MediaCounts>,
    /// Entries that could not be read and were left out.
    pub skipped: u64,
}

impl MediaTally {
    pub fn image_count(&self) -> u64 {
        self.images.len() as u64
    }

    pub fn video_count(&self) -> u64 {
        self.videos.len() as u64
    }

    /// Images plus videos.
    pub fn total_media(&self) -> u64 {
        self.image_count() + self.video_count()
    }

    /// Fold one entry into the tally. Returns the kind if it was counted.
    pub fn record(&mut self, entry: &FileEntry) -> Option<MediaKind> {
        if !entry.is_file() {
            return None;
        }
        let extension = entry.extension.as_ref()?;
        let kind = classify_extension(extension)?;

        let file = MediaFile {
            path: entry.relative.clone(),
            size: entry.size,
            extension: extension.clone(),
        };
        let counts = self.by_directory.entry(entry.top_level_key()).or_default();
        match kind {
            MediaKind::Image => {
                self.images_by_type.increment(extension.clone());
                counts.images += 1;
                self.images.push(file);
            }
            MediaKind::Video => {
                self.videos_by_type.increment(extension.clone());
                counts.videos += 1;
                self.videos.push(file);
            }
        }
        Some(kind)
    }

    /// Directory rows sorted by total media descending, then by key.
    pub fn directories_ranked(&self) -> Vec<(CompactString, MediaCounts)> {
        let mut rows: Vec<(CompactString, MediaCounts)> = self
            .by_directory
            .iter()
            .map(|(key, &counts)| (key.clone(), counts))
            .collect();
        rows.sort_unstable_by(|a, b| b.1.total().cmp(&a.1.total()).then_with(|| a.0.cmp(&b.0)));
        rows
    }

    /// Files of `kind` ordered by extension, then by path.
    pub fn files_sorted(&self, kind: MediaKind) -> Vec<&MediaFile> {
        let files = match kind {
            MediaKind::Image => &self.images,
            MediaKind::Video => &self.videos,
        };
        let mut sorted: Vec<&MediaFile> = files.iter().collect();
        sorted.sort_by(|a, b| a.extension.cmp(&b.extension).then_with(|| a.path.cmp(&b.path)));
        sorted
    }
}

/// Consume `entries` and collect every image and video file.
///
/// Unclassified files and directories contribute nothing. Per-entry errors
/// are logged, reported, and counted in [`MediaTally::skipped`].
pub fn tally_media<I, P>(entries: I, progress: &mut P) -> MediaTally
where
    I: IntoIterator<Item = Result<FileEntry, ScanError>>,
    P: ProgressSink + ?Sized,
{
    let start = Instant::now();
    let mut tally = MediaTally::default();

    for item in entries {
        let entry = match item {
            Ok(entry) => entry,
            Err(err) => {
                tally.skipped += 1;
                report_skipped(&err, progress);
                continue;
            }
        };

        if let Some(kind) = tally.record(&entry) {
            progress.report(ScanProgress::MediaFound {
                kind,
                name: entry.name(),
            });
        }
    }

    let duration = start.elapsed();
    debug!(
        "Media tally complete: {} images, {} videos, {} skipped in {:?}",
        tally.image_count(),
        tally.video_count(),
        tally.skipped,
        duration
    );
    progress.report(ScanProgress::Complete {
        duration,
        skipped: tally.skipped,
    });

    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ROOT_KEY;
    use crate::scanner::NoProgress;

    fn file(rel: &str, size: u64) -> Result<FileEntry, ScanError> {
        Ok(FileEntry::new_file(PathBuf::from("/r").join(rel), rel.into(), size))
    }

    // ── classify_extension ───────────────────────────────────────────────

    #[test]
    fn classify_known_image_extensions() {
        for ext in IMAGE_EXTENSIONS {
            assert_eq!(classify_extension(ext), Some(MediaKind::Image), "expected Image for {ext}");
        }
    }

    #[test]
    fn classify_known_video_extensions() {
        for ext in VIDEO_EXTENSIONS {
            assert_eq!(classify_extension(ext), Some(MediaKind::Video), "expected Video for {ext}");
        }
    }

    /// Extension matching must be case-insensitive so ".PNG" == ".png".
    #[test]
    fn classify_case_insensitive() {
        assert_eq!(classify_extension(".PNG"), Some(MediaKind::Image));
        assert_eq!(classify_extension("Mp4"), Some(MediaKind::Video));
    }

    #[test]
    fn classify_unknown_returns_none() {
        assert_eq!(classify_extension(".txt"), None);
        assert_eq!(classify_extension(".tiff"), None);
        assert_eq!(classify_extension(""), None);
        assert_eq!(classify_extension("."), None);
        assert_eq!(classify_extension(".averyveryverylongextension"), None);
    }

    // ── tally_media ──────────────────────────────────────────────────────

    #[test]
    fn tally_splits_images_and_videos() {
        let entries = vec![
            file("a.PNG", 2048),
            file("sub/b.jpg", 1024),
            file("sub/c.mp4", 1_048_576),
            file("sub/notes.txt", 10),
        ];
        let tally = tally_media(entries, &mut NoProgress);

        assert_eq!(tally.image_count(), 2);
        assert_eq!(tally.video_count(), 1);
        assert_eq!(tally.total_media(), 3);
        assert_eq!(tally.images_by_type.get(".png"), 1);
        assert_eq!(tally.images_by_type.get(".jpg"), 1);
        assert_eq!(tally.videos_by_type.get(".mp4"), 1);
        assert_eq!(tally.by_directory["sub"], MediaCounts { images: 1, videos: 1 });
        assert_eq!(tally.by_directory[ROOT_KEY], MediaCounts { images: 1, videos: 0 });
    }

    /// Directories and unclassified files must not create directory rows.
    #[test]
    fn unclassified_entries_are_ignored() {
        let entries = vec![
            Ok(FileEntry::new_dir("/r/pics.png".into(), "pics.png".into())),
            file("docs/readme", 1),
            file("docs/a.pdf", 1),
        ];
        let tally = tally_media(entries, &mut NoProgress);
        assert_eq!(tally, MediaTally::default());
    }

    #[test]
    fn media_found_events_carry_kind_and_name() {
        let mut found = Vec::new();
        tally_media(vec![file("x/clip.MOV", 1), file("x/pic.gif", 1)], &mut |p: ScanProgress| {
            if let ScanProgress::MediaFound { kind, name } = p {
                found.push((kind, name.to_string()));
            }
        });
        assert_eq!(
            found,
            [
                (MediaKind::Video, "clip.MOV".to_string()),
                (MediaKind::Image, "pic.gif".to_string())
            ]
        );
    }

    #[test]
    fn directories_ranked_by_total_then_key() {
        let entries = vec![
            file("b/1.png", 1),
            file("a/1.png", 1),
            file("c/1.png", 1),
            file("c/2.mkv", 1),
        ];
        let tally = tally_media(entries, &mut NoProgress);
        let keys: Vec<_> = tally.directories_ranked().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["c", "a", "b"]);
    }

    #[test]
    fn files_sorted_by_extension_then_path() {
        let entries = vec![file("z.png", 1), file("b.gif", 1), file("a.png", 1)];
        let tally = tally_media(entries, &mut NoProgress);
        let paths: Vec<_> = tally
            .files_sorted(MediaKind::Image)
            .into_iter()
            .map(|f| f.path.to_string_lossy().into_owned())
            .collect();
        assert_eq!(paths, ["b.gif", "a.png", "z.png"]);
    }
}
