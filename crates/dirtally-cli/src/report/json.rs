/// JSON reports for scripting (`--json`).
///
/// Rows are emitted in the same ranked order as the text report.
use dirtally_core::analysis::{FileTally, MediaFile, MediaKind, MediaTally};
use dirtally_core::model::size::percent;
use dirtally_core::model::CountRow;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct FilesReport {
    pub root: String,
    pub total_files: u64,
    pub total_dirs: u64,
    pub total_bytes: u64,
    pub skipped: u64,
    pub by_directory: Vec<CountRow>,
    pub by_extension: Vec<CountRow>,
}

impl FilesReport {
    pub fn new(root: &Path, tally: &FileTally) -> Self {
        Self {
            root: root.display().to_string(),
            total_files: tally.total_files,
            total_dirs: tally.total_dirs,
            total_bytes: tally.total_bytes,
            skipped: tally.skipped,
            by_directory: tally.by_directory.ranked(),
            by_extension: tally.by_extension.ranked(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TypeRow {
    pub extension: String,
    pub count: u64,
    pub percent: f64,
}

#[derive(Debug, Serialize)]
pub struct DirectoryRow {
    pub directory: String,
    pub images: u64,
    pub videos: u64,
    pub total: u64,
}

#[derive(Debug, Serialize)]
pub struct FileRow {
    pub path: String,
    pub size: u64,
    pub extension: String,
}

#[derive(Debug, Serialize)]
pub struct MediaReport {
    pub root: String,
    pub images: u64,
    pub videos: u64,
    pub total_media: u64,
    pub skipped: u64,
    pub image_types: Vec<TypeRow>,
    pub video_types: Vec<TypeRow>,
    pub by_directory: Vec<DirectoryRow>,
    pub image_files: Vec<FileRow>,
    pub video_files: Vec<FileRow>,
}

impl MediaReport {
    pub fn new(root: &Path, tally: &MediaTally) -> Self {
        let type_rows = |rows: Vec<CountRow>, total: u64| -> Vec<TypeRow> {
            rows.into_iter()
                .map(|row| TypeRow {
                    extension: row.key.to_string(),
                    count: row.count,
                    percent: percent(row.count, total),
                })
                .collect()
        };
        let file_rows = |files: Vec<&MediaFile>| -> Vec<FileRow> {
            files
                .into_iter()
                .map(|f| FileRow {
                    path: f.path.display().to_string(),
                    size: f.size,
                    extension: f.extension.to_string(),
                })
                .collect()
        };

        Self {
            root: root.display().to_string(),
            images: tally.image_count(),
            videos: tally.video_count(),
            total_media: tally.total_media(),
            skipped: tally.skipped,
            image_types: type_rows(tally.images_by_type.ranked(), tally.image_count()),
            video_types: type_rows(tally.videos_by_type.ranked(), tally.video_count()),
            by_directory: tally
                .directories_ranked()
                .into_iter()
                .map(|(directory, counts)| DirectoryRow {
                    directory: directory.to_string(),
                    images: counts.images,
                    videos: counts.videos,
                    total: counts.total(),
                })
                .collect(),
            image_files: file_rows(tally.files_sorted(MediaKind::Image)),
            video_files: file_rows(tally.files_sorted(MediaKind::Video)),
        }
    }
}

fn write_pretty<W: Write + ?Sized, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

pub fn write_files_json<W: Write + ?Sized>(out: &mut W, root: &Path, tally: &FileTally) -> io::Result<()> {
    write_pretty(out, &FilesReport::new(root, tally))
}

pub fn write_media_json<W: Write + ?Sized>(out: &mut W, root: &Path, tally: &MediaTally) -> io::Result<()> {
    write_pretty(out, &MediaReport::new(root, tally))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirtally_core::model::FileEntry;
    use std::path::PathBuf;

    #[test]
    fn files_json_has_ranked_rows() {
        let mut tally = FileTally::default();
        for rel in ["a.rs", "b.rs", "c.md"] {
            tally.record(&FileEntry::new_file(PathBuf::from(rel), PathBuf::from(rel), 4));
        }
        let mut out = Vec::new();
        write_files_json(&mut out, Path::new("root"), &tally).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["root"], "root");
        assert_eq!(value["total_files"], 3);
        assert_eq!(value["total_bytes"], 12);
        assert_eq!(value["by_extension"][0]["key"], ".rs");
        assert_eq!(value["by_extension"][0]["count"], 2);
        assert_eq!(value["by_directory"][0]["key"], "(root)");
    }

    #[test]
    fn media_json_has_percentages_and_files() {
        let mut tally = MediaTally::default();
        for (rel, size) in [("x/a.png", 10), ("x/b.gif", 20), ("c.mp4", 30)] {
            tally.record(&FileEntry::new_file(PathBuf::from(rel), PathBuf::from(rel), size));
        }
        let report = MediaReport::new(Path::new("."), &tally);

        assert_eq!(report.images, 2);
        assert_eq!(report.videos, 1);
        assert_eq!(report.total_media, 3);
        assert_eq!(report.image_types.len(), 2);
        assert!(report.image_types.iter().all(|r| (r.percent - 50.0).abs() < f64::EPSILON));
        assert_eq!(report.video_types[0].percent, 100.0);
        assert_eq!(report.by_directory[0].directory, "x");
        assert_eq!(report.by_directory[0].total, 2);
        assert_eq!(report.image_files[0].extension, ".gif");
        assert_eq!(report.video_files[0].size, 30);
    }

    #[test]
    fn empty_media_json_is_valid() {
        let mut out = Vec::new();
        write_media_json(&mut out, Path::new("."), &MediaTally::default()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["total_media"], 0);
        assert!(value["image_files"].as_array().unwrap().is_empty());
    }
}
