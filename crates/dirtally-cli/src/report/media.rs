/// Text report for `count-media`.
use super::bar::{icon_bar, scaled_bar, ICON_BAR_CAP, SCALED_BAR_WIDTH};
use super::write_banner;
use dirtally_core::analysis::{MediaKind, MediaTally};
use dirtally_core::model::size::{format_count, format_kb, format_mb, percent};
use dirtally_core::model::Counter;
use std::io::{self, Write};

const IMAGE_ICON: &str = "🖼️ ";
const VIDEO_ICON: &str = "🎥";

/// Render totals, per-type distributions, the per-directory breakdown, and
/// the full file listings.
pub fn render_media<W: Write + ?Sized>(out: &mut W, tally: &MediaTally) -> io::Result<()> {
    write_banner(out, "📊 Media analysis results")?;
    writeln!(out)?;
    writeln!(out, "🖼️  Total images: {}", format_count(tally.image_count()))?;
    writeln!(out, "🎥 Total videos: {}", format_count(tally.video_count()))?;
    writeln!(out, "📁 Total media files: {}", format_count(tally.total_media()))?;
    if tally.skipped > 0 {
        writeln!(out, "⚠️  Skipped (unreadable): {}", format_count(tally.skipped))?;
    }

    write_type_table(out, "🖼️  Image types", &tally.images_by_type)?;
    write_type_table(out, "🎥 Video types", &tally.videos_by_type)?;
    write_directory_table(out, tally)?;
    write_file_list(out, tally, MediaKind::Image)?;
    write_file_list(out, tally, MediaKind::Video)?;

    writeln!(out)?;
    write_banner(out, "✅ Media analysis complete!")
}

fn write_type_table<W: Write + ?Sized>(out: &mut W, title: &str, counter: &Counter) -> io::Result<()> {
    if counter.is_empty() {
        return Ok(());
    }
    let total = counter.total();
    let max = counter.max();

    writeln!(out)?;
    write_banner(out, title)?;
    for row in counter.ranked() {
        let bar = scaled_bar(row.count, max, SCALED_BAR_WIDTH);
        let pct = percent(row.count, total);
        writeln!(
            out,
            "{:<10} │ {bar:<width$} │ {:>3} ({pct:>5.1}%)",
            row.key.as_str(),
            row.count,
            width = SCALED_BAR_WIDTH
        )?;
    }
    Ok(())
}

fn write_directory_table<W: Write + ?Sized>(out: &mut W, tally: &MediaTally) -> io::Result<()> {
    if tally.by_directory.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    write_banner(out, "📁 Media by directory")?;
    for (directory, counts) in tally.directories_ranked() {
        let icons = format!(
            "{}{}",
            icon_bar(IMAGE_ICON, counts.images, ICON_BAR_CAP),
            icon_bar(VIDEO_ICON, counts.videos, ICON_BAR_CAP)
        );
        writeln!(out, "{:<20} │ {icons}", directory.as_str())?;
        writeln!(
            out,
            "{:<20} │ images: {:>3}, videos: {:>3}, total: {:>3}",
            "",
            counts.images,
            counts.videos,
            counts.total()
        )?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_file_list<W: Write + ?Sized>(out: &mut W, tally: &MediaTally, kind: MediaKind) -> io::Result<()> {
    let files = tally.files_sorted(kind);
    if files.is_empty() {
        return Ok(());
    }
    let title = match kind {
        MediaKind::Image => "🖼️  Image files",
        MediaKind::Video => "🎥 Video files",
    };
    writeln!(out)?;
    write_banner(out, title)?;
    for file in files {
        let size = match kind {
            MediaKind::Image => format_kb(file.size),
            MediaKind::Video => format_mb(file.size),
        };
        writeln!(out, "  • {} ({size})", file.path.display())?;
    }
    Ok(())
}
