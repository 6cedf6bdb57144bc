/// Text report for `count-files`.
use super::bar::{linear_bar, LINEAR_BAR_CAP};
use super::write_banner;
use dirtally_core::analysis::FileTally;
use dirtally_core::model::size::{format_count, format_size};
use dirtally_core::model::Counter;
use std::io::{self, Write};

/// Render totals, the by-directory table, and the by-extension table.
pub fn render_files<W: Write + ?Sized>(out: &mut W, tally: &FileTally) -> io::Result<()> {
    writeln!(out)?;
    write_banner(out, "📈 Summary")?;
    writeln!(out)?;
    writeln!(out, "Total files: {}", format_count(tally.total_files))?;
    writeln!(out, "Total directories: {}", format_count(tally.total_dirs))?;
    writeln!(out, "Total size: {}", format_size(tally.total_bytes))?;
    if tally.skipped > 0 {
        writeln!(out, "Skipped (unreadable): {}", format_count(tally.skipped))?;
    }

    write_count_table(out, "📁 Files by directory", &tally.by_directory)?;
    write_count_table(out, "📄 Files by extension", &tally.by_extension)?;

    writeln!(out)?;
    write_banner(out, "✅ Analysis complete!")
}

fn write_count_table<W: Write + ?Sized>(out: &mut W, title: &str, counter: &Counter) -> io::Result<()> {
    if counter.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    write_banner(out, title)?;
    for row in counter.ranked() {
        let bar = linear_bar(row.count, LINEAR_BAR_CAP);
        writeln!(out, "{:<20} │ {bar} {:>3} files", row.key.as_str(), row.count)?;
    }
    Ok(())
}
