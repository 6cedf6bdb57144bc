/// Report rendering — turns finished tallies into console text or JSON.
///
/// Every renderer is a pure function of a tally and writes to any
/// `io::Write`. Sections with no rows are omitted.
pub mod bar;
pub mod files;
pub mod json;
pub mod media;

pub use files::render_files;
pub use json::{write_files_json, write_media_json};
pub use media::render_media;

use std::io::{self, Write};

/// Width of the `=` rules framing each section.
pub const RULE_WIDTH: usize = 80;

/// Write a section title between two rules.
pub fn write_banner<W: Write + ?Sized>(out: &mut W, title: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{rule}")
}

/// Banner printed before a scan starts, followed by a blank line.
pub fn write_intro<W: Write + ?Sized>(out: &mut W, title: &str) -> io::Result<()> {
    write_banner(out, title)?;
    writeln!(out)
}
