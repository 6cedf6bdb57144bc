/// Entry points for the two tools: walk, tally, report.
use crate::args::CommonArgs;
use crate::{progress, report};
use anyhow::Context;
use dirtally_core::analysis::{tally_files, tally_media};
use dirtally_core::scanner::{self, ScanConfig, Walk};
use std::io::{self, BufWriter, Write};
use tracing::info;

fn start_walk(args: &CommonArgs) -> anyhow::Result<Walk> {
    let root = args.resolve_root()?;
    scanner::walk(&ScanConfig::new(&root)).with_context(|| format!("cannot scan {}", root.display()))
}

/// Run `count-files`: tally every file and print the report to stdout.
pub fn run_count_files(args: &CommonArgs) -> anyhow::Result<()> {
    let walk = start_walk(args)?;
    let root = walk.root().to_path_buf();
    let mut out = BufWriter::new(io::stdout().lock());

    if !args.json {
        report::write_intro(&mut out, "📊 Counting project files...")?;
        out.flush()?;
    }

    let mut sink = progress::sink_for(args.quiet);
    let tally = tally_files(walk, sink.as_mut());
    info!(
        "Counted {} files and {} directories under {}",
        tally.total_files,
        tally.total_dirs,
        root.display()
    );

    if args.json {
        report::write_files_json(&mut out, &root, &tally)?;
    } else {
        report::render_files(&mut out, &tally)?;
    }
    out.flush()?;
    Ok(())
}

/// Run `count-media`: tally image and video files and print the report to stdout.
pub fn run_count_media(args: &CommonArgs) -> anyhow::Result<()> {
    let walk = start_walk(args)?;
    let root = walk.root().to_path_buf();
    let mut out = BufWriter::new(io::stdout().lock());

    if !args.json {
        report::write_intro(&mut out, "🎬 Analysing project media files...")?;
        out.flush()?;
    }

    let mut sink = progress::sink_for(args.quiet);
    let tally = tally_media(walk, sink.as_mut());
    info!(
        "Found {} images and {} videos under {}",
        tally.image_count(),
        tally.video_count(),
        root.display()
    );

    if args.json {
        report::write_media_json(&mut out, &root, &tally)?;
    } else {
        writeln!(out)?;
        report::render_media(&mut out, &tally)?;
    }
    out.flush()?;
    Ok(())
}
