/// End-to-end tests for the report layer.
///
/// A real walk over a temp tree is tallied and rendered, so the tests cover
/// the full Walker → Aggregator → Reporter path without spawning a process.
use dirtally_cli::report::{render_files, render_media, write_media_json};
use dirtally_core::analysis::{tally_files, tally_media};
use dirtally_core::scanner::{walk, NoProgress, ScanConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn write_bytes(path: &Path, n: usize) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, vec![0u8; n]).unwrap();
}

fn make_temp_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("logo.svg"), 300);
    write_bytes(&tmp.path().join("assets/hero.webp"), 4_096);
    write_bytes(&tmp.path().join("assets/intro.webm"), 2_097_152);
    write_bytes(&tmp.path().join("assets/node_modules/x.png"), 1);
    write_bytes(&tmp.path().join("docs/guide.md"), 50);
    tmp
}

// ── Reports ───────────────────────────────────────────────────────────────────

#[test]
fn files_report_from_real_walk() {
    let tmp = make_temp_tree();
    let tally = tally_files(walk(&ScanConfig::new(tmp.path())).unwrap(), &mut NoProgress);

    let mut out = Vec::new();
    render_files(&mut out, &tally).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Total files: 4"));
    assert!(text.contains("Total directories: 2"));
    assert!(!text.contains("node_modules"));
    for ext in [".svg", ".webp", ".webm", ".md"] {
        assert!(text.contains(ext), "missing row for {ext}");
    }
}

#[test]
fn media_report_from_real_walk() {
    let tmp = make_temp_tree();
    let tally = tally_media(walk(&ScanConfig::new(tmp.path())).unwrap(), &mut NoProgress);

    let mut out = Vec::new();
    render_media(&mut out, &tally).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Total images: 2"));
    assert!(text.contains("Total videos: 1"));
    assert!(text.contains("(2.0 MB)"));
    assert!(text.contains("(4.0 KB)"));
    assert!(!text.contains("x.png"));
}

/// Rendering is a pure function of the tally: two renders are identical.
#[test]
fn rendering_twice_is_identical() {
    let tmp = make_temp_tree();
    let tally = tally_media(walk(&ScanConfig::new(tmp.path())).unwrap(), &mut NoProgress);

    let render = || {
        let mut out = Vec::new();
        write_media_json(&mut out, tmp.path(), &tally).unwrap();
        out
    };
    assert_eq!(render(), render());
}
