/// Spinner drawn on stderr while a tally runs.
///
/// Events update the spinner's message and the spinner is cleared once the
/// tally reports completion. indicatif hides the spinner by itself when
/// stderr is not a terminal.
use dirtally_core::analysis::MediaKind;
use dirtally_core::scanner::{ProgressSink, ScanProgress};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "{spinner:.green} {wide_msg}";
const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub struct SpinnerProgress {
    bar: ProgressBar,
}

impl SpinnerProgress {
    /// Spinner drawing to stderr, or hidden when `quiet` is set.
    pub fn new(quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden())
        } else {
            let bar = ProgressBar::new_spinner();
            bar.enable_steady_tick(TICK_INTERVAL);
            bar
        };
        bar.set_style(
            ProgressStyle::with_template(SPINNER_TEMPLATE).unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        Self { bar }
    }
}

impl ProgressSink for SpinnerProgress {
    fn report(&mut self, progress: ScanProgress) {
        match progress {
            ScanProgress::Update {
                files_found,
                current_name,
                ..
            } => self
                .bar
                .set_message(format!("✓ Scanning {files_found} files... current: {current_name}")),
            ScanProgress::MediaFound { kind, name } => self.bar.set_message(match kind {
                MediaKind::Image => format!("🖼️  Found image: {name}"),
                MediaKind::Video => format!("🎥 Found video: {name}"),
            }),
            // Already logged through tracing.
            ScanProgress::Error { .. } => {}
            ScanProgress::Complete { .. } => self.bar.finish_and_clear(),
        }
    }
}

/// Sink for a tool run.
pub fn sink_for(quiet: bool) -> Box<dyn ProgressSink> {
    Box::new(SpinnerProgress::new(quiet))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hidden() -> SpinnerProgress {
        SpinnerProgress::new(true)
    }

    #[test]
    fn quiet_spinner_is_hidden() {
        assert!(hidden().bar.is_hidden());
    }

    #[test]
    fn update_sets_running_count() {
        let mut spinner = hidden();
        spinner.report(ScanProgress::Update {
            files_found: 10,
            dirs_found: 2,
            current_name: "main.rs".into(),
        });
        let message = spinner.bar.message();
        assert!(message.contains("10 files"));
        assert!(message.contains("main.rs"));
    }

    #[test]
    fn media_found_names_the_kind() {
        let mut spinner = hidden();
        spinner.report(ScanProgress::MediaFound {
            kind: MediaKind::Video,
            name: "clip.mp4".into(),
        });
        assert!(spinner.bar.message().contains("Found video: clip.mp4"));
    }

    #[test]
    fn complete_finishes_the_spinner() {
        let mut spinner = hidden();
        assert!(!spinner.bar.is_finished());
        spinner.report(ScanProgress::Complete {
            duration: Duration::from_millis(5),
            skipped: 0,
        });
        assert!(spinner.bar.is_finished());
    }
}
