//! Terminal view of the card queue

use std::io::{self, Write};
use std::sync::Mutex;

use cardqueue_core::domain::status::PollState;
use cardqueue_core::render::{self, DisplayItem, JobView, RenderOptions, VisualCategory};
use colored::*;

use super::DisplaySink;

/// Prints the status line and the rendered queue to a writer
pub struct TerminalDisplay {
    options: RenderOptions,
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalDisplay {
    /// Creates a display writing to stdout
    pub fn new(options: RenderOptions) -> Self {
        Self::with_writer(options, Box::new(io::stdout()))
    }

    /// Creates a display writing to the given writer
    pub fn with_writer(options: RenderOptions, out: Box<dyn Write + Send>) -> Self {
        Self {
            options,
            out: Mutex::new(out),
        }
    }

    fn write_state(&self, out: &mut dyn Write, state: &PollState) -> io::Result<()> {
        let status = render::status_line(&state.status, state.last_updated);
        writeln!(out, "{}", status.bold())?;
        writeln!(out, "{}", "─".repeat(40).dimmed())?;

        for item in render::render_state(state, &self.options) {
            match &item {
                DisplayItem::Loading => writeln!(out, "{}", item.to_string().dimmed())?,
                DisplayItem::Error { .. } => writeln!(out, "{}", item.to_string().red())?,
                DisplayItem::Empty => writeln!(out, "{}", item.to_string().yellow())?,
                DisplayItem::Job(view) => write_job(out, view)?,
            }
        }

        writeln!(out)?;
        out.flush()
    }
}

impl DisplaySink for TerminalDisplay {
    fn state_changed(&self, state: &PollState) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = self.write_state(&mut **out, state) {
            tracing::warn!("Failed to write display: {}", e);
        }
    }
}

fn write_job(out: &mut dyn Write, view: &JobView) -> io::Result<()> {
    match view.style {
        Some(style) => writeln!(
            out,
            "  {} {:<20} {}",
            "▸".cyan(),
            colorize(view.visual_state, &view.label),
            style.job.dimmed()
        ),
        None => writeln!(out, "  {}", view.label),
    }
}

/// Colorize a label by its visual category
fn colorize(category: VisualCategory, label: &str) -> ColoredString {
    match category {
        VisualCategory::Queued => label.yellow(),
        VisualCategory::Processing => label.cyan(),
        VisualCategory::Done => label.green(),
        VisualCategory::Failed => label.red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardqueue_core::domain::job::{JobRecord, JobState};
    use cardqueue_core::render::VisualMode;
    use chrono::{Local, TimeZone};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn display(options: RenderOptions) -> (TerminalDisplay, SharedBuffer) {
        colored::control::set_override(false);
        let buffer = SharedBuffer::default();
        let display = TerminalDisplay::with_writer(options, Box::new(buffer.clone()));
        (display, buffer)
    }

    #[test]
    fn test_prints_loading_placeholder() {
        let (display, buffer) = display(RenderOptions::default());
        display.state_changed(&PollState::loading());

        let text = buffer.contents();
        assert!(text.starts_with("Loading...\n"));
        assert!(text.contains("Loading queue..."));
    }

    #[test]
    fn test_prints_jobs_with_stale_data_and_error() {
        let at = Local.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).unwrap();
        let state = PollState::loading()
            .succeeded(
                vec![JobRecord::new("Bartholomew Montgomery", JobState::Done)],
                at,
            )
            .failed("HTTP error! status: 502");

        let (display, buffer) = display(RenderOptions::default());
        display.state_changed(&state);

        let text = buffer.contents();
        assert!(text.starts_with("Error: HTTP error! status: 502\n"));
        assert!(text.contains("Bartholomew Mont..."));
        assert!(text.contains("job-done"));
    }

    #[test]
    fn test_plain_mode_prints_label_only() {
        let at = Local.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).unwrap();
        let state =
            PollState::loading().succeeded(vec![JobRecord::new("Alice", JobState::Failed)], at);

        let (display, buffer) = display(RenderOptions {
            visual_mode: VisualMode::Plain,
            ..RenderOptions::default()
        });
        display.state_changed(&state);

        let text = buffer.contents();
        assert!(text.starts_with("Last updated: 09:30:00\n"));
        assert!(text.contains("  Alice\n"));
        assert!(!text.contains("job-failed"));
    }
}
