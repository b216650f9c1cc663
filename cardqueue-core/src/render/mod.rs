//! Queue renderer
//!
//! Pure functions from poll state to what the display shows. Nothing here
//! holds state; the same inputs always produce the same items.

pub mod label;
pub mod visual;

use std::fmt;

use chrono::{DateTime, Local};

use crate::domain::job::{JobRecord, JobState};
use crate::domain::status::{PollState, PollStatus};

pub use label::{DEFAULT_MAX_LABEL_LENGTH, TRUNCATION_MARKER, truncate_label};
pub use visual::{StyleClasses, VisualCategory};

/// Whether style classes are attached to job items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisualMode {
    /// Labels plus per-category style classes
    #[default]
    Mapped,
    /// Labels only
    Plain,
}

/// Rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub max_label_length: usize,
    pub visual_mode: VisualMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_label_length: DEFAULT_MAX_LABEL_LENGTH,
            visual_mode: VisualMode::default(),
        }
    }
}

/// One rendered job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobView {
    /// Index in the fetched list
    pub position: usize,
    pub label: String,
    pub state: JobState,
    pub visual_state: VisualCategory,
    /// Present in [`VisualMode::Mapped`] only
    pub style: Option<StyleClasses>,
}

/// Item shown by the display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayItem {
    Loading,
    Error { message: String },
    Empty,
    Job(JobView),
}

impl fmt::Display for DisplayItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayItem::Loading => write!(f, "Loading queue..."),
            DisplayItem::Error { message } => write!(f, "Error loading queue: {}", message),
            DisplayItem::Empty => write!(f, "No cards in queue"),
            DisplayItem::Job(view) => write!(f, "{}", view.label),
        }
    }
}

/// Renders a queue snapshot into display items
///
/// `queue` is `None` until the first successful poll. Once a snapshot exists
/// its contents are shown whatever the status, so a failed poll leaves the
/// stale queue on screen.
pub fn render(
    queue: Option<&[JobRecord]>,
    status: &PollStatus,
    options: &RenderOptions,
) -> Vec<DisplayItem> {
    let jobs = match (queue, status) {
        (Some(jobs), _) => jobs,
        (None, PollStatus::Loading) => return vec![DisplayItem::Loading],
        (None, PollStatus::Failed(message)) => {
            return vec![DisplayItem::Error {
                message: message.clone(),
            }];
        }
        (None, PollStatus::Ready(_)) => return vec![DisplayItem::Empty],
    };

    if jobs.is_empty() {
        return vec![DisplayItem::Empty];
    }

    jobs.iter()
        .enumerate()
        .map(|(position, job)| DisplayItem::Job(render_job(position, job, options)))
        .collect()
}

fn render_job(position: usize, job: &JobRecord, options: &RenderOptions) -> JobView {
    let visual_state = VisualCategory::from(job.state);
    let style = match options.visual_mode {
        VisualMode::Mapped => Some(visual_state.style()),
        VisualMode::Plain => None,
    };

    JobView {
        position,
        label: truncate_label(&job.name, options.max_label_length),
        state: job.state,
        visual_state,
        style,
    }
}

/// Renders a full poll state
pub fn render_state(state: &PollState, options: &RenderOptions) -> Vec<DisplayItem> {
    render(state.jobs.as_deref(), &state.status, options)
}

/// Human-readable status line
///
/// `last_updated` is the time of the last successful poll, used when the
/// status is not an error and data has been seen before.
pub fn status_line(status: &PollStatus, last_updated: Option<DateTime<Local>>) -> String {
    match (status, last_updated) {
        (PollStatus::Failed(message), _) => format!("Error: {}", message),
        (PollStatus::Ready(at), _) => format_last_updated(*at),
        (PollStatus::Loading, Some(at)) => format_last_updated(at),
        (PollStatus::Loading, None) => "Loading...".to_string(),
    }
}

fn format_last_updated(at: DateTime<Local>) -> String {
    format!("Last updated: {}", at.format("%H:%M:%S"))
}
