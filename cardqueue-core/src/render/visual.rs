//! Visual categories and the style classes attached to them

use std::fmt;

use crate::domain::job::JobState;

/// Styling bucket a job is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualCategory {
    Queued,
    Processing,
    Done,
    Failed,
}

/// Style classes used by the mapped visual mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleClasses {
    pub wrapper: &'static str,
    pub job: &'static str,
    pub animation: &'static str,
}

impl VisualCategory {
    /// Short key used in class names
    pub fn key(&self) -> &'static str {
        match self {
            VisualCategory::Queued => "queue",
            VisualCategory::Processing => "process",
            VisualCategory::Done => "done",
            VisualCategory::Failed => "failed",
        }
    }

    pub fn style(&self) -> StyleClasses {
        match self {
            VisualCategory::Queued => StyleClasses {
                wrapper: "queue-item job-queue-wrapper",
                job: "job-queue",
                animation: "job-queue-animation",
            },
            VisualCategory::Processing => StyleClasses {
                wrapper: "queue-item job-process-wrapper",
                job: "job-process",
                animation: "job-process-animation",
            },
            VisualCategory::Done => StyleClasses {
                wrapper: "queue-item job-done-wrapper",
                job: "job-done",
                animation: "job-done-animation",
            },
            VisualCategory::Failed => StyleClasses {
                wrapper: "queue-item job-failed-wrapper",
                job: "job-failed",
                animation: "job-failed-animation",
            },
        }
    }
}

impl From<JobState> for VisualCategory {
    fn from(state: JobState) -> Self {
        match state {
            JobState::Queued => VisualCategory::Queued,
            JobState::Processing => VisualCategory::Processing,
            JobState::Done => VisualCategory::Done,
            JobState::Failed => VisualCategory::Failed,
            // unrecognized states are drawn as waiting
            JobState::Unknown => VisualCategory::Queued,
        }
    }
}

impl fmt::Display for VisualCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
