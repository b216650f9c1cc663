//! Poll status and the published poll state

use chrono::{DateTime, Local};

use crate::domain::job::JobRecord;

/// Outcome of the most recent poll cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollStatus {
    /// No cycle has completed yet
    Loading,
    /// Last cycle succeeded at the given time
    Ready(DateTime<Local>),
    /// Last cycle failed with the given message
    Failed(String),
}

/// Snapshot and status, always replaced as one value
///
/// `jobs` stays `None` until the first successful poll. A failed poll keeps the
/// previous snapshot so stale data remains visible next to the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    pub jobs: Option<Vec<JobRecord>>,
    pub status: PollStatus,
    pub last_updated: Option<DateTime<Local>>,
}

impl PollState {
    /// Initial state before any poll completed
    pub fn loading() -> Self {
        Self {
            jobs: None,
            status: PollStatus::Loading,
            last_updated: None,
        }
    }

    /// State after a successful poll
    pub fn succeeded(&self, jobs: Vec<JobRecord>, at: DateTime<Local>) -> Self {
        Self {
            jobs: Some(jobs),
            status: PollStatus::Ready(at),
            last_updated: Some(at),
        }
    }

    /// State after a failed poll; the snapshot is retained
    pub fn failed(&self, message: impl Into<String>) -> Self {
        Self {
            jobs: self.jobs.clone(),
            status: PollStatus::Failed(message.into()),
            last_updated: self.last_updated,
        }
    }

    /// Whether at least one poll has succeeded
    pub fn has_snapshot(&self) -> bool {
        self.jobs.is_some()
    }
}

impl Default for PollState {
    fn default() -> Self {
        Self::loading()
    }
}
