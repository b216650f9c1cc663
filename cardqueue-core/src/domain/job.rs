//! Job domain types

use serde::Deserialize;

/// One entry of the card queue as returned by the server
///
/// Records carry no stable id; identity is the position in the returned list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobRecord {
    pub name: String,
    pub state: JobState,
}

impl JobRecord {
    pub fn new(name: impl Into<String>, state: JobState) -> Self {
        Self {
            name: name.into(),
            state,
        }
    }
}

/// Processing state of a job
///
/// The wire names (`queue`, `process`, `done`, `failed`) are fixed by the
/// server. Any other string decodes as [`JobState::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum JobState {
    #[serde(rename = "queue")]
    Queued,
    #[serde(rename = "process")]
    Processing,
    #[serde(rename = "done")]
    Done,
    #[serde(rename = "failed")]
    Failed,
    #[serde(other)]
    Unknown,
}
