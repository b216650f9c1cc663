//! Card Queue Core
//!
//! Core types and rendering for the card queue monitor.
//!
//! This crate contains:
//! - Domain types: job records, poll status and the published poll state
//! - Render: the pure mapping from poll state to display items and status line

pub mod domain;
pub mod render;

pub use domain::job::{JobRecord, JobState};
pub use domain::status::{PollState, PollStatus};
pub use render::{DisplayItem, JobView, RenderOptions, VisualCategory, VisualMode};
