//! Card Queue Monitor
//!
//! Polls the card queue endpoint and keeps a display of the queue current.
//!
//! Architecture:
//! - Configuration: Load settings from environment or defaults
//! - Scheduler: Cancellable polling timer that publishes each poll outcome
//! - Display: Sinks that re-render the queue whenever the state changes

pub mod config;
pub mod display;
pub mod scheduler;

pub use config::Config;
pub use display::{DisplaySink, TerminalDisplay};
pub use scheduler::QueuePoller;
