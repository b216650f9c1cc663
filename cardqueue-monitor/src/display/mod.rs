//! Display layer
//!
//! The poller hands every published state to a [`DisplaySink`], which
//! recomputes what is shown. Sinks are trait objects so the terminal view can
//! be swapped for another shell or a recording sink in tests.

mod terminal;

use cardqueue_core::domain::status::PollState;

pub use terminal::TerminalDisplay;

/// Receiver of poll state changes
pub trait DisplaySink: Send + Sync {
    /// Called once after every applied update
    ///
    /// # Arguments
    /// * `state` - The state that was just published
    fn state_changed(&self, state: &PollState);
}
