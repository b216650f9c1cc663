//! Core domain types
//!
//! Job records as delivered by the queue endpoint, and the poll state the
//! monitor publishes after every cycle.

pub mod job;
pub mod status;
