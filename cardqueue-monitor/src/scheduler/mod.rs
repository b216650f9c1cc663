//! Scheduler layer for the monitor
//!
//! This layer owns the polling timer. It fetches the queue on a fixed
//! interval and publishes every outcome to the display.

pub mod poller;

pub use poller::QueuePoller;
