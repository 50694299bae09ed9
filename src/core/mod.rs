//! Core types for the temporal display.
//!
//! This module provides the fundamental value types and pure functions the
//! rest of the crate is built on: the time representation, closed intervals,
//! snap-to-grid quantization, and the zoom ratio policy. All time values are
//! epoch milliseconds (i64).

pub mod interval;
pub mod snap;
pub mod time;
pub mod zoom;

// Re-export core data structures for easier access.
pub use interval::TimeRange;
pub use snap::snap;
pub use time::{Time, TimeDomain};
