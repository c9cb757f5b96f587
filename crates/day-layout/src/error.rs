//! Error types for day-layout configuration.

use thiserror::Error;

/// Errors raised while building [`LayoutOptions`](crate::LayoutOptions).
///
/// Layout itself never fails on its own account: failures from the
/// slot-metrics mapper are returned to the caller as the mapper's own error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Minimum start difference must not be negative, got {0} ms")]
    NegativeStartDifference(i64),

    #[error("Invalid time grid: step {step} min, {timeslots} timeslots per group")]
    InvalidTimeGrid { step: u32, timeslots: u32 },
}

/// Convenience alias used throughout day-layout.
pub type Result<T> = std::result::Result<T, LayoutError>;
