//! Layout configuration.
//!
//! The only tunable is the minimum start difference: events whose starts lie
//! closer together than this threshold are laid out side by side even when
//! their time ranges do not intersect.

use chrono::Duration;

use crate::error::{LayoutError, Result};

/// Step (minutes per slot) of the default time grid.
pub const DEFAULT_STEP_MINUTES: u32 = 30;

/// Slots per group of the default time grid.
pub const DEFAULT_TIMESLOTS: u32 = 2;

/// Options for a single layout run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    minimum_start_difference: Duration,
}

impl LayoutOptions {
    /// Create options with an explicit minimum start difference.
    ///
    /// # Errors
    /// Returns `LayoutError::NegativeStartDifference` for a negative duration.
    pub fn new(minimum_start_difference: Duration) -> Result<Self> {
        if minimum_start_difference < Duration::zero() {
            return Err(LayoutError::NegativeStartDifference(
                minimum_start_difference.num_milliseconds(),
            ));
        }
        Ok(Self {
            minimum_start_difference,
        })
    }

    /// Derive the threshold from a time grid: half a slot group, rounded up
    /// to the whole minute.
    ///
    /// A grid with 30 minute steps and 2 timeslots yields 30 minutes; 15
    /// minute steps with 1 timeslot yield 8 minutes.
    ///
    /// # Errors
    /// Returns `LayoutError::InvalidTimeGrid` when `step` or `timeslots` is
    /// zero, or when the resulting duration is out of range.
    pub fn from_time_grid(step: u32, timeslots: u32) -> Result<Self> {
        let invalid = LayoutError::InvalidTimeGrid { step, timeslots };
        if step == 0 || timeslots == 0 {
            return Err(invalid);
        }
        let minutes = (u64::from(step) * u64::from(timeslots)).div_ceil(2);
        let minutes = i64::try_from(minutes).map_err(|_| invalid.clone())?;
        let threshold = Duration::try_minutes(minutes).ok_or(invalid)?;
        Self::new(threshold)
    }

    pub fn minimum_start_difference(&self) -> Duration {
        self.minimum_start_difference
    }

    /// The threshold in milliseconds, the unit every overlap comparison uses.
    pub fn minimum_start_difference_ms(&self) -> i64 {
        self.minimum_start_difference.num_milliseconds()
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            minimum_start_difference: Duration::minutes(
                (i64::from(DEFAULT_STEP_MINUTES) * i64::from(DEFAULT_TIMESLOTS) + 1) / 2,
            ),
        }
    }
}
