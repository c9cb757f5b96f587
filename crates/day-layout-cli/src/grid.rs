//! A linear time grid over one day window.
//!
//! Maps instants to minutes from the window start and to `top`/`height`
//! percentages of the window. Ranges are clamped into the window.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use day_layout::{SlotMetrics, SlotRange};

#[derive(Debug, Clone, Copy)]
pub struct DayGrid {
    min: DateTime<Utc>,
    max: DateTime<Utc>,
}

impl DayGrid {
    /// # Errors
    /// Fails when the window is empty or inverted.
    pub fn new(min: DateTime<Utc>, max: DateTime<Utc>) -> Result<Self> {
        if max <= min {
            bail!("Day window is empty: {} is not after {}", max, min);
        }
        Ok(Self { min, max })
    }

    fn total_minutes(&self) -> f64 {
        (self.max - self.min).num_milliseconds() as f64 / 60_000.0
    }

    fn position(&self, at: DateTime<Utc>) -> f64 {
        (at - self.min).num_milliseconds() as f64 / 60_000.0
    }
}

impl SlotMetrics for DayGrid {
    type Error = anyhow::Error;

    fn get_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<SlotRange> {
        if end < start {
            bail!("Event ends ({}) before it starts ({})", end, start);
        }
        let start_date = start.clamp(self.min, self.max);
        let end_date = end.clamp(self.min, self.max);
        let start = self.position(start_date);
        let end = self.position(end_date);
        let total = self.total_minutes();

        Ok(SlotRange {
            start,
            end,
            start_date,
            end_date,
            top: start / total * 100.0,
            height: (end - start) / total * 100.0,
        })
    }
}
