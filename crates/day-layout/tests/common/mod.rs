//! Shared fixtures for day-layout integration tests.

#![allow(dead_code)]

use std::convert::Infallible;

use chrono::{DateTime, Duration, TimeZone, Utc};
use day_layout::{accessors, get_styled_events, EventAccessors, LayoutOptions, SlotMetrics, SlotRange};
use serde::Serialize;

/// A caller-owned event record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestEvent {
    pub id: &'static str,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Helper: a time on the fixture day (2015-04-01, UTC).
pub fn d(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2015, 4, 1, hour, minute, 0).unwrap()
}

pub fn event(id: &'static str, start: DateTime<Utc>, end: DateTime<Utc>) -> TestEvent {
    TestEvent { id, start, end }
}

/// Linear grid over the fixture day: positions in minutes from midnight,
/// `top`/`height` in percent of the day.
pub struct MinuteGrid {
    min: DateTime<Utc>,
    max: DateTime<Utc>,
}

impl MinuteGrid {
    pub fn day() -> Self {
        Self {
            min: d(0, 0),
            max: d(0, 0) + Duration::days(1),
        }
    }

    fn total_minutes(&self) -> f64 {
        (self.max - self.min).num_minutes() as f64
    }
}

impl SlotMetrics for MinuteGrid {
    type Error = Infallible;

    fn get_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<SlotRange, Self::Error> {
        let start = start.clamp(self.min, self.max);
        let end = end.clamp(self.min, self.max);
        let start_pos = (start - self.min).num_minutes() as f64;
        let end_pos = (end - self.min).num_minutes() as f64;
        Ok(SlotRange {
            start: start_pos,
            end: end_pos,
            start_date: start,
            end_date: end,
            top: start_pos / self.total_minutes() * 100.0,
            height: (end_pos - start_pos) / self.total_minutes() * 100.0,
        })
    }
}

pub fn test_accessors() -> impl EventAccessors<TestEvent> {
    accessors(|e: &TestEvent| e.start, |e: &TestEvent| e.end)
}

/// The threshold used by the calendar matrix fixtures.
pub fn ten_minutes() -> LayoutOptions {
    LayoutOptions::new(Duration::minutes(10)).unwrap()
}

/// One floored layout result, as the calendar matrix fixtures compare them.
#[derive(Debug, Clone, PartialEq)]
pub struct Floored {
    pub width: i64,
    pub x_offset: i64,
    pub id: &'static str,
}

pub fn floored(width: i64, x_offset: i64, id: &'static str) -> Floored {
    Floored { width, x_offset, id }
}

/// Lay out `events` on the fixture day and floor widths/offsets.
pub fn layout_floored(events: &[TestEvent], options: &LayoutOptions) -> Vec<Floored> {
    get_styled_events(events, &test_accessors(), &MinuteGrid::day(), options)
        .unwrap()
        .into_iter()
        .map(|styled| Floored {
            width: styled.style.width.floor() as i64,
            x_offset: styled.style.x_offset.floor() as i64,
            id: styled.event.id,
        })
        .collect()
}
