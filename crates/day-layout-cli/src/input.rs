//! JSON event input.
//!
//! Each input record is kept verbatim so it can be echoed back next to its
//! style; only `start` and `end` are interpreted.

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Deserialize;
use serde_json::Value;

/// A parsed input record.
#[derive(Debug, Clone)]
pub struct InputEvent {
    pub raw: Value,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Deserialize)]
struct Bounds {
    start: String,
    end: String,
}

/// Parse a JSON array of events with `start`/`end` datetime strings.
pub fn parse_events(json: &str, tz: Tz) -> Result<Vec<InputEvent>> {
    let values: Vec<Value> = serde_json::from_str(json).context("Invalid events JSON")?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let bounds = Bounds::deserialize(&raw)
                .with_context(|| format!("Event {} needs string `start` and `end` fields", index))?;
            let start = parse_datetime(&bounds.start, tz)
                .with_context(|| format!("Event {}: bad start", index))?;
            let end = parse_datetime(&bounds.end, tz)
                .with_context(|| format!("Event {}: bad end", index))?;
            Ok(InputEvent { raw, start, end })
        })
        .collect()
}

/// Parse an ISO 8601 datetime.
///
/// RFC 3339 strings carry their own offset. Naive local times
/// (`2026-02-17T14:00:00` or `2026-02-17T14:00`) are interpreted in `tz`; in
/// a DST overlap the earlier instant wins.
pub fn parse_datetime(s: &str, tz: Tz) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|e| anyhow!("Invalid datetime '{}': {}", s, e))?;
    local_to_utc(naive, tz)
}

/// Resolve a local wall-clock time in `tz`.
pub fn local_to_utc(naive: NaiveDateTime, tz: Tz) -> Result<DateTime<Utc>> {
    match tz.from_local_datetime(&naive).earliest() {
        Some(dt) => Ok(dt.with_timezone(&Utc)),
        None => bail!("{} does not exist in {} (DST gap)", naive, tz),
    }
}
