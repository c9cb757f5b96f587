//! `day-layout` CLI — lay out overlapping calendar events in a day column.
//!
//! ## Usage
//!
//! ```sh
//! # Events on stdin, styled events on stdout
//! echo '[{"id":1,"start":"2026-03-02T09:00:00","end":"2026-03-02T10:00:00"}]' | day-layout
//!
//! # A working-hours column in a named timezone, written to a file
//! day-layout -i events.json -o styled.json --timezone Europe/Berlin \
//!   --day 2026-03-02 --day-start 08:00 --day-end 18:00
//!
//! # Explicit threshold (minutes) instead of deriving it from the grid
//! day-layout --min-start-diff 10 --pretty -i events.json
//! ```

mod grid;
mod input;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use clap::Parser;
use day_layout::{accessors, get_styled_events, EventStyle, LayoutOptions};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{self, Read, Write};
use tracing::{debug, info};

use crate::grid::DayGrid;
use crate::input::{local_to_utc, parse_events, InputEvent};

#[derive(Parser)]
#[command(
    name = "day-layout",
    version,
    about = "Lay out overlapping calendar events side by side in a day column"
)]
struct Cli {
    /// Input JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
    /// Day to lay out, YYYY-MM-DD (defaults to the day of the earliest event)
    #[arg(long)]
    day: Option<NaiveDate>,
    /// IANA timezone for naive datetimes and the day window
    #[arg(long, default_value = "UTC")]
    timezone: String,
    /// Start of the visible window, HH:MM
    #[arg(long, default_value = "00:00", value_parser = parse_clock)]
    day_start: NaiveTime,
    /// End of the visible window, HH:MM (defaults to midnight after the day)
    #[arg(long, value_parser = parse_clock)]
    day_end: Option<NaiveTime>,
    /// Minimum start difference in minutes; overrides --step/--timeslots
    #[arg(long, conflicts_with_all = ["step", "timeslots"])]
    min_start_diff: Option<i64>,
    /// Minutes per slot of the time grid
    #[arg(long, default_value_t = day_layout::options::DEFAULT_STEP_MINUTES)]
    step: u32,
    /// Slots per group of the time grid
    #[arg(long, default_value_t = day_layout::options::DEFAULT_TIMESLOTS)]
    timeslots: u32,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

/// One output record: the input event verbatim next to its style.
#[derive(Serialize)]
struct StyledOutput<'a> {
    event: &'a Value,
    style: EventStyle,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let tz: Tz = cli
        .timezone
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid timezone: {}", cli.timezone))?;

    let options = match cli.min_start_diff {
        Some(minutes) => {
            let threshold = Duration::try_minutes(minutes)
                .context("Minimum start difference is out of range")?;
            LayoutOptions::new(threshold)
        }
        None => LayoutOptions::from_time_grid(cli.step, cli.timeslots),
    }
    .context("Invalid layout options")?;

    let json = read_input(cli.input.as_deref())?;
    let events = parse_events(&json, tz)?;
    info!(events = events.len(), timezone = %tz, "parsed input");

    let output = if events.is_empty() {
        Vec::new()
    } else {
        let grid = day_grid(&cli, &events, tz)?;
        let acc = accessors(|e: &InputEvent| e.start, |e: &InputEvent| e.end);
        let styled = get_styled_events(&events, &acc, &grid, &options)?;
        debug!(styled = styled.len(), "layout complete");
        styled
            .into_iter()
            .map(|s| StyledOutput {
                event: &s.event.raw,
                style: s.style,
            })
            .collect()
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    write_output(cli.output.as_deref(), &rendered)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn parse_clock(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| format!("expected HH:MM, got '{}': {}", s, e))
}

/// Build the day window from the CLI flags, in `tz`.
fn day_grid(cli: &Cli, events: &[InputEvent], tz: Tz) -> Result<DayGrid> {
    let day = match cli.day {
        Some(day) => day,
        None => events
            .iter()
            .map(|e| e.start.with_timezone(&tz).date_naive())
            .min()
            .context("No events to derive the day from")?,
    };

    let min = local_to_utc(day.and_time(cli.day_start), tz)?;
    let max = match cli.day_end {
        Some(end) => local_to_utc(day.and_time(end), tz)?,
        None => {
            let midnight = day
                .succ_opt()
                .and_then(|next| next.and_hms_opt(0, 0, 0))
                .context("Day is out of range")?;
            local_to_utc(midnight, tz)?
        }
    };
    debug!(%min, %max, "day window");

    DayGrid::new(min, max)
}

fn read_input(path: Option<&str>) -> Result<String> {
    let mut buf = String::new();
    match path {
        Some(path) => File::open(path).and_then(|mut file| file.read_to_string(&mut buf)),
        None => io::stdin().read_to_string(&mut buf),
    }
    .with_context(|| format!("Failed to read {}", path.unwrap_or("stdin")))?;
    Ok(buf)
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    let mut sink: Box<dyn Write> = match path {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create file: {}", path))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    writeln!(sink, "{}", content)
        .and_then(|()| sink.flush())
        .with_context(|| format!("Failed to write {}", path.unwrap_or("stdout")))
}
