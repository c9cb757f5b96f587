//! # day-layout
//!
//! Deterministic side-by-side layout of overlapping events in a calendar day
//! column.
//!
//! Given events whose vertical geometry has already been computed by a time
//! grid mapper, assigns every event a width and a horizontal offset (both in
//! percent of the column) so that events sharing time never collide, while
//! events with the column to themselves take its full width.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{DateTime, Duration, TimeZone, Utc};
//! use day_layout::{accessors, get_styled_events, LayoutOptions, SlotMetrics, SlotRange};
//!
//! struct Grid;
//!
//! impl SlotMetrics for Grid {
//!     type Error = std::convert::Infallible;
//!
//!     fn get_range(
//!         &self,
//!         start: DateTime<Utc>,
//!         end: DateTime<Utc>,
//!     ) -> Result<SlotRange, Self::Error> {
//!         Ok(SlotRange {
//!             start: 0.0,
//!             end: 0.0,
//!             start_date: start,
//!             end_date: end,
//!             top: 0.0,
//!             height: 0.0,
//!         })
//!     }
//! }
//!
//! let at = |h| Utc.with_ymd_and_hms(2026, 3, 1, h, 0, 0).unwrap();
//! let events = vec![(at(9), at(10)), (at(9), at(10))];
//! let acc = accessors(|e: &(DateTime<Utc>, DateTime<Utc>)| e.0, |e: &(DateTime<Utc>, DateTime<Utc>)| e.1);
//! let options = LayoutOptions::new(Duration::minutes(10)).unwrap();
//!
//! let styled = get_styled_events(&events, &acc, &Grid, &options).unwrap();
//! assert_eq!(styled[0].style.width, 50.0);
//! assert_eq!(styled[1].style.x_offset, 50.0);
//! ```
//!
//! ## Modules
//!
//! - [`proxy`] — Event proxies, the `SlotMetrics` and `EventAccessors` contracts
//! - [`sequence`] — Render-order sequencing
//! - [`tree`] — Overlap-tree construction
//! - [`style`] — Width and offset resolution
//! - [`layout`] — The `get_styled_events` entry point
//! - [`options`] — Layout configuration
//! - [`error`] — Error types

pub mod error;
pub mod layout;
pub mod options;
pub mod proxy;
pub mod sequence;
pub mod style;
pub mod tree;

pub use error::LayoutError;
pub use layout::{get_styled_events, StyledEvent};
pub use options::LayoutOptions;
pub use proxy::{accessors, EventAccessors, EventProxy, FnAccessors, Role, SlotMetrics, SlotRange};
pub use sequence::sort_by_render;
pub use style::{resolve_styles, EventStyle};
pub use tree::OverlapTree;
