//! Event proxies and the collaborator contracts they are built from.
//!
//! A proxy wraps one caller record for the duration of a single layout run.
//! It carries the record's time bounds and vertical geometry (as reported by
//! the [`SlotMetrics`] mapper) plus the column bookkeeping the overlap tree
//! fills in. Caller records are only ever borrowed.

use chrono::{DateTime, Utc};

/// A record's placement on the time grid, as reported by the slot-metrics
/// mapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotRange {
    /// Display-relative start position. Opaque to the layout.
    pub start: f64,
    /// Display-relative end position. Opaque to the layout.
    pub end: f64,
    /// Absolute start, after the mapper's normalization.
    pub start_date: DateTime<Utc>,
    /// Absolute end, after the mapper's normalization.
    pub end_date: DateTime<Utc>,
    pub top: f64,
    pub height: f64,
}

/// Maps a raw start/end pair onto the rendering time grid.
///
/// All vertical positioning and clamping lives behind this trait. Errors are
/// handed back to the caller of the layout unchanged.
pub trait SlotMetrics {
    type Error;

    fn get_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<SlotRange, Self::Error>;
}

/// Reads the start and end instant of a caller record.
pub trait EventAccessors<T: ?Sized> {
    fn start(&self, event: &T) -> DateTime<Utc>;
    fn end(&self, event: &T) -> DateTime<Utc>;
}

/// [`EventAccessors`] backed by a pair of closures.
#[derive(Debug, Clone, Copy)]
pub struct FnAccessors<S, E> {
    start: S,
    end: E,
}

/// Build accessors from a start closure and an end closure.
///
/// ```rust
/// use chrono::{DateTime, Utc};
/// use day_layout::{accessors, EventAccessors};
///
/// struct Meeting {
///     from: DateTime<Utc>,
///     to: DateTime<Utc>,
/// }
///
/// let acc = accessors(|m: &Meeting| m.from, |m: &Meeting| m.to);
/// let m = Meeting { from: DateTime::<Utc>::UNIX_EPOCH, to: DateTime::<Utc>::UNIX_EPOCH };
/// assert_eq!(acc.start(&m), acc.end(&m));
/// ```
pub fn accessors<T, S, E>(start: S, end: E) -> FnAccessors<S, E>
where
    T: ?Sized,
    S: Fn(&T) -> DateTime<Utc>,
    E: Fn(&T) -> DateTime<Utc>,
{
    FnAccessors { start, end }
}

impl<T, S, E> EventAccessors<T> for FnAccessors<S, E>
where
    T: ?Sized,
    S: Fn(&T) -> DateTime<Utc>,
    E: Fn(&T) -> DateTime<Utc>,
{
    fn start(&self, event: &T) -> DateTime<Utc> {
        (self.start)(event)
    }

    fn end(&self, event: &T) -> DateTime<Utc> {
        (self.end)(event)
    }
}

/// Position of a proxy in the overlap tree.
///
/// Indices refer to the render-ordered proxy arena owned by
/// [`OverlapTree`](crate::tree::OverlapTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// Not yet inserted into a tree.
    #[default]
    NotPlaced,
    /// Root of an overlap group. May or may not have rows.
    Container,
    /// Attached to `container` and has at least one row of its own.
    Row { container: usize },
    /// Attached to `container`, no rows of its own.
    Leaf { container: usize },
}

impl Role {
    /// The parent index, for rows and leaves.
    pub fn container(&self) -> Option<usize> {
        match *self {
            Role::Row { container } | Role::Leaf { container } => Some(container),
            Role::NotPlaced | Role::Container => None,
        }
    }
}

/// Computed-layout record for one caller event.
#[derive(Debug, Clone)]
pub struct EventProxy<'a, T> {
    pub(crate) start: f64,
    pub(crate) end: f64,
    pub(crate) start_ms: i64,
    pub(crate) end_ms: i64,
    pub(crate) top: f64,
    pub(crate) height: f64,
    pub(crate) data: &'a T,
    pub(crate) column: usize,
    pub(crate) total_columns: usize,
    pub(crate) role: Role,
    pub(crate) rows: Vec<usize>,
    pub(crate) matching_containers: Vec<usize>,
}

impl<'a, T> EventProxy<'a, T> {
    /// Wrap `data`, asking `slot_metrics` for its place on the grid.
    ///
    /// # Errors
    /// Whatever `slot_metrics` returns, unchanged.
    pub fn new<A, M>(data: &'a T, accessors: &A, slot_metrics: &M) -> Result<Self, M::Error>
    where
        A: EventAccessors<T> + ?Sized,
        M: SlotMetrics + ?Sized,
    {
        let range = slot_metrics.get_range(accessors.start(data), accessors.end(data))?;

        Ok(Self {
            start: range.start,
            end: range.end,
            start_ms: range.start_date.timestamp_millis(),
            end_ms: range.end_date.timestamp_millis(),
            top: range.top,
            height: range.height,
            data,
            column: 0,
            total_columns: 1,
            role: Role::NotPlaced,
            rows: Vec::new(),
            matching_containers: Vec::new(),
        })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn start_ms(&self) -> i64 {
        self.start_ms
    }

    pub fn end_ms(&self) -> i64 {
        self.end_ms
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The borrowed caller record.
    pub fn data(&self) -> &'a T {
        self.data
    }

    /// Depth of this proxy below its root container (0 for roots).
    pub fn column(&self) -> usize {
        self.column
    }

    /// Deepest column reached anywhere in this proxy's overlap group, plus one.
    pub fn total_columns(&self) -> usize {
        self.total_columns
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Children attached directly beneath this proxy, in insertion order.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Every proxy this one overlapped at insertion time.
    pub fn matching_containers(&self) -> &[usize] {
        &self.matching_containers
    }
}
