//! The public layout entry point.
//!
//! Raw events flow strictly downstream: records → proxies → render order →
//! overlap tree → styles. Nothing is cached between calls.

use serde::Serialize;

use crate::options::LayoutOptions;
use crate::proxy::{EventAccessors, EventProxy, SlotMetrics};
use crate::sequence::sort_by_render;
use crate::style::{resolve_styles, EventStyle};
use crate::tree::OverlapTree;

/// A caller record together with its computed placement.
#[derive(Debug, Serialize)]
pub struct StyledEvent<'a, T> {
    /// The original record, borrowed from the input slice.
    pub event: &'a T,
    pub style: EventStyle,
}

impl<T> Clone for StyledEvent<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StyledEvent<'_, T> {}

/// Lay out `events` in a single day column.
///
/// Returns one [`StyledEvent`] per input record, in render order (which is
/// not necessarily the input order). An empty slice yields an empty list.
///
/// # Errors
/// The first error reported by `slot_metrics`, unchanged.
#[tracing::instrument(skip_all, fields(events = events.len()))]
pub fn get_styled_events<'a, T, A, M>(
    events: &'a [T],
    accessors: &A,
    slot_metrics: &M,
    options: &LayoutOptions,
) -> Result<Vec<StyledEvent<'a, T>>, M::Error>
where
    A: EventAccessors<T> + ?Sized,
    M: SlotMetrics + ?Sized,
{
    let proxies = events
        .iter()
        .map(|event| EventProxy::new(event, accessors, slot_metrics))
        .collect::<Result<Vec<_>, _>>()?;

    // Render order doubles as the output order, so no z-index juggling is
    // needed downstream.
    let tree = OverlapTree::build(sort_by_render(proxies), options);
    let styles = resolve_styles(&tree);

    Ok(tree
        .proxies()
        .iter()
        .zip(styles)
        .map(|(proxy, style)| StyledEvent {
            event: proxy.data(),
            style,
        })
        .collect())
}
