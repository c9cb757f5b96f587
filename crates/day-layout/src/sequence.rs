//! Render-order sequencing.
//!
//! Proxies are sorted chronologically (longer events first on equal starts),
//! then regrouped so that everything inside one event's span is processed as
//! a contiguous run and the next disjoint event follows it directly.

use std::collections::VecDeque;

use crate::proxy::EventProxy;

/// Order proxies for tree insertion and output.
///
/// The sort is stable: proxies with identical bounds keep their input order.
pub fn sort_by_render<'a, T>(proxies: Vec<EventProxy<'a, T>>) -> Vec<EventProxy<'a, T>> {
    let mut by_time = proxies;
    by_time.sort_by(|a, b| {
        a.start_ms
            .cmp(&b.start_ms)
            .then_with(|| b.end_ms.cmp(&a.end_ms))
    });

    let mut remaining: VecDeque<EventProxy<'a, T>> = by_time.into();
    let mut sorted = Vec::with_capacity(remaining.len());

    while let Some(event) = remaining.pop_front() {
        let end_ms = event.end_ms;
        sorted.push(event);

        // First proxy that starts at or after the emitted one ends opens the
        // next group. Pull it forward unless it is already next in line.
        let boundary = remaining.iter().position(|test| end_ms <= test.start_ms);
        if let Some(index) = boundary.filter(|&i| i > 0) {
            if let Some(next) = remaining.remove(index) {
                sorted.push(next);
            }
        }
    }

    sorted
}
