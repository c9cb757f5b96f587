//! Width and horizontal offset resolution.
//!
//! Widths and offsets are percentages of the day column. A proxy sits
//! immediately to the right of its parent's band and divides the remaining
//! space evenly among the columns still to come in its group.

use serde::{Deserialize, Serialize};

use crate::proxy::Role;
use crate::tree::OverlapTree;

/// The full width of a day column, in percent.
pub const FULL_WIDTH: f64 = 100.0;

/// Placement of one event inside the day column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStyle {
    /// Passed through from the slot-metrics mapper.
    pub top: f64,
    /// Passed through from the slot-metrics mapper.
    pub height: f64,
    /// Width in percent of the column.
    pub width: f64,
    /// Left edge in percent of the column.
    pub x_offset: f64,
}

/// Resolve a style for every proxy in the tree, in arena (render) order.
pub fn resolve_styles<T>(tree: &OverlapTree<'_, T>) -> Vec<EventStyle> {
    let proxies = tree.proxies();
    // Parents are always inserted before their children, so one forward pass
    // sees every parent's band before it is needed.
    let mut bands: Vec<(f64, f64)> = Vec::with_capacity(proxies.len());
    let mut styles = Vec::with_capacity(proxies.len());

    for (index, proxy) in proxies.iter().enumerate() {
        let (available, x_offset) = match proxy.role.container() {
            Some(parent) => {
                let (parent_width, parent_offset) = bands[parent];
                let edge = parent_width + parent_offset;
                (FULL_WIDTH - edge, edge)
            }
            None => (FULL_WIDTH, 0.0),
        };

        let no_overlap = if proxy.total_columns > proxy.column {
            available / (proxy.total_columns - proxy.column) as f64
        } else {
            available
        };
        let overlap = no_overlap.min(FULL_WIDTH);

        let width = match proxy.role {
            // Containers can always grow.
            Role::Container if !proxy.rows.is_empty() => overlap,
            Role::Row { .. } if !proxy.rows.is_empty() => overlap,
            // Leaves can grow unless they are the last item in their row.
            Role::Leaf { container } => {
                if proxies[container].rows.last() == Some(&index) {
                    no_overlap
                } else {
                    overlap
                }
            }
            Role::Container | Role::Row { .. } | Role::NotPlaced => no_overlap,
        };

        bands.push((no_overlap, x_offset));
        styles.push(EventStyle {
            top: proxy.top,
            height: proxy.height,
            width,
            x_offset,
        });
    }

    styles
}
