//! Overlap-tree construction.
//!
//! Proxies are inserted one at a time, in render order, into a forest of
//! container trees. Every proxy ends up as exactly one of:
//!
//! - a **container**: root of an overlap group,
//! - a **row**: attached to a parent and carrying children of its own,
//! - a **leaf**: attached to a parent, no children.
//!
//! Parent/child links and the cross-group `matching_containers` links are
//! stored as indices into the proxy arena, so the forest owns no cycles.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::options::LayoutOptions;
use crate::proxy::{EventProxy, Role};

/// A forest of overlap groups over a render-ordered proxy arena.
#[derive(Debug)]
pub struct OverlapTree<'a, T> {
    proxies: Vec<EventProxy<'a, T>>,
    roots: Vec<usize>,
}

impl<'a, T> OverlapTree<'a, T> {
    /// Insert every proxy, in the given order, into a fresh forest.
    ///
    /// The order of `proxies` is kept as the arena order; pass them through
    /// [`sort_by_render`](crate::sequence::sort_by_render) first.
    pub fn build(proxies: Vec<EventProxy<'a, T>>, options: &LayoutOptions) -> Self {
        let mut tree = Self {
            roots: Vec::new(),
            proxies,
        };
        let threshold_ms = options.minimum_start_difference_ms();

        for index in 0..tree.proxies.len() {
            let matches = tree.find_containers(index, threshold_ms);
            if matches.is_empty() {
                tree.make_root(index);
            } else {
                tree.attach(index, matches);
            }
        }

        debug!(
            events = tree.proxies.len(),
            groups = tree.roots.len(),
            "built overlap tree"
        );
        tree
    }

    /// The proxy arena, in render order.
    pub fn proxies(&self) -> &[EventProxy<'a, T>] {
        &self.proxies
    }

    /// Indices of the root containers, in creation order.
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    pub fn into_proxies(self) -> Vec<EventProxy<'a, T>> {
        self.proxies
    }

    /// Breadth-first search from every root for placed proxies that overlap
    /// the proxy at `index`. Each node is visited at most once.
    fn find_containers(&self, index: usize, threshold_ms: i64) -> Vec<usize> {
        let event = &self.proxies[index];
        let mut visited = vec![false; self.proxies.len()];
        let mut queue = VecDeque::with_capacity(self.roots.len());
        for &root in &self.roots {
            if !visited[root] {
                visited[root] = true;
                queue.push_back(root);
            }
        }

        let mut found = Vec::new();
        while let Some(candidate) = queue.pop_front() {
            let container = &self.proxies[candidate];
            if overlaps(event, container, threshold_ms) {
                found.push(candidate);
            }
            for &row in &container.rows {
                if !visited[row] {
                    visited[row] = true;
                    queue.push_back(row);
                }
            }
        }
        found
    }

    fn make_root(&mut self, index: usize) {
        let event = &mut self.proxies[index];
        event.role = Role::Container;
        event.column = 0;
        self.roots.push(index);
        trace!(index, "new container");
    }

    fn attach(&mut self, index: usize, matches: Vec<usize>) {
        // Deepest match wins; on ties the first one found.
        let mut parent = matches[0];
        for &candidate in &matches[1..] {
            if self.proxies[candidate].column > self.proxies[parent].column {
                parent = candidate;
            }
        }

        let column = self.proxies[parent].column + 1;
        {
            let container = &mut self.proxies[parent];
            container.rows.push(index);
            if let Role::Leaf { container: grandparent } = container.role {
                container.role = Role::Row {
                    container: grandparent,
                };
            }
        }

        self.propagate_total_columns(&matches, column + 1);

        let event = &mut self.proxies[index];
        event.column = column;
        event.role = Role::Leaf { container: parent };
        event.matching_containers = matches;
        trace!(index, parent, column, "attached to container");
    }

    /// Raise `total_columns` on every match and, transitively, on every
    /// container reachable through `matching_containers`.
    fn propagate_total_columns(&mut self, matches: &[usize], total_columns: usize) {
        let mut visited = vec![false; self.proxies.len()];
        let mut stack: Vec<usize> = matches.iter().rev().copied().collect();

        while let Some(current) = stack.pop() {
            if visited[current] {
                continue;
            }
            visited[current] = true;

            let proxy = &mut self.proxies[current];
            proxy.total_columns = proxy.total_columns.max(total_columns);
            stack.extend(
                proxy
                    .matching_containers
                    .iter()
                    .rev()
                    .copied()
                    .filter(|&ancestor| !visited[ancestor]),
            );
        }
    }
}

/// True when `event` has to share horizontal space with `container`: their
/// ranges intersect, or they start less than `threshold_ms` apart.
fn overlaps<T>(event: &EventProxy<'_, T>, container: &EventProxy<'_, T>, threshold_ms: i64) -> bool {
    (container.end_ms > event.start_ms && event.end_ms > container.start_ms)
        || event.start_ms.abs_diff(container.start_ms) < threshold_ms.unsigned_abs()
}
