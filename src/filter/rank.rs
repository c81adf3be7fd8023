//! Heap-based ranking of analysis results
//!
//! Each result is tagged with its collection sequence number so that equal
//! scores come out in the order they were collected.

use crate::collections::Heap;
use crate::scoring::{AnalysisOrder, WordStats};

type Entry = (usize, WordStats);

/// Strict total order: better score first, then earlier collection
fn ranks_ahead(order: AnalysisOrder, a: &Entry, b: &Entry) -> bool {
    order.precedes(&a.1, &b.1) || (!order.precedes(&b.1, &a.1) && a.0 < b.0)
}

/// Order `stats` best-first, keeping at most `limit` (0 for all)
///
/// With a limit, a bounded heap rooted at the worst kept entry holds the best
/// `limit` seen so far, so memory stays at `limit` entries.
#[must_use]
pub fn rank_stats(stats: Vec<WordStats>, order: AnalysisOrder, limit: usize) -> Vec<WordStats> {
    let limit = limit.min(stats.len());
    let entries = stats.into_iter().enumerate();

    let ranked = if limit == 0 || limit == entries.len() {
        let mut heap = Heap::new(move |a: &Entry, b: &Entry| ranks_ahead(order, a, b));
        for entry in entries {
            heap.push(entry);
        }
        heap.into_sorted_vec()
    } else {
        let mut heap = Heap::bounded(limit, move |a: &Entry, b: &Entry| ranks_ahead(order, b, a));
        for entry in entries {
            heap.push(entry);
        }
        let mut worst_first = heap.into_sorted_vec();
        worst_first.reverse();
        worst_first
    };

    ranked.into_iter().map(|(_, stats)| stats).collect()
}
