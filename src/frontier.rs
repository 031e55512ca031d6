//! Ordered frontier of discovered-but-unexpanded nodes.
//!
//! The frontier is kept as an always-sorted sequence: `enqueue` scans from
//! the front and inserts before the first entry that should come later,
//! `dequeue` always removes index 0. A binary heap would have better
//! asymptotics, but the scan-and-insert tie-break below is observable
//! behavior (it decides which of several equal-priority solutions wins), so
//! the sequence form is kept.
//!
//! Tie-break contract for equal priorities:
//! - within one batched [`Frontier::enqueue_all`] call, elements keep their
//!   relative order;
//! - across separate enqueue calls, a later call's element is inserted ahead
//!   of an earlier call's element still in the queue.

use crate::error::{Result, SearchError};

#[derive(Debug)]
struct Entry<T> {
    priority: f64,
    /// Monotonic enqueue-call counter; later calls win priority ties.
    batch: u64,
    item: T,
}

/// Priority-ordered queue keyed by a strategy-supplied `f64` priority.
///
/// Lowest priority dequeues first. Duplicate items are permitted; the
/// frontier performs no deduplication of its own.
#[derive(Debug)]
pub struct Frontier<T> {
    entries: Vec<Entry<T>>,
    next_batch: u64,
}

impl<T> Frontier<T> {
    /// Create an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_batch: 0,
        }
    }

    /// Insert one item, returning the index it was placed at.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Configuration`] if `priority` is NaN: a
    /// non-comparable priority cannot be ordered, and silently appending it
    /// would bury the defect. This is the single supported policy.
    pub fn enqueue(&mut self, item: T, priority: f64) -> Result<usize> {
        let batch = self.next_batch;
        self.next_batch += 1;
        self.insert(item, priority, batch)
    }

    /// Insert a batch of `(item, priority)` pairs as one enqueue call,
    /// returning the index each element was placed at.
    ///
    /// All elements share one tie-break rank, so equal-priority elements of
    /// the batch stay in their given order.
    ///
    /// # Errors
    ///
    /// Fails like [`Frontier::enqueue`] on the first NaN priority; elements
    /// before the offending one remain inserted (the search aborts anyway).
    pub fn enqueue_all(&mut self, items: Vec<(T, f64)>) -> Result<Vec<usize>> {
        let batch = self.next_batch;
        self.next_batch += 1;
        let mut positions = Vec::with_capacity(items.len());
        for (item, priority) in items {
            positions.push(self.insert(item, priority, batch)?);
        }
        Ok(positions)
    }

    fn insert(&mut self, item: T, priority: f64, batch: u64) -> Result<usize> {
        if priority.is_nan() {
            return Err(SearchError::config(
                "priority function returned a value that cannot be ordered (NaN)",
            ));
        }
        let at = self
            .entries
            .iter()
            .position(|e| {
                e.priority > priority || (e.priority == priority && e.batch < batch)
            })
            .unwrap_or(self.entries.len());
        self.entries.insert(
            at,
            Entry {
                priority,
                batch,
                item,
            },
        );
        Ok(at)
    }

    /// Remove and return the highest-priority (front) item.
    #[must_use]
    pub fn dequeue(&mut self) -> Option<T> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0).item)
        }
    }

    /// Number of queued items.
    #[must_use]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Whether the frontier holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all queued items, keeping the tie-break counter.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}
