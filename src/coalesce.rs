//! Run-at-most-once-per-quantum scheduling.
//!
//! Callers [`schedule`](Coalescer::schedule) work as often as they like; the
//! owner calls [`take`](Coalescer::take) once per quantum (one display frame
//! in the viewer) and gets every key touched since the last flush, or `None`
//! if nothing was scheduled. Values are read at flush time, so the last
//! write before the flush wins.

use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct Coalescer<K> {
    pending: BTreeSet<K>,
    requests: usize,
    flushes: u64,
}

impl<K> Default for Coalescer<K> {
    fn default() -> Self {
        Self {
            pending: BTreeSet::new(),
            requests: 0,
            flushes: 0,
        }
    }
}

impl<K: Ord + Copy> Coalescer<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` dirty. Returns `true` if this opened a new pending flush.
    pub fn schedule(&mut self, key: K) -> bool {
        let opened = self.pending.is_empty();
        self.pending.insert(key);
        self.requests += 1;
        opened
    }

    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of `schedule` calls folded into the pending flush.
    pub fn pending_requests(&self) -> usize {
        self.requests
    }

    /// Drain the dirty keys for this quantum.
    pub fn take(&mut self) -> Option<BTreeSet<K>> {
        if self.pending.is_empty() {
            return None;
        }
        self.requests = 0;
        self.flushes += 1;
        Some(std::mem::take(&mut self.pending))
    }

    /// Total number of non-empty flushes so far.
    pub fn flushes(&self) -> u64 {
        self.flushes
    }
}
