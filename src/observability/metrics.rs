//! Request counters
//!
//! - Counters only, monotonic
//! - Reset only on process start
//! - Relaxed atomics; exact values are not required across threads

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Registry of request counters, shared by the HTTP state
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    list_requests: AtomicU64,
    lookup_requests: AtomicU64,
    lookup_misses: AtomicU64,
    records_returned: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a served listing page of `returned` records
    pub fn record_list(&self, returned: usize) {
        self.list_requests.fetch_add(1, Ordering::Relaxed);
        self.records_returned
            .fetch_add(returned as u64, Ordering::Relaxed);
    }

    /// Record a lookup and whether it found a book
    pub fn record_lookup(&self, found: bool) {
        self.lookup_requests.fetch_add(1, Ordering::Relaxed);
        if found {
            self.records_returned.fetch_add(1, Ordering::Relaxed);
        } else {
            self.lookup_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Point-in-time copy of every counter
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            list_requests: self.list_requests.load(Ordering::Relaxed),
            lookup_requests: self.lookup_requests.load(Ordering::Relaxed),
            lookup_misses: self.lookup_misses.load(Ordering::Relaxed),
            records_returned: self.records_returned.load(Ordering::Relaxed),
        }
    }
}

/// Counter values at one instant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub list_requests: u64,
    pub lookup_requests: u64,
    pub lookup_misses: u64,
    pub records_returned: u64,
}
