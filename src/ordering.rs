//! # Ordering Indices
//!
//! Every attribute carries an ordering index that decides where it lands in
//! listings such as generated help text. When no explicit index is supplied
//! the index is drawn from an [`OrderingCounter`].
//!
//! Counters are cheap handles over a shared atomic, so a clone continues the
//! same sequence. Code that wants deterministic indices (tests, or a
//! harvester assembling one collection) creates its own counter; everything
//! else falls back to [`OrderingCounter::global`].
//!
//! Explicit indices are never checked against the counter, so an explicit
//! index may collide with one the counter hands out later.
//!
//! A counter never wraps. Once it reaches `u64::MAX` every further draw
//! fails with [`AttributeError::IndexExhausted`], so the last index it can
//! issue is `u64::MAX - 1`.

use crate::attribute::AttributeError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<OrderingCounter> = OnceLock::new();

/// Monotonic source of ordering indices.
#[derive(Debug, Clone)]
pub struct OrderingCounter {
    next: Arc<AtomicU64>,
}

impl OrderingCounter {
    /// A fresh counter whose first index is 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// A fresh counter whose first index is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: Arc::new(AtomicU64::new(first)),
        }
    }

    /// The process-wide counter used when no counter is supplied.
    pub fn global() -> Self {
        GLOBAL.get_or_init(OrderingCounter::new).clone()
    }

    /// Issues the next index. Safe to call from several threads at once.
    pub fn next(&self) -> Result<u64, AttributeError> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                current.checked_add(1)
            })
            .map_err(|_| AttributeError::IndexExhausted)
    }

    /// The index the next call to [`next`](Self::next) would issue.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }

    /// Whether both handles share one sequence.
    pub fn shares_sequence_with(&self, other: &OrderingCounter) -> bool {
        Arc::ptr_eq(&self.next, &other.next)
    }
}

impl Default for OrderingCounter {
    fn default() -> Self {
        Self::new()
    }
}
