//! Test fixtures for dynarr development.
//!
//! Provides element types that record their own lifecycle so tests can
//! check that the container constructs, clones, and drops each value
//! exactly once:
//!
//! - [`DropLedger`]: shared counters for creations and drops.
//! - [`Tracked`]: a value registered with a ledger.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt;
use std::sync::atomic::{AtomicIsize, AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Counters {
    created: AtomicUsize,
    dropped: AtomicUsize,
    /// Clones remaining before `Tracked::clone` panics. Negative = unlimited.
    clone_budget: AtomicIsize,
}

/// Shared lifecycle counters for [`Tracked`] values.
///
/// Cloning a ledger shares the same counters.
#[derive(Clone)]
pub struct DropLedger {
    counters: Arc<Counters>,
}

impl DropLedger {
    pub fn new() -> Self {
        let counters = Counters::default();
        counters.clone_budget.store(-1, Ordering::SeqCst);
        Self {
            counters: Arc::new(counters),
        }
    }

    /// A ledger whose values panic on the clone after `clones` successful ones.
    pub fn with_clone_budget(clones: usize) -> Self {
        let ledger = Self::new();
        ledger
            .counters
            .clone_budget
            .store(clones as isize, Ordering::SeqCst);
        ledger
    }

    /// Register a new value.
    pub fn track(&self, value: i32) -> Tracked {
        self.counters.created.fetch_add(1, Ordering::SeqCst);
        Tracked {
            value,
            ledger: self.clone(),
        }
    }

    /// Values created so far, clones included.
    pub fn created(&self) -> usize {
        self.counters.created.load(Ordering::SeqCst)
    }

    /// Values dropped so far.
    pub fn dropped(&self) -> usize {
        self.counters.dropped.load(Ordering::SeqCst)
    }

    /// Values created and not yet dropped.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }
}

impl Default for DropLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// An `i32` that reports its creation, clones, and drop to a [`DropLedger`].
pub struct Tracked {
    pub value: i32,
    ledger: DropLedger,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        let budget = &self.ledger.counters.clone_budget;
        if budget.load(Ordering::SeqCst) == 0 {
            panic!("clone budget exhausted");
        }
        if budget.load(Ordering::SeqCst) > 0 {
            budget.fetch_sub(1, Ordering::SeqCst);
        }
        self.ledger.track(self.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.ledger.counters.dropped.fetch_add(1, Ordering::SeqCst);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_counts_create_and_drop() {
        let ledger = DropLedger::new();
        let a = ledger.track(1);
        let b = a.clone();
        assert_eq!(ledger.created(), 2);
        assert_eq!(ledger.live(), 2);
        drop(a);
        drop(b);
        assert_eq!(ledger.dropped(), 2);
        assert_eq!(ledger.live(), 0);
    }

    #[test]
    fn clone_budget_panics_when_exhausted() {
        let ledger = DropLedger::with_clone_budget(1);
        let a = ledger.track(1);
        let _b = a.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| a.clone()));
        assert!(result.is_err());
    }
}
