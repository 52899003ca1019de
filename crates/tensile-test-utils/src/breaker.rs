// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::lifecycle::{LifecycleCounter, Tracked};

/// Test fixture whose `clone()` panics once a shared budget is exhausted.
///
/// Every breaker made from the same [`CloneBreaker::with_budget`] call (and
/// every clone of it) draws from one budget. Payloads are [`Tracked`], so a
/// test can check for leaks and double drops after catching the panic.
#[derive(Debug)]
pub struct CloneBreaker {
    payload: Tracked,
    budget: Arc<AtomicUsize>,
}

impl CloneBreaker {
    /// Creates a breaker that allows `clones` successful clones in total.
    pub fn with_budget(counter: &LifecycleCounter, value: u64, clones: usize) -> Self {
        Self {
            payload: counter.track(value),
            budget: Arc::new(AtomicUsize::new(clones)),
        }
    }

    /// Creates another breaker sharing this one's budget.
    pub fn sibling(&self, counter: &LifecycleCounter, value: u64) -> Self {
        Self {
            payload: counter.track(value),
            budget: Arc::clone(&self.budget),
        }
    }

    /// Returns the payload.
    pub fn value(&self) -> u64 {
        self.payload.value()
    }

    /// Clones still allowed before the next `clone()` panics.
    pub fn remaining(&self) -> usize {
        self.budget.load(Ordering::Acquire)
    }
}

impl Clone for CloneBreaker {
    fn clone(&self) -> Self {
        let granted = self
            .budget
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
            .is_ok();

        if !granted {
            panic!("CloneBreaker: clone budget exhausted");
        }

        Self {
            payload: self.payload.clone(),
            budget: Arc::clone(&self.budget),
        }
    }
}

impl PartialEq for CloneBreaker {
    fn eq(&self, other: &Self) -> bool {
        self.payload == other.payload
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use super::CloneBreaker;
    use crate::LifecycleCounter;

    #[test]
    fn test_clone_breaker_panics_after_budget() {
        let counter = LifecycleCounter::new();
        let breaker = CloneBreaker::with_budget(&counter, 7, 1);

        let first = breaker.clone();
        assert_eq!(first.value(), 7);
        assert_eq!(breaker.remaining(), 0);

        let result = catch_unwind(AssertUnwindSafe(|| breaker.clone()));
        assert!(result.is_err());

        drop(first);
        drop(breaker);
        counter.assert_balanced();
    }
}
