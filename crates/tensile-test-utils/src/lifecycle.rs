// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
struct Counts {
    created: AtomicUsize,
    cloned: AtomicUsize,
    dropped: AtomicUsize,
}

/// Shared counter of [`Tracked`] lifecycles.
///
/// Uses `Arc<AtomicUsize>` internally so all clones observe the same counts.
/// Every `Tracked` produced by [`LifecycleCounter::track`] (and every clone
/// of it) reports its drop here.
#[derive(Debug, Clone, Default)]
pub struct LifecycleCounter {
    counts: Arc<Counts>,
}

impl LifecycleCounter {
    /// Creates a counter with all counts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new tracked value reporting to this counter.
    pub fn track(&self, value: u64) -> Tracked {
        self.counts.created.fetch_add(1, Ordering::AcqRel);

        Tracked {
            value,
            counter: self.clone(),
        }
    }

    /// Number of values created through [`LifecycleCounter::track`].
    pub fn created(&self) -> usize {
        self.counts.created.load(Ordering::Acquire)
    }

    /// Number of clones made of tracked values.
    pub fn cloned(&self) -> usize {
        self.counts.cloned.load(Ordering::Acquire)
    }

    /// Number of tracked values dropped.
    pub fn dropped(&self) -> usize {
        self.counts.dropped.load(Ordering::Acquire)
    }

    /// Number of tracked values currently alive.
    ///
    /// # Panics
    ///
    /// Panics if more values were dropped than were ever constructed, which
    /// means some value was dropped twice.
    pub fn live(&self) -> usize {
        let constructed = self.created() + self.cloned();
        let dropped = self.dropped();

        assert!(
            dropped <= constructed,
            "LifecycleCounter: {dropped} drops for {constructed} constructions (double drop)"
        );

        constructed - dropped
    }

    /// Asserts that every constructed value has been dropped exactly once.
    pub fn assert_balanced(&self) {
        assert_eq!(
            self.live(),
            0,
            "LifecycleCounter: leaked values (created={}, cloned={}, dropped={})",
            self.created(),
            self.cloned(),
            self.dropped()
        );
    }
}

/// Value whose lifecycle is reported to a [`LifecycleCounter`].
pub struct Tracked {
    value: u64,
    counter: LifecycleCounter,
}

impl Tracked {
    /// Returns the payload.
    pub fn value(&self) -> u64 {
        self.value
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.counter.counts.cloned.fetch_add(1, Ordering::AcqRel);

        Self {
            value: self.value,
            counter: self.counter.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counter.counts.dropped.fetch_add(1, Ordering::AcqRel);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}
