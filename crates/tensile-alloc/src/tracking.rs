// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! TrackingAllocator - Counts allocations passing through an inner allocator.

use alloc::sync::Arc;
use core::alloc::Layout;
use core::ptr::NonNull;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::error::AllocError;
use crate::global::Global;
use crate::traits::Allocator;

#[derive(Debug, Default)]
struct Counters {
    allocations: AtomicUsize,
    deallocations: AtomicUsize,
    live_bytes: AtomicUsize,
}

/// Snapshot of the counters kept by a [`TrackingAllocator`].
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct AllocStats {
    /// Number of successful `allocate` calls.
    pub allocations: usize,
    /// Number of `deallocate` calls.
    pub deallocations: usize,
    /// Bytes currently allocated and not yet released.
    pub live_bytes: usize,
}

impl AllocStats {
    /// Number of allocations not yet released.
    pub fn live_allocations(&self) -> usize {
        self.allocations.saturating_sub(self.deallocations)
    }
}

/// Allocator wrapper that counts allocations, deallocations and live bytes.
///
/// Clones share their counters, so a test can keep one handle while a
/// container owns another.
///
/// # Example
///
/// ```rust
/// use core::alloc::Layout;
/// use tensile_alloc::{Allocator, TrackingAllocator};
///
/// let tracker = TrackingAllocator::new();
/// let handle = tracker.clone();
///
/// let layout = Layout::new::<u64>();
/// let ptr = tracker.allocate(layout).expect("Failed to allocate(..)");
/// assert_eq!(handle.stats().live_allocations(), 1);
///
/// unsafe { tracker.deallocate(ptr, layout) };
/// assert_eq!(handle.stats().live_allocations(), 0);
/// assert_eq!(handle.stats().live_bytes, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrackingAllocator<A = Global> {
    inner: A,
    counters: Arc<Counters>,
}

impl TrackingAllocator<Global> {
    /// Creates a tracker over the global heap.
    pub fn new() -> Self {
        Self::wrap(Global)
    }
}

impl<A> TrackingAllocator<A> {
    /// Creates a tracker over `inner`.
    pub fn wrap(inner: A) -> Self {
        Self {
            inner,
            counters: Arc::new(Counters::default()),
        }
    }

    /// Returns a snapshot of the counters.
    pub fn stats(&self) -> AllocStats {
        AllocStats {
            allocations: self.counters.allocations.load(Ordering::Acquire),
            deallocations: self.counters.deallocations.load(Ordering::Acquire),
            live_bytes: self.counters.live_bytes.load(Ordering::Acquire),
        }
    }

    /// Returns `true` if every allocation has been released.
    pub fn is_balanced(&self) -> bool {
        let stats = self.stats();
        stats.live_allocations() == 0 && stats.live_bytes == 0
    }
}

unsafe impl<A> Allocator for TrackingAllocator<A>
where
    A: Allocator,
{
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        let ptr = self.inner.allocate(layout)?;

        self.counters.allocations.fetch_add(1, Ordering::AcqRel);
        self.counters
            .live_bytes
            .fetch_add(layout.size(), Ordering::AcqRel);

        Ok(ptr)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.counters.deallocations.fetch_add(1, Ordering::AcqRel);
        self.counters
            .live_bytes
            .fetch_sub(layout.size(), Ordering::AcqRel);

        // SAFETY (PRECONDITIONS ARE MET): forwarded from caller
        unsafe { self.inner.deallocate(ptr, layout) }
    }
}
