// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;

use crate::{AllocBehaviour, AllocStats, Allocator, FailingAllocator, TrackingAllocator};

#[test]
fn test_tracking_starts_balanced() {
    let tracker = TrackingAllocator::new();

    assert_eq!(tracker.stats(), AllocStats::default());
    assert!(tracker.is_balanced());
}

#[test]
fn test_tracking_counts_allocations_and_bytes() {
    let tracker = TrackingAllocator::new();
    let handle = tracker.clone();

    let small = Layout::new::<u32>();
    let large = Layout::array::<u64>(8).expect("Failed to Layout::array(..)");

    let a = tracker.allocate(small).expect("Failed to allocate(small)");
    let b = tracker.allocate(large).expect("Failed to allocate(large)");

    let stats = handle.stats();
    assert_eq!(stats.allocations, 2);
    assert_eq!(stats.deallocations, 0);
    assert_eq!(stats.live_bytes, 4 + 64);
    assert_eq!(stats.live_allocations(), 2);
    assert!(!handle.is_balanced());

    unsafe {
        tracker.deallocate(a, small);
        tracker.deallocate(b, large);
    }

    let stats = handle.stats();
    assert_eq!(stats.allocations, 2);
    assert_eq!(stats.deallocations, 2);
    assert_eq!(stats.live_bytes, 0);
    assert!(handle.is_balanced());
}

#[test]
fn test_tracking_does_not_count_refused_requests() {
    let failing = FailingAllocator::new();
    failing.change_behaviour(AllocBehaviour::FailAtAllocate);

    let tracker = TrackingAllocator::wrap(failing);

    assert!(tracker.allocate(Layout::new::<u8>()).is_err());
    assert_eq!(tracker.stats().allocations, 0);
    assert!(tracker.is_balanced());
}
