// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::panic::{AssertUnwindSafe, catch_unwind};

use tensile_alloc::{AllocBehaviour, AllocError, FailingAllocator, Global, TrackingAllocator};
use tensile_test_utils::{CloneBreaker, LifecycleCounter, Tracked};

use crate::raw::RawBuf;

// =============================================================================
// allocate_in()
// =============================================================================

#[test]
fn test_allocate_in_zero_capacity_skips_allocator() {
    let tracker = TrackingAllocator::new();
    let buf: RawBuf<u64, _> = RawBuf::allocate_in(0, tracker.clone())
        .expect("Failed to allocate_in(..)");

    assert_eq!(buf.capacity(), 0);
    assert_eq!(tracker.stats().allocations, 0);
}

#[test]
fn test_allocate_in_and_drop_are_balanced() {
    let tracker = TrackingAllocator::new();

    {
        let buf: RawBuf<u64, _> = RawBuf::allocate_in(4, tracker.clone())
            .expect("Failed to allocate_in(..)");

        assert_eq!(buf.capacity(), 4);
        assert_eq!(tracker.stats().allocations, 1);
        assert_eq!(tracker.stats().live_bytes, 4 * core::mem::size_of::<u64>());
    }

    assert!(tracker.is_balanced());
}

#[test]
fn test_allocate_in_zero_sized_is_logical() {
    let tracker = TrackingAllocator::new();
    let buf: RawBuf<(), _> = RawBuf::allocate_in(5, tracker.clone())
        .expect("Failed to allocate_in(..)");

    assert_eq!(buf.capacity(), 5);
    assert_eq!(tracker.stats().allocations, 0);
}

#[test]
fn test_allocate_in_capacity_overflow() {
    let result: Result<RawBuf<u64, _>, _> = RawBuf::allocate_in(usize::MAX, Global);

    assert!(matches!(result, Err(AllocError::CapacityOverflow)));
}

// =============================================================================
// construct_fill()
// =============================================================================

#[test]
fn test_construct_fill_moves_value_into_last_slot() {
    let counter = LifecycleCounter::new();
    let buf: RawBuf<Tracked, _> = RawBuf::allocate_in(3, Global)
        .expect("Failed to allocate_in(..)");

    unsafe { buf.construct_fill(0, 3, counter.track(9)) };

    assert_eq!(counter.created(), 1);
    assert_eq!(counter.cloned(), 2);
    assert_eq!(counter.live(), 3);

    unsafe { buf.destroy_range(0, 3) };
    counter.assert_balanced();
}

#[test]
fn test_construct_fill_zero_count_drops_value() {
    let counter = LifecycleCounter::new();
    let buf: RawBuf<Tracked, _> = RawBuf::allocate_in(1, Global)
        .expect("Failed to allocate_in(..)");

    unsafe { buf.construct_fill(0, 0, counter.track(9)) };

    counter.assert_balanced();
}

// =============================================================================
// construct_range()
// =============================================================================

#[test]
fn test_construct_range_destroys_partial_on_panic() {
    let counter = LifecycleCounter::new();
    let first = CloneBreaker::with_budget(&counter, 0, 2);
    let src = [
        first.sibling(&counter, 1),
        first.sibling(&counter, 2),
        first.sibling(&counter, 3),
    ];
    let buf: RawBuf<CloneBreaker, _> = RawBuf::allocate_in(3, Global)
        .expect("Failed to allocate_in(..)");

    let result = catch_unwind(AssertUnwindSafe(|| unsafe { buf.construct_range(0, &src) }));

    assert!(result.is_err());
    // The two successful clones were destroyed during unwinding.
    assert_eq!(counter.live(), 4);

    drop(src);
    drop(first);
    counter.assert_balanced();
}

// =============================================================================
// construct_iter()
// =============================================================================

#[test]
fn test_construct_iter_reports_short_iterator() {
    let buf: RawBuf<u32, _> = RawBuf::allocate_in(4, Global)
        .expect("Failed to allocate_in(..)");

    let written = unsafe { buf.construct_iter(0, 4, [1u32, 2].into_iter()) };

    assert_eq!(written, 2);
    assert_eq!(unsafe { *buf.slot(1) }, 2);
}

#[test]
fn test_construct_iter_takes_at_most_count() {
    let buf: RawBuf<u32, _> = RawBuf::allocate_in(2, Global)
        .expect("Failed to allocate_in(..)");

    let written = unsafe { buf.construct_iter(0, 2, 10u32..) };

    assert_eq!(written, 2);
    assert_eq!(unsafe { *buf.slot(0) }, 10);
    assert_eq!(unsafe { *buf.slot(1) }, 11);
}

// =============================================================================
// reallocate()
// =============================================================================

#[test]
fn test_reallocate_grow_migrates_elements() {
    let tracker = TrackingAllocator::new();
    let mut buf: RawBuf<u32, _> = RawBuf::allocate_in(2, tracker.clone())
        .expect("Failed to allocate_in(..)");

    unsafe { buf.construct_iter(0, 2, [7u32, 8].into_iter()) };
    let kept = unsafe { buf.reallocate(2, 8) }.expect("Failed to reallocate(..)");

    assert_eq!(kept, 2);
    assert_eq!(buf.capacity(), 8);
    assert_eq!(unsafe { *buf.slot(0) }, 7);
    assert_eq!(unsafe { *buf.slot(1) }, 8);

    let stats = tracker.stats();
    assert_eq!(stats.allocations, 2);
    assert_eq!(stats.deallocations, 1);
}

#[test]
fn test_reallocate_shrink_destroys_excess() {
    let counter = LifecycleCounter::new();
    let mut buf: RawBuf<Tracked, _> = RawBuf::allocate_in(4, Global)
        .expect("Failed to allocate_in(..)");

    unsafe { buf.construct_with(0, 4, || counter.track(1)) };
    let kept = unsafe { buf.reallocate(4, 2) }.expect("Failed to reallocate(..)");

    assert_eq!(kept, 2);
    assert_eq!(buf.capacity(), 2);
    assert_eq!(counter.dropped(), 2);

    unsafe { buf.destroy_range(0, 2) };
    counter.assert_balanced();
}

#[test]
fn test_reallocate_to_zero_releases_storage() {
    let tracker = TrackingAllocator::new();
    let mut buf: RawBuf<u8, _> = RawBuf::allocate_in(16, tracker.clone())
        .expect("Failed to allocate_in(..)");

    let kept = unsafe { buf.reallocate(0, 0) }.expect("Failed to reallocate(..)");

    assert_eq!(kept, 0);
    assert_eq!(buf.capacity(), 0);
    assert!(tracker.is_balanced());
}

#[test]
fn test_reallocate_failure_leaves_buffer_untouched() {
    let allocator = FailingAllocator::new();
    let mut buf: RawBuf<u32, _> = RawBuf::allocate_in(2, allocator.clone())
        .expect("Failed to allocate_in(..)");

    unsafe { buf.construct_iter(0, 2, [1u32, 2].into_iter()) };
    let before = buf.ptr();

    allocator.change_behaviour(AllocBehaviour::FailAtAllocate);
    let result = unsafe { buf.reallocate(2, 4) };

    assert!(matches!(result, Err(AllocError::Exhausted { .. })));
    assert_eq!(buf.capacity(), 2);
    assert_eq!(buf.ptr(), before);
    assert_eq!(unsafe { *buf.slot(1) }, 2);
    assert_eq!(allocator.refused(), 1);
}
