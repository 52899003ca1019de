// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tensile_alloc::TrackingAllocator;
use tensile_test_utils::LifecycleCounter;

use crate::{TensileVec, tensile_vec};

#[test]
fn test_into_iter_both_ends() {
    let vec = tensile_vec![1u32, 2, 3, 4];
    let mut iter = vec.into_iter();

    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.as_slice(), &[2, 3]);
    assert_eq!(iter.collect::<Vec<_>>(), [2, 3]);
}

#[test]
fn test_into_iter_is_fused() {
    let mut iter = tensile_vec![1u32].into_iter();

    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_into_iter_drop_destroys_remainder() {
    let counter = LifecycleCounter::new();
    let tracker = TrackingAllocator::new();
    let mut vec = TensileVec::new_in(tracker.clone());
    for i in 0..5 {
        vec.push(counter.track(i)).expect("Failed to push(..)");
    }

    let mut iter = vec.into_iter();
    let first = iter.next().expect("Failed to next()");
    drop(iter);

    assert_eq!(counter.live(), 1);
    assert!(tracker.is_balanced());

    drop(first);
    counter.assert_balanced();
}

#[test]
fn test_borrowing_iterators() {
    let mut vec = tensile_vec![1u32, 2, 3];

    for item in &mut vec {
        *item *= 2;
    }

    let sum: u32 = (&vec).into_iter().sum();
    assert_eq!(sum, 12);
}
