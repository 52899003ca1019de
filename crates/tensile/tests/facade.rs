// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tensile::alloc::{AllocBehaviour, AllocError, FailingAllocator, TrackingAllocator};
use tensile::vec::TensileVecError;
use tensile::{TensileVec, tensile_vec};

#[test]
fn test_facade_reexports_container_and_macro() {
    let vec = tensile_vec![1u32, 2, 3];
    let copy: TensileVec<u32> = vec.iter().copied().collect();

    assert_eq!(vec, copy);
}

#[test]
fn test_facade_allocators_compose() {
    let tracker = TrackingAllocator::new();
    let failing = FailingAllocator::wrap(tracker.clone());

    {
        let mut vec = TensileVec::new_in(failing.clone());
        vec.extend_from_slice(&[1u64, 2, 3]).expect("Failed to extend_from_slice(..)");

        failing.change_behaviour(AllocBehaviour::FailAtAllocate);

        assert!(matches!(
            vec.push(4),
            Err(TensileVecError::Alloc(AllocError::Exhausted { .. }))
        ));
        assert_eq!(vec.as_slice(), &[1, 2, 3]);
    }

    assert!(tracker.is_balanced());
}
