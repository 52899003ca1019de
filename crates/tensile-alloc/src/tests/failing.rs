// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;

use crate::{AllocBehaviour, AllocError, Allocator, FailingAllocator};

fn allocate_and_release(allocator: &FailingAllocator) -> Result<(), AllocError> {
    let layout = Layout::new::<u64>();
    let ptr = allocator.allocate(layout)?;
    unsafe { allocator.deallocate(ptr, layout) };
    Ok(())
}

#[test]
fn test_failing_allocator_default_behaviour_succeeds() {
    let allocator = FailingAllocator::new();

    for _ in 0..8 {
        allocate_and_release(&allocator).expect("Failed to allocate_and_release(..)");
    }
    assert_eq!(allocator.refused(), 0);
}

#[test]
fn test_failing_allocator_fail_at_allocate_is_sticky() {
    let allocator = FailingAllocator::new();
    allocator.change_behaviour(AllocBehaviour::FailAtAllocate);

    for _ in 0..3 {
        let result = allocate_and_release(&allocator);
        assert!(matches!(result, Err(AllocError::Exhausted { size: 8, align: 8 })));
    }
    assert_eq!(allocator.refused(), 3);

    // Reset to normal behaviour
    allocator.change_behaviour(AllocBehaviour::None);
    allocate_and_release(&allocator).expect("Failed to allocate_and_release(..)");
}

#[test]
fn test_failing_allocator_fail_after() {
    let allocator = FailingAllocator::new();
    allocator.change_behaviour(AllocBehaviour::FailAfter(2));

    allocate_and_release(&allocator).expect("Failed first allocation");
    allocate_and_release(&allocator).expect("Failed second allocation");

    assert!(allocate_and_release(&allocator).is_err());
    assert!(allocate_and_release(&allocator).is_err());
    assert_eq!(allocator.refused(), 2);
}

#[test]
fn test_failing_allocator_clones_share_behaviour() {
    let allocator = FailingAllocator::new();
    let switch = allocator.clone();

    switch.change_behaviour(AllocBehaviour::FailAtAllocate);

    assert!(allocate_and_release(&allocator).is_err());
    assert_eq!(switch.refused(), 1);
}

#[test]
fn test_alloc_behaviour_default_is_none() {
    assert_eq!(AllocBehaviour::default(), AllocBehaviour::None);
}
