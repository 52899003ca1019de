// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Global - Heap allocator backed by `alloc::alloc`.

use core::alloc::Layout;
use core::ptr::{self, NonNull};

use crate::error::AllocError;
use crate::traits::Allocator;

/// The default allocator: the global heap.
///
/// Zero-sized requests never reach the heap; they receive a dangling pointer
/// aligned to the requested alignment, and deallocating it is a no-op.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct Global;

#[inline(always)]
fn dangling_for(layout: Layout) -> NonNull<u8> {
    // SAFETY (PRECONDITIONS ARE MET): Layout guarantees align is a non-zero power of two
    unsafe { NonNull::new_unchecked(ptr::without_provenance_mut(layout.align())) }
}

unsafe impl Allocator for Global {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if layout.size() == 0 {
            return Ok(dangling_for(layout));
        }

        // SAFETY (PRECONDITIONS ARE MET): layout has non-zero size
        let ptr = unsafe { alloc::alloc::alloc(layout) };

        NonNull::new(ptr).ok_or(AllocError::exhausted(layout))
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() == 0 {
            return;
        }

        // SAFETY (PRECONDITIONS ARE MET): caller guarantees ptr was allocated here with layout
        unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) }
    }
}
