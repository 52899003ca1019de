// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::{self, NonNull};

use crate::error::AllocError;

/// Capability for obtaining raw storage and managing element lifetimes in it.
///
/// Storage and element lifetimes are decoupled: `allocate` hands out raw,
/// uninitialized memory, `construct` turns a raw slot into a live value, and
/// `destroy` turns it back into a raw slot without releasing the memory.
///
/// # Safety
///
/// Implementors must guarantee that a pointer returned by `allocate(layout)`
/// is valid for reads and writes of `layout.size()` bytes, is aligned to
/// `layout.align()`, and stays valid until it is passed to `deallocate` with
/// the same layout. Zero-sized requests may return a dangling, well-aligned
/// pointer.
pub unsafe trait Allocator {
    /// Obtains raw storage for `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the request cannot be satisfied.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Releases storage previously obtained from [`Allocator::allocate`].
    ///
    /// # Safety
    ///
    /// `ptr` must come from `allocate` on this allocator (or a clone sharing
    /// its heap) with exactly `layout`, and must not be used afterwards.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Writes `value` into the raw slot at `slot`.
    ///
    /// # Safety
    ///
    /// `slot` must be valid for writes, properly aligned, and must not hold a
    /// live value (it would be overwritten without being dropped).
    #[inline(always)]
    unsafe fn construct<T>(&self, slot: *mut T, value: T) {
        // SAFETY (PRECONDITIONS ARE MET): caller guarantees `slot` is a raw, writable slot
        unsafe { ptr::write(slot, value) }
    }

    /// Drops the live value at `slot`, leaving the slot raw.
    ///
    /// # Safety
    ///
    /// `slot` must hold a live value that is not used again until the slot is
    /// constructed anew.
    #[inline(always)]
    unsafe fn destroy<T>(&self, slot: *mut T) {
        // SAFETY (PRECONDITIONS ARE MET): caller guarantees `slot` holds a live value
        unsafe { ptr::drop_in_place(slot) }
    }
}

unsafe impl<A> Allocator for &A
where
    A: Allocator,
{
    #[inline(always)]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        (**self).allocate(layout)
    }

    #[inline(always)]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY (PRECONDITIONS ARE MET): forwarded from caller
        unsafe { (**self).deallocate(ptr, layout) }
    }

    #[inline(always)]
    unsafe fn construct<T>(&self, slot: *mut T, value: T) {
        // SAFETY (PRECONDITIONS ARE MET): forwarded from caller
        unsafe { (**self).construct(slot, value) }
    }

    #[inline(always)]
    unsafe fn destroy<T>(&self, slot: *mut T) {
        // SAFETY (PRECONDITIONS ARE MET): forwarded from caller
        unsafe { (**self).destroy(slot) }
    }
}
