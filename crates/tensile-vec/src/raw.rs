// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RawBuf - Owning handle to a block of raw slots.
//!
//! Holds the buffer lifecycle primitives every container operation is built
//! on: allocate, deallocate, construct (range, fill, closure, iterator),
//! destroy-range and reallocate-and-migrate. `RawBuf` knows nothing about
//! which slots are live; callers pass that in.

use core::alloc::Layout;
use core::cmp;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

use tensile_alloc::{AllocError, Allocator, array_layout};

/// Smallest capacity a growing buffer jumps to.
pub(crate) const MIN_NON_ZERO_CAP: usize = 1;

/// Factor applied to the current capacity when a buffer runs out of slots.
pub(crate) const GROWTH_FACTOR: usize = 2;

pub(crate) struct RawBuf<T, A: Allocator> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

// Safety: RawBuf owns its slots exclusively; sharing follows T and A.
unsafe impl<T: Send, A: Allocator + Send> Send for RawBuf<T, A> {}
unsafe impl<T: Sync, A: Allocator + Sync> Sync for RawBuf<T, A> {}

impl<T, A: Allocator> RawBuf<T, A> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Creates an empty buffer without allocating.
    pub(crate) const fn new_in(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Creates a buffer with exactly `capacity` raw slots.
    pub(crate) fn allocate_in(capacity: usize, alloc: A) -> Result<Self, AllocError> {
        let mut buf = Self::new_in(alloc);

        buf.ptr = buf.allocate_slots(capacity)?;
        buf.cap = capacity;

        Ok(buf)
    }

    /// Gets a raw pointer to the first slot. Dangling if `capacity == 0`.
    #[inline(always)]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    pub(crate) fn non_null(&self) -> NonNull<T> {
        self.ptr
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline(always)]
    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Pointer to slot `index`.
    ///
    /// # Safety
    ///
    /// `index <= capacity`.
    #[inline(always)]
    pub(crate) unsafe fn slot(&self, index: usize) -> *mut T {
        debug_assert!(index <= self.cap);
        // SAFETY (PRECONDITIONS ARE MET): index stays within (or one past) the allocation
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Obtains storage for `capacity` slots from this buffer's allocator
    /// without installing it.
    ///
    /// Zero capacities and zero-sized `T` never reach the allocator.
    pub(crate) fn allocate_slots(&self, capacity: usize) -> Result<NonNull<T>, AllocError> {
        if capacity == 0 || Self::IS_ZST {
            return Ok(NonNull::dangling());
        }

        let layout = array_layout::<T>(capacity)?;
        let ptr = self.alloc.allocate(layout)?;

        Ok(ptr.cast())
    }

    /// # Safety
    ///
    /// `ptr` must come from `allocate_slots(capacity)` on this buffer and must
    /// not be used afterwards.
    unsafe fn release_slots(&self, ptr: NonNull<T>, capacity: usize) {
        if capacity == 0 || Self::IS_ZST {
            return;
        }

        // SAFETY (PRECONDITIONS ARE MET): the same layout was validated when the slots were allocated
        unsafe {
            let layout = Layout::from_size_align_unchecked(
                mem::size_of::<T>() * capacity,
                mem::align_of::<T>(),
            );
            self.alloc.deallocate(ptr.cast(), layout);
        }
    }

    /// Installs new storage, releasing the old one. Slot contents are not
    /// touched: live elements must have been moved or destroyed already.
    ///
    /// # Safety
    ///
    /// `ptr` must come from `allocate_slots(capacity)` on this buffer.
    pub(crate) unsafe fn replace_storage(&mut self, ptr: NonNull<T>, capacity: usize) {
        let old_ptr = mem::replace(&mut self.ptr, ptr);
        let old_cap = mem::replace(&mut self.cap, capacity);

        // SAFETY (PRECONDITIONS ARE MET): old storage was installed from allocate_slots(old_cap)
        unsafe { self.release_slots(old_ptr, old_cap) }
    }

    /// Releases the storage and resets to the empty state.
    ///
    /// Live elements are not dropped; callers destroy them first.
    pub(crate) fn deallocate(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): dangling with capacity 0 is never released
        unsafe { self.replace_storage(NonNull::dangling(), 0) }
    }

    /// Constructs `value` in slot `index`.
    ///
    /// # Safety
    ///
    /// `index < capacity` and the slot is raw.
    #[inline(always)]
    pub(crate) unsafe fn construct(&self, index: usize, value: T) {
        // SAFETY (PRECONDITIONS ARE MET): slot is in bounds and raw
        unsafe { self.alloc.construct(self.slot(index), value) }
    }

    /// Destroys `count` live elements starting at slot `start`.
    ///
    /// # Safety
    ///
    /// Slots `start..start + count` hold live elements, none of which is used
    /// again.
    pub(crate) unsafe fn destroy_range(&self, start: usize, count: usize) {
        for offset in 0..count {
            // SAFETY (PRECONDITIONS ARE MET): slot is in bounds and live
            unsafe { self.alloc.destroy(self.slot(start + offset)) }
        }
    }

    /// Clones every element of `src` into slots `dst..dst + src.len()`.
    ///
    /// If a clone panics, the slots written so far are destroyed before the
    /// panic continues, so no slot is left half-owned.
    ///
    /// # Safety
    ///
    /// `dst + src.len() <= capacity` and those slots are raw.
    pub(crate) unsafe fn construct_range(&self, dst: usize, src: &[T])
    where
        T: Clone,
    {
        let mut guard = ConstructGuard::new(self, dst);

        for item in src {
            // SAFETY (PRECONDITIONS ARE MET): slot dst + done is in bounds and raw
            unsafe { self.construct(dst + guard.done, item.clone()) };
            guard.done += 1;
        }

        guard.finish();
    }

    /// Fills slots `dst..dst + count` with clones of `value`. The last slot
    /// receives `value` itself.
    ///
    /// # Safety
    ///
    /// `dst + count <= capacity` and those slots are raw.
    pub(crate) unsafe fn construct_fill(&self, dst: usize, count: usize, value: T)
    where
        T: Clone,
    {
        if count == 0 {
            return;
        }

        let mut guard = ConstructGuard::new(self, dst);

        while guard.done + 1 < count {
            // SAFETY (PRECONDITIONS ARE MET): slot dst + done is in bounds and raw
            unsafe { self.construct(dst + guard.done, value.clone()) };
            guard.done += 1;
        }

        // SAFETY (PRECONDITIONS ARE MET): last slot of the range is in bounds and raw
        unsafe { self.construct(dst + guard.done, value) };
        guard.done += 1;

        guard.finish();
    }

    /// Fills slots `dst..dst + count` with values produced by `f`.
    ///
    /// # Safety
    ///
    /// `dst + count <= capacity` and those slots are raw.
    pub(crate) unsafe fn construct_with<F>(&self, dst: usize, count: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        let mut guard = ConstructGuard::new(self, dst);

        while guard.done < count {
            // SAFETY (PRECONDITIONS ARE MET): slot dst + done is in bounds and raw
            unsafe { self.construct(dst + guard.done, f()) };
            guard.done += 1;
        }

        guard.finish();
    }

    /// Moves at most `count` items from `iter` into slots starting at `dst`.
    ///
    /// Returns how many slots were constructed, which is less than `count`
    /// when the iterator runs out early.
    ///
    /// # Safety
    ///
    /// `dst + count <= capacity` and those slots are raw.
    pub(crate) unsafe fn construct_iter<I>(&self, dst: usize, count: usize, iter: I) -> usize
    where
        I: Iterator<Item = T>,
    {
        let mut guard = ConstructGuard::new(self, dst);

        for item in iter.take(count) {
            // SAFETY (PRECONDITIONS ARE MET): take(count) keeps dst + done below dst + count
            unsafe { self.construct(dst + guard.done, item) };
            guard.done += 1;
        }

        guard.finish()
    }

    /// Migrates the `len` live elements into a fresh buffer of exactly
    /// `new_capacity` slots and releases the old one.
    ///
    /// Elements past `new_capacity` are destroyed. The fresh buffer is
    /// obtained before anything is touched, so on error the buffer and its
    /// elements are unchanged. Returns the number of live elements
    /// afterwards, `min(len, new_capacity)`.
    ///
    /// # Safety
    ///
    /// Slots `0..len` hold live elements and `len <= capacity`.
    pub(crate) unsafe fn reallocate(
        &mut self,
        len: usize,
        new_capacity: usize,
    ) -> Result<usize, AllocError> {
        let fresh = self.allocate_slots(new_capacity)?;
        let kept = cmp::min(len, new_capacity);

        // SAFETY (PRECONDITIONS ARE MET): slots kept..len are live, fresh has room for kept slots
        unsafe {
            self.destroy_range(kept, len - kept);
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), fresh.as_ptr(), kept);
            self.replace_storage(fresh, new_capacity);
        }

        Ok(kept)
    }
}

impl<T, A: Allocator> Drop for RawBuf<T, A> {
    /// Frees the storage *without* dropping its contents.
    fn drop(&mut self) {
        self.deallocate();
    }
}

impl<T, A: Allocator> fmt::Debug for RawBuf<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuf")
            .field("capacity", &self.cap)
            .finish_non_exhaustive()
    }
}

/// Destroys the slots constructed so far if construction unwinds.
struct ConstructGuard<'a, T, A: Allocator> {
    buf: &'a RawBuf<T, A>,
    start: usize,
    done: usize,
}

impl<'a, T, A: Allocator> ConstructGuard<'a, T, A> {
    fn new(buf: &'a RawBuf<T, A>, start: usize) -> Self {
        Self {
            buf,
            start,
            done: 0,
        }
    }

    /// Disarms the guard and returns the number of constructed slots.
    fn finish(self) -> usize {
        let done = self.done;
        mem::forget(self);
        done
    }
}

impl<T, A: Allocator> Drop for ConstructGuard<'_, T, A> {
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): exactly `done` slots from `start` were constructed
        unsafe { self.buf.destroy_range(self.start, self.done) }
    }
}
