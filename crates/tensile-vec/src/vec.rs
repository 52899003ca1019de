// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! TensileVec - Contiguous growable array over an explicit allocator.

use core::cmp;
use core::mem::{self, ManuallyDrop};
use core::ops::{Bound, Range, RangeBounds};
use core::ptr::{self, NonNull};
use core::slice;

use tensile_alloc::{AllocError, Allocator, Global};

use crate::error::TensileVecError;
use crate::raw::{GROWTH_FACTOR, MIN_NON_ZERO_CAP, RawBuf};

/// Contiguous growable array whose elements live in one block obtained from
/// an [`Allocator`].
///
/// Slots `0..len()` hold live elements, slots `len()..capacity()` are raw
/// storage. Every element is constructed and destroyed through the
/// allocator's `construct` / `destroy` operations.
///
/// # Growth
///
/// | Operation                   | New capacity when it grows              |
/// |-----------------------------|-----------------------------------------|
/// | `push` / `emplace_back`     | `max(1, 2 * capacity)`                  |
/// | `insert*` / `emplace`       | `max(2 * capacity, len + count)`        |
/// | `resize*` with `n > len`    | `max(n, 2 * capacity)`, always          |
/// | `reserve(n)` / `assign*(n)` | exactly `n`                             |
/// | `shrink_to_fit`             | exactly `len`                           |
///
/// # Errors
///
/// Operations that may allocate return `Result<_, TensileVecError>`. When an
/// allocation fails the container is left exactly as it was before the call.
///
/// # Example
///
/// ```rust
/// use tensile_vec::{TensileVec, TensileVecError};
///
/// fn example() -> Result<(), TensileVecError> {
///     let mut vec = TensileVec::new();
///
///     for i in 0..10 {
///         vec.push(i)?;
///     }
///
///     vec.erase(3);
///     vec.insert(0, 99)?;
///
///     assert_eq!(vec.as_slice(), &[99, 0, 1, 2, 4, 5, 6, 7, 8, 9]);
///     assert_eq!(vec.at(1)?, &0);
///     assert!(vec.at(10).is_err());
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct TensileVec<T, A: Allocator = Global> {
    buf: RawBuf<T, A>,
    len: usize,
}

impl<T> TensileVec<T, Global> {
    /// Creates an empty vector. Does not allocate.
    pub const fn new() -> Self {
        Self::new_in(Global)
    }

    /// Creates an empty vector with exactly `capacity` raw slots.
    pub fn with_capacity(capacity: usize) -> Result<Self, TensileVecError> {
        Self::with_capacity_in(capacity, Global)
    }

    /// Creates a vector of `len` default-constructed elements.
    pub fn from_default(len: usize) -> Result<Self, TensileVecError>
    where
        T: Default,
    {
        Self::from_default_in(len, Global)
    }

    /// Creates a vector of `len` copies of `value`.
    pub fn from_elem(len: usize, value: T) -> Result<Self, TensileVecError>
    where
        T: Clone,
    {
        Self::from_elem_in(len, value, Global)
    }

    /// Creates a vector holding clones of `src`, with capacity `src.len()`.
    pub fn from_slice(src: &[T]) -> Result<Self, TensileVecError>
    where
        T: Clone,
    {
        Self::from_slice_in(src, Global)
    }

    /// Creates a vector from every item of `iter`, in order.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, TensileVecError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::try_from_iter_in(iter, Global)
    }
}

impl<T, A: Allocator> TensileVec<T, A> {
    /// Creates an empty vector using `alloc`. Does not allocate.
    pub const fn new_in(alloc: A) -> Self {
        Self {
            buf: RawBuf::new_in(alloc),
            len: 0,
        }
    }

    /// Creates an empty vector with exactly `capacity` raw slots from `alloc`.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, TensileVecError> {
        Ok(Self {
            buf: RawBuf::allocate_in(capacity, alloc)?,
            len: 0,
        })
    }

    /// Creates a vector of `len` default-constructed elements using `alloc`.
    pub fn from_default_in(len: usize, alloc: A) -> Result<Self, TensileVecError>
    where
        T: Default,
    {
        let mut vec = Self::with_capacity_in(len, alloc)?;

        // SAFETY (PRECONDITIONS ARE MET): fresh buffer has exactly len raw slots
        unsafe { vec.buf.construct_with(0, len, T::default) };
        vec.len = len;

        Ok(vec)
    }

    /// Creates a vector of `len` copies of `value` using `alloc`.
    pub fn from_elem_in(len: usize, value: T, alloc: A) -> Result<Self, TensileVecError>
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity_in(len, alloc)?;

        // SAFETY (PRECONDITIONS ARE MET): fresh buffer has exactly len raw slots
        unsafe { vec.buf.construct_fill(0, len, value) };
        vec.len = len;

        Ok(vec)
    }

    /// Creates a vector holding clones of `src` using `alloc`.
    pub fn from_slice_in(src: &[T], alloc: A) -> Result<Self, TensileVecError>
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity_in(src.len(), alloc)?;

        // SAFETY (PRECONDITIONS ARE MET): fresh buffer has exactly src.len() raw slots
        unsafe { vec.buf.construct_range(0, src) };
        vec.len = src.len();

        Ok(vec)
    }

    /// Creates a vector from every item of `iter` using `alloc`.
    ///
    /// Storage for the iterator's lower size bound is reserved up front when
    /// the allocator grants it. The bound is only a hint: if that reservation
    /// fails, the vector grows item by item instead, and only a failure while
    /// storing an actual item is reported.
    pub fn try_from_iter_in<I>(iter: I, alloc: A) -> Result<Self, TensileVecError>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut vec = Self::new_in(alloc);

        // A refused reservation leaves the vector empty and untouched.
        let _ = vec.reserve(lower);

        for item in iter {
            vec.push(item)?;
        }

        Ok(vec)
    }

    /// Returns a deep copy with its own storage of capacity `len()`.
    pub fn try_clone(&self) -> Result<Self, TensileVecError>
    where
        T: Clone,
        A: Clone,
    {
        Self::from_slice_in(self.as_slice(), self.allocator().clone())
    }

    /// Moves the contents out, leaving `self` empty with no storage.
    pub fn take(&mut self) -> Self
    where
        A: Clone,
    {
        let alloc = self.allocator().clone();
        mem::replace(self, Self::new_in(alloc))
    }

    /// Number of live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no live elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the current storage. Zero-sized element types
    /// report a logical capacity without owning memory.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the allocator.
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// Pointer to the first slot, or `None` when there is no storage.
    ///
    /// `None` if and only if `capacity() == 0`.
    pub fn data(&self) -> Option<NonNull<T>> {
        (self.capacity() != 0).then(|| self.buf.non_null())
    }

    /// Raw pointer to the first slot. Dangling when there is no storage.
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Mutable raw pointer to the first slot. Dangling when there is no storage.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }

    /// Borrows the live elements.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY (PRECONDITIONS ARE MET): slots 0..len are live and the pointer is non-null and aligned
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// Mutably borrows the live elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY (PRECONDITIONS ARE MET): slots 0..len are live and borrowed exclusively
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Checked access.
    ///
    /// # Errors
    ///
    /// [`TensileVecError::OutOfRange`] when `index >= len()`, whatever the
    /// capacity.
    pub fn at(&self, index: usize) -> Result<&T, TensileVecError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(TensileVecError::OutOfRange { index, len })
    }

    /// Checked mutable access. See [`TensileVec::at`].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, TensileVecError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(TensileVecError::OutOfRange { index, len })
    }

    /// First element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(first) => first,
            None => panic!("front() called on an empty TensileVec"),
        }
    }

    /// Mutable first element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(first) => first,
            None => panic!("front_mut() called on an empty TensileVec"),
        }
    }

    /// Last live element, at index `len() - 1`.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(last) => last,
            None => panic!("back() called on an empty TensileVec"),
        }
    }

    /// Mutable last live element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(last) => last,
            None => panic!("back_mut() called on an empty TensileVec"),
        }
    }

    // =========================================================================
    // Capacity
    // =========================================================================

    /// Ensures `capacity() >= capacity`, growing to exactly `capacity`.
    ///
    /// Never shrinks. Elements keep their order and values.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), TensileVecError> {
        if capacity <= self.capacity() {
            return Ok(());
        }

        self.reallocate(capacity)
    }

    /// Reallocates so that `capacity() == len()`.
    ///
    /// A vector emptied this way releases its storage and `data()` becomes
    /// `None`.
    pub fn shrink_to_fit(&mut self) -> Result<(), TensileVecError> {
        if self.capacity() == self.len {
            return Ok(());
        }

        self.reallocate(self.len)
    }

    /// Resizes to `len`, filling new slots with copies of `value`.
    ///
    /// Shrinking destroys the excess elements and keeps the capacity.
    /// Growing always reallocates to `max(len, 2 * capacity)`, even when the
    /// current capacity would already hold `len` elements. The new storage
    /// is obtained first, so on error the vector is unchanged.
    pub fn resize(&mut self, len: usize, value: T) -> Result<(), TensileVecError>
    where
        T: Clone,
    {
        if len <= self.len {
            self.truncate(len);
            return Ok(());
        }

        self.grow_for_resize(len)?;

        // SAFETY (PRECONDITIONS ARE MET): capacity >= len and slots self.len..len are raw
        unsafe { self.buf.construct_fill(self.len, len - self.len, value) };
        self.len = len;

        self.debug_check_invariants();
        Ok(())
    }

    /// Resizes to `len`, default-constructing new elements.
    pub fn resize_default(&mut self, len: usize) -> Result<(), TensileVecError>
    where
        T: Default,
    {
        self.resize_with(len, T::default)
    }

    /// Resizes to `len`, filling new slots with values produced by `f`.
    ///
    /// Same growth rule as [`TensileVec::resize`]. If `f` panics, the values
    /// produced so far are destroyed and `len()` is unchanged.
    pub fn resize_with<F>(&mut self, len: usize, f: F) -> Result<(), TensileVecError>
    where
        F: FnMut() -> T,
    {
        if len <= self.len {
            self.truncate(len);
            return Ok(());
        }

        self.grow_for_resize(len)?;

        // SAFETY (PRECONDITIONS ARE MET): capacity >= len and slots self.len..len are raw
        unsafe { self.buf.construct_with(self.len, len - self.len, f) };
        self.len = len;

        self.debug_check_invariants();
        Ok(())
    }

    /// Destroys the elements at `len..`, keeping the capacity. No-op when
    /// `len >= len()`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let excess = self.len - len;
        self.len = len;

        // SAFETY (PRECONDITIONS ARE MET): slots len..len + excess were live and are no longer counted
        unsafe { self.buf.destroy_range(len, excess) };
    }

    /// Destroys every element, keeping the capacity.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    // =========================================================================
    // Back
    // =========================================================================

    /// Appends `value`, growing to `max(1, 2 * capacity)` when full.
    ///
    /// On error `value` is dropped and the vector is unchanged.
    pub fn push(&mut self, value: T) -> Result<(), TensileVecError> {
        self.grow_for_push()?;

        // SAFETY (PRECONDITIONS ARE MET): len < capacity and slot len is raw
        unsafe { self.buf.construct(self.len, value) };
        self.len += 1;

        Ok(())
    }

    /// Constructs an element at the back from `f` and returns it.
    ///
    /// Capacity is secured before `f` runs.
    pub fn emplace_back<F>(&mut self, f: F) -> Result<&mut T, TensileVecError>
    where
        F: FnOnce() -> T,
    {
        self.grow_for_push()?;

        let index = self.len;
        // SAFETY (PRECONDITIONS ARE MET): index < capacity and slot index is raw
        unsafe { self.buf.construct(index, f()) };
        self.len += 1;

        // SAFETY (PRECONDITIONS ARE MET): slot index was just constructed
        Ok(unsafe { &mut *self.buf.slot(index) })
    }

    /// Destroys the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn pop_back(&mut self) {
        assert!(!self.is_empty(), "pop_back() called on an empty TensileVec");

        self.len -= 1;

        // SAFETY (PRECONDITIONS ARE MET): slot len was live and is no longer counted
        unsafe { self.buf.destroy_range(self.len, 1) };
    }

    /// Moves the last element out, or returns `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.len -= 1;

        // SAFETY (PRECONDITIONS ARE MET): slot len was live and is no longer counted
        Some(unsafe { ptr::read(self.buf.slot(self.len)) })
    }

    /// Appends clones of `src`.
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), TensileVecError>
    where
        T: Clone,
    {
        self.insert_slice(self.len, src).map(|_| ())
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// Returns the position of the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, TensileVecError> {
        let gap = self.open_gap(index, 1)?;

        // SAFETY (PRECONDITIONS ARE MET): slot index is the raw gap
        unsafe { gap.vec.buf.construct(index, value) };
        gap.close(1);

        Ok(index)
    }

    /// Inserts `count` copies of `value` at `index`.
    ///
    /// Returns the position of the first inserted element, or `index` when
    /// `count == 0`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[track_caller]
    pub fn insert_n(
        &mut self,
        index: usize,
        count: usize,
        value: T,
    ) -> Result<usize, TensileVecError>
    where
        T: Clone,
    {
        let gap = self.open_gap(index, count)?;

        // SAFETY (PRECONDITIONS ARE MET): slots index..index + count are the raw gap
        unsafe { gap.vec.buf.construct_fill(index, count, value) };
        gap.close(count);

        Ok(index)
    }

    /// Inserts clones of `src` at `index`, in order.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[track_caller]
    pub fn insert_slice(&mut self, index: usize, src: &[T]) -> Result<usize, TensileVecError>
    where
        T: Clone,
    {
        let gap = self.open_gap(index, src.len())?;

        // SAFETY (PRECONDITIONS ARE MET): slots index..index + src.len() are the raw gap
        unsafe { gap.vec.buf.construct_range(index, src) };
        gap.close(src.len());

        Ok(index)
    }

    /// Inserts every item of `iter` at `index`, in order.
    ///
    /// The gap is sized from `ExactSizeIterator::len`. If the iterator yields
    /// fewer items, only those are inserted. If it would yield more, it is
    /// never advanced past `len` items and the remainder stays in it.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[track_caller]
    pub fn insert_iter<I>(&mut self, index: usize, iter: I) -> Result<usize, TensileVecError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        let count = iter.len();
        let gap = self.open_gap(index, count)?;

        // SAFETY (PRECONDITIONS ARE MET): slots index..index + count are the raw gap
        let filled = unsafe { gap.vec.buf.construct_iter(index, count, iter) };
        gap.close(filled);

        Ok(index)
    }

    /// Constructs an element from `f` directly in slot `index`, shifting
    /// later elements right, and returns it.
    ///
    /// Capacity is secured and the gap opened before `f` runs. If `f`
    /// panics the shifted elements move back.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[track_caller]
    pub fn emplace<F>(&mut self, index: usize, f: F) -> Result<&mut T, TensileVecError>
    where
        F: FnOnce() -> T,
    {
        let gap = self.open_gap(index, 1)?;

        // SAFETY (PRECONDITIONS ARE MET): slot index is the raw gap
        unsafe { gap.vec.buf.construct(index, f()) };
        gap.close(1);

        // SAFETY (PRECONDITIONS ARE MET): slot index was just constructed
        Ok(unsafe { &mut *self.buf.slot(index) })
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Destroys the element at `index`, shifting later elements left.
    ///
    /// Returns the index of the element that followed the erased one, which
    /// equals the new `len()` when the last element was erased.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(
            index < self.len,
            "erase index (is {index}) should be < len (is {})",
            self.len
        );

        self.erase_range(index..index + 1)
    }

    /// Destroys the elements in `range`, shifting later elements left.
    ///
    /// Returns the start of the range. An empty range changes nothing.
    /// Capacity is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the range is decreasing or extends past `len()`.
    #[track_caller]
    pub fn erase_range<R>(&mut self, range: R) -> usize
    where
        R: RangeBounds<usize>,
    {
        let Range { start, end } = checked_range(range, self.len);
        let tail = self.len - end;

        self.len = start;

        // SAFETY (PRECONDITIONS ARE MET): start..end are live, the tail end..end + tail moves into place
        unsafe {
            self.buf.destroy_range(start, end - start);
            let base = self.buf.ptr();
            ptr::copy(base.add(end), base.add(start), tail);
        }

        self.len = start + tail;
        start
    }

    /// Moves the element at `index` out, shifting later elements left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "removal index (is {index}) should be < len (is {})",
            self.len
        );

        let tail = self.len - index - 1;

        // SAFETY (PRECONDITIONS ARE MET): slot index is live and the tail follows it
        unsafe {
            let base = self.buf.ptr();
            let value = ptr::read(base.add(index));
            ptr::copy(base.add(index + 1), base.add(index), tail);
            self.len -= 1;
            value
        }
    }

    // =========================================================================
    // Assignment
    // =========================================================================

    /// Replaces the contents with clones of `src`.
    ///
    /// Reallocates to exactly `src.len()` only when it exceeds the capacity.
    /// Old elements are destroyed before the new ones are constructed.
    pub fn assign_slice(&mut self, src: &[T]) -> Result<(), TensileVecError>
    where
        T: Clone,
    {
        self.prepare_assign(src.len())?;

        // SAFETY (PRECONDITIONS ARE MET): vector is empty with capacity >= src.len()
        unsafe { self.buf.construct_range(0, src) };
        self.len = src.len();

        Ok(())
    }

    /// Replaces the contents with `count` copies of `value`.
    pub fn assign_n(&mut self, count: usize, value: T) -> Result<(), TensileVecError>
    where
        T: Clone,
    {
        self.prepare_assign(count)?;

        // SAFETY (PRECONDITIONS ARE MET): vector is empty with capacity >= count
        unsafe { self.buf.construct_fill(0, count, value) };
        self.len = count;

        Ok(())
    }

    /// Replaces the contents with the items of `iter`.
    ///
    /// Exactly as many items as `ExactSizeIterator::len` reports are taken.
    /// A shorter iterator leaves only the yielded items. A longer one is
    /// never advanced past that count.
    pub fn assign_iter<I>(&mut self, iter: I) -> Result<(), TensileVecError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        let count = iter.len();

        self.prepare_assign(count)?;

        // SAFETY (PRECONDITIONS ARE MET): vector is empty with capacity >= count
        self.len = unsafe { self.buf.construct_iter(0, count, iter) };

        Ok(())
    }

    /// Exchanges contents, capacity and allocator with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Gives up ownership of the storage and its live element count.
    pub(crate) fn into_raw_parts(self) -> (RawBuf<T, A>, usize) {
        let this = ManuallyDrop::new(self);

        // SAFETY (PRECONDITIONS ARE MET): `this` is never dropped, so the buffer is moved out exactly once
        let buf = unsafe { ptr::read(&this.buf) };

        (buf, this.len)
    }

    fn reallocate(&mut self, new_capacity: usize) -> Result<(), TensileVecError> {
        // SAFETY (PRECONDITIONS ARE MET): slots 0..len are live and len <= capacity
        self.len = unsafe { self.buf.reallocate(self.len, new_capacity) }?;

        self.debug_check_invariants();
        Ok(())
    }

    /// Grows to `max(2 * capacity, required, 1)` when `required` exceeds the
    /// capacity.
    fn grow_amortized(&mut self, required: usize) -> Result<(), TensileVecError> {
        if required <= self.capacity() {
            return Ok(());
        }

        let doubled = self.capacity().saturating_mul(GROWTH_FACTOR);
        let new_capacity = cmp::max(cmp::max(doubled, required), MIN_NON_ZERO_CAP);

        self.reallocate(new_capacity)
    }

    /// Reallocates to `max(len, 2 * capacity)`. Callers only reach this when
    /// `len` exceeds the current length.
    fn grow_for_resize(&mut self, len: usize) -> Result<(), TensileVecError> {
        let doubled = self.capacity().saturating_mul(GROWTH_FACTOR);

        self.reallocate(cmp::max(len, doubled))
    }

    fn grow_for_push(&mut self) -> Result<(), TensileVecError> {
        let required = self.required(1)?;
        self.grow_amortized(required)
    }

    fn required(&self, additional: usize) -> Result<usize, TensileVecError> {
        self.len
            .checked_add(additional)
            .ok_or(TensileVecError::Alloc(AllocError::CapacityOverflow))
    }

    /// Secures capacity for `count` more elements, then moves `index..len`
    /// right by `count` slots. The returned gap must be closed.
    #[track_caller]
    fn open_gap(&mut self, index: usize, count: usize) -> Result<Gap<'_, T, A>, TensileVecError> {
        assert!(
            index <= self.len,
            "insertion index (is {index}) should be <= len (is {})",
            self.len
        );

        let required = self.required(count)?;
        self.grow_amortized(required)?;

        let tail = self.len - index;

        // SAFETY (PRECONDITIONS ARE MET): capacity >= len + count, so the shifted tail stays in bounds
        unsafe {
            let base = self.buf.ptr();
            ptr::copy(base.add(index), base.add(index + count), tail);
        }
        self.len = index;

        Ok(Gap {
            vec: self,
            index,
            width: count,
            tail,
        })
    }

    /// Empties the vector and makes room for exactly `len` elements if the
    /// capacity is short. The new storage is obtained before anything is
    /// destroyed.
    fn prepare_assign(&mut self, len: usize) -> Result<(), TensileVecError> {
        if len <= self.capacity() {
            self.clear();
            return Ok(());
        }

        let fresh = self.buf.allocate_slots(len)?;
        self.clear();

        // SAFETY (PRECONDITIONS ARE MET): fresh comes from allocate_slots(len) and no element is live
        unsafe { self.buf.replace_storage(fresh, len) };

        self.debug_check_invariants();
        Ok(())
    }

    #[inline(always)]
    fn debug_check_invariants(&self) {
        debug_assert!(
            self.len <= self.capacity(),
            "TensileVec: len {} exceeds capacity {}",
            self.len,
            self.capacity()
        );
        debug_assert!(
            self.capacity() != 0 || self.len == 0,
            "TensileVec: live elements without storage"
        );
    }
}

impl<T, A: Allocator> Drop for TensileVec<T, A> {
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): slots 0..len are live; RawBuf releases the storage afterwards
        unsafe { self.buf.destroy_range(0, self.len) }
    }
}

/// Tail displaced by an insertion.
///
/// Elements `index..index + tail` of the original vector sit at
/// `index + width..`. Closing (or dropping, on unwind) moves them back to
/// directly follow however many gap slots were filled.
struct Gap<'a, T, A: Allocator> {
    vec: &'a mut TensileVec<T, A>,
    index: usize,
    width: usize,
    tail: usize,
}

impl<T, A: Allocator> Gap<'_, T, A> {
    fn close(self, filled: usize) {
        let mut this = ManuallyDrop::new(self);

        // SAFETY (PRECONDITIONS ARE MET): the caller constructed exactly `filled` gap slots
        unsafe { this.settle(filled) };
    }

    /// # Safety
    ///
    /// Slots `index..index + filled` hold live elements, `filled <= width`.
    unsafe fn settle(&mut self, filled: usize) {
        debug_assert!(filled <= self.width);

        // SAFETY (PRECONDITIONS ARE MET): moves the tail left, never past the filled prefix
        unsafe {
            let base = self.vec.buf.ptr();
            ptr::copy(
                base.add(self.index + self.width),
                base.add(self.index + filled),
                self.tail,
            );
        }

        self.vec.len = self.index + filled + self.tail;
        self.vec.debug_check_invariants();
    }
}

impl<T, A: Allocator> Drop for Gap<'_, T, A> {
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): unwinding constructors leave no gap slot live
        unsafe { self.settle(0) };
    }
}

#[track_caller]
fn checked_range<R>(range: R, len: usize) -> Range<usize>
where
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start
            .checked_add(1)
            .unwrap_or_else(|| panic!("range start index overflows usize")),
        Bound::Unbounded => 0,
    };

    let end = match range.end_bound() {
        Bound::Included(&end) => end
            .checked_add(1)
            .unwrap_or_else(|| panic!("range end index overflows usize")),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    assert!(
        start <= end,
        "range start (is {start}) should be <= range end (is {end})"
    );
    assert!(end <= len, "range end (is {end}) should be <= len (is {len})");

    start..end
}
