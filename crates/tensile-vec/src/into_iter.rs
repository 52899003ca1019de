// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Owning iterator over a `TensileVec`.

use core::fmt;
use core::iter::FusedIterator;
use core::ptr;
use core::slice;

use tensile_alloc::{Allocator, Global};

use crate::raw::RawBuf;
use crate::vec::TensileVec;

/// Iterator that moves elements out of a [`TensileVec`].
///
/// Elements not yielded are destroyed through the allocator when the
/// iterator is dropped, then the storage is released.
pub struct IntoIter<T, A: Allocator = Global> {
    buf: RawBuf<T, A>,
    start: usize,
    end: usize,
}

impl<T, A: Allocator> IntoIter<T, A> {
    /// Borrows the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY (PRECONDITIONS ARE MET): slots start..end are live
        unsafe { slice::from_raw_parts(self.buf.ptr().add(self.start), self.end - self.start) }
    }
}

impl<T, A: Allocator> IntoIterator for TensileVec<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> Self::IntoIter {
        let (buf, len) = self.into_raw_parts();

        IntoIter {
            buf,
            start: 0,
            end: len,
        }
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        let index = self.start;
        self.start += 1;

        // SAFETY (PRECONDITIONS ARE MET): slot index was live and is no longer in start..end
        Some(unsafe { ptr::read(self.buf.slot(index)) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;

        // SAFETY (PRECONDITIONS ARE MET): slot end was live and is no longer in start..end
        Some(unsafe { ptr::read(self.buf.slot(self.end)) })
    }
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): slots start..end are the only live ones left
        unsafe { self.buf.destroy_range(self.start, self.end - self.start) }
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a TensileVec<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut TensileVec<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
