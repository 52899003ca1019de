// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Standard trait impls for `TensileVec`.
//!
//! Impls that cannot return a `Result` panic on allocation failure.

use alloc::vec::Vec;
use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::slice::SliceIndex;

use tensile_alloc::{Allocator, Global};

use crate::error::handle_alloc_failure;
use crate::vec::TensileVec;

impl<T, A: Allocator> Deref for TensileVec<T, A> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> DerefMut for TensileVec<T, A> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Unchecked-style access. Panics when out of range.
impl<T, I: SliceIndex<[T]>, A: Allocator> Index<I> for TensileVec<T, A> {
    type Output = I::Output;

    #[track_caller]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>, A: Allocator> IndexMut<I> for TensileVec<T, A> {
    #[track_caller]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for TensileVec<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for TensileVec<T, A> {
    #[track_caller]
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|error| handle_alloc_failure(error))
    }

    /// Reuses the existing storage when it is large enough.
    #[track_caller]
    fn clone_from(&mut self, source: &Self) {
        if let Err(error) = self.assign_slice(source.as_slice()) {
            handle_alloc_failure(error);
        }
    }
}

impl<T, A: Allocator + Default> Default for TensileVec<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T, U, A1, A2> PartialEq<TensileVec<U, A2>> for TensileVec<T, A1>
where
    T: PartialEq<U>,
    A1: Allocator,
    A2: Allocator,
{
    fn eq(&self, other: &TensileVec<U, A2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U, A: Allocator> PartialEq<[U]> for TensileVec<T, A> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, A: Allocator> PartialEq<&[U]> for TensileVec<T, A> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, A: Allocator, const N: usize> PartialEq<[U; N]> for TensileVec<T, A> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U, A: Allocator> PartialEq<Vec<U>> for TensileVec<T, A> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: Allocator> Eq for TensileVec<T, A> {}

impl<T: PartialOrd, A: Allocator> PartialOrd for TensileVec<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, A: Allocator> Ord for TensileVec<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash, A: Allocator> Hash for TensileVec<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_slice(), state);
    }
}

impl<T, A: Allocator> AsRef<[T]> for TensileVec<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> AsMut<[T]> for TensileVec<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator> Borrow<[T]> for TensileVec<T, A> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> BorrowMut<[T]> for TensileVec<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> From<[T; N]> for TensileVec<T, Global> {
    #[track_caller]
    fn from(array: [T; N]) -> Self {
        let mut vec = Self::with_capacity(N).unwrap_or_else(|error| handle_alloc_failure(error));

        if let Err(error) = vec.assign_iter(array) {
            handle_alloc_failure(error);
        }

        vec
    }
}

impl<T: Clone> From<&[T]> for TensileVec<T, Global> {
    #[track_caller]
    fn from(src: &[T]) -> Self {
        Self::from_slice(src).unwrap_or_else(|error| handle_alloc_failure(error))
    }
}

impl<T> FromIterator<T> for TensileVec<T, Global> {
    #[track_caller]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::try_from_iter(iter).unwrap_or_else(|error| handle_alloc_failure(error))
    }
}

impl<T, A: Allocator> Extend<T> for TensileVec<T, A> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            if let Err(error) = self.push(item) {
                handle_alloc_failure(error);
            }
        }
    }
}

impl<'a, T: Copy + 'a, A: Allocator> Extend<&'a T> for TensileVec<T, A> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        <Self as Extend<T>>::extend(self, iter.into_iter().copied());
    }
}
