// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// `ExactSizeIterator` whose reported `len()` is fixed up front, whatever
/// the inner iterator actually yields.
///
/// Lets tests drive containers with iterators that over- or under-report
/// their length.
///
/// # Example
///
/// ```rust
/// use tensile_test_utils::MisreportedLen;
///
/// let iter = MisreportedLen::new(0..5, 2);
///
/// assert_eq!(iter.len(), 2);
/// assert_eq!(iter.count(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct MisreportedLen<I> {
    inner: I,
    reported: usize,
    yielded: usize,
}

impl<I: Iterator> MisreportedLen<I> {
    /// Wraps `inner`, reporting `reported` as its exact length.
    pub fn new(inner: I, reported: usize) -> Self {
        Self {
            inner,
            reported,
            yielded: 0,
        }
    }

    /// Number of items handed out so far.
    pub fn yielded(&self) -> usize {
        self.yielded
    }

    /// Returns the inner iterator, positioned after the yielded items.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Iterator> Iterator for MisreportedLen<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.inner.next()?;
        self.yielded += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.reported.saturating_sub(self.yielded);
        (remaining, Some(remaining))
    }
}

impl<I: Iterator> ExactSizeIterator for MisreportedLen<I> {}
