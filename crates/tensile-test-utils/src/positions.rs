// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::ops::{Range, RangeInclusive};

/// Every valid insertion position for a sequence of `len` elements, `0..=len`.
pub fn index_positions(len: usize) -> RangeInclusive<usize> {
    0..=len
}

/// Every sub-range `start..end` with `start <= end <= len`, including empty ones.
///
/// # Example
///
/// ```rust
/// use tensile_test_utils::index_ranges;
///
/// assert_eq!(index_ranges(2), vec![0..0, 0..1, 0..2, 1..1, 1..2, 2..2]);
/// ```
pub fn index_ranges(len: usize) -> Vec<Range<usize>> {
    let mut ranges = Vec::with_capacity((len + 1) * (len + 2) / 2);

    for start in 0..=len {
        for end in start..=len {
            ranges.push(start..end);
        }
    }

    ranges
}
