// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;

use crate::error::AllocError;

/// Layout of a contiguous array of `capacity` values of `T`.
///
/// # Errors
///
/// Returns [`AllocError::CapacityOverflow`] if the total size in bytes
/// would exceed `isize::MAX`.
///
/// # Example
///
/// ```rust
/// use tensile_alloc::{AllocError, array_layout};
///
/// let layout = array_layout::<u32>(8).expect("Failed to array_layout(..)");
/// assert_eq!(layout.size(), 32);
/// assert_eq!(layout.align(), 4);
///
/// assert_eq!(array_layout::<u64>(usize::MAX), Err(AllocError::CapacityOverflow));
/// ```
#[inline]
pub fn array_layout<T>(capacity: usize) -> Result<Layout, AllocError> {
    Layout::array::<T>(capacity).map_err(|_| AllocError::CapacityOverflow)
}
