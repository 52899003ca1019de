// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for tensile-vec.

use tensile_alloc::AllocError;
use thiserror::Error;

/// Error type for `TensileVec` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum TensileVecError {
    /// The allocator could not satisfy a capacity change.
    ///
    /// The container is left exactly as it was before the call.
    #[error("allocation failed: {0}")]
    Alloc(#[from] AllocError),

    /// A checked access used an index outside `0..len`.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the container at the time of the access.
        len: usize,
    },
}

/// Panics with an allocation error.
///
/// Used by the trait impls that cannot return a `Result` (`Clone`,
/// `FromIterator`, `Extend`, `From`) and by the `tensile_vec!` macro.
#[doc(hidden)]
#[cold]
#[inline(never)]
#[track_caller]
pub fn handle_alloc_failure(error: TensileVecError) -> ! {
    panic!("TensileVec: {error}");
}
