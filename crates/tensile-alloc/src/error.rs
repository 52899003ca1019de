// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for tensile-alloc.

use core::alloc::Layout;

use thiserror::Error;

/// Errors raised when an allocation request cannot be satisfied.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// The requested size in bytes does not fit in `isize::MAX`.
    #[error("capacity overflow: requested allocation exceeds isize::MAX bytes")]
    CapacityOverflow,

    /// The allocator could not provide memory for the request.
    #[error("allocator exhausted: could not obtain {size} bytes aligned to {align}")]
    Exhausted {
        /// Requested size in bytes.
        size: usize,
        /// Requested alignment in bytes.
        align: usize,
    },
}

impl AllocError {
    /// Builds an [`AllocError::Exhausted`] describing `layout`.
    pub fn exhausted(layout: Layout) -> Self {
        Self::Exhausted {
            size: layout.size(),
            align: layout.align(),
        }
    }
}
