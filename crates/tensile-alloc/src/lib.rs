// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Allocator capability for Tensile containers.
//!
//! Containers never talk to the global heap directly. They go through an
//! [`Allocator`], a small capability with four operations:
//!
//! - `allocate(layout)`: obtain raw, uninitialized storage
//! - `deallocate(ptr, layout)`: release storage obtained from `allocate`
//! - `construct(slot, value)`: write a value into a raw slot
//! - `destroy(slot)`: drop a live value in place, leaving the slot raw
//!
//! [`Global`] is the default implementation, backed by `alloc::alloc`.
//!
//! # Example
//!
//! ```rust
//! use core::alloc::Layout;
//! use tensile_alloc::{AllocError, Allocator, Global};
//!
//! fn example() -> Result<(), AllocError> {
//!     let layout = Layout::array::<u64>(4).map_err(|_| AllocError::CapacityOverflow)?;
//!     let ptr = Global.allocate(layout)?.cast::<u64>();
//!
//!     unsafe {
//!         Global.construct(ptr.as_ptr(), 42u64);
//!         assert_eq!(*ptr.as_ptr(), 42);
//!         Global.destroy(ptr.as_ptr());
//!         Global.deallocate(ptr.cast(), layout);
//!     }
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature to get instrumented allocators:
//!
//! ```toml
//! [dev-dependencies]
//! tensile-alloc = { version = "*", features = ["test-utils"] }
//! ```
//!
//! - `TrackingAllocator` counts live allocations and bytes, so tests can
//!   assert that every buffer was released.
//! - `FailingAllocator` refuses allocations according to a sticky
//!   `AllocBehaviour`, so tests can exercise allocation-failure paths.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod global;
mod layout;
mod traits;

#[cfg(any(test, feature = "test-utils"))]
mod failing;
#[cfg(any(test, feature = "test-utils"))]
mod tracking;

pub use error::AllocError;
pub use global::Global;
pub use layout::array_layout;
pub use traits::Allocator;

#[cfg(any(test, feature = "test-utils"))]
pub use failing::{AllocBehaviour, FailingAllocator};
#[cfg(any(test, feature = "test-utils"))]
pub use tracking::{AllocStats, TrackingAllocator};
