// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Contiguous growable array with allocator-driven element lifecycle.
//!
//! [`TensileVec`] stores its elements in one contiguous block obtained from
//! an [`Allocator`]. The block is split into a prefix of live elements and a
//! suffix of raw slots:
//!
//! ```text
//! ┌────┬────┬────┬────┬────┬────┐
//! │ e0 │ e1 │ e2 │ .. │ .. │ .. │
//! └────┴────┴────┴────┴────┴────┘
//!  <------ len ----->
//!  <---------- capacity -------->
//! ```
//!
//! Elements enter a slot only through `Allocator::construct` and leave it
//! only through `Allocator::destroy` or by being moved out, so an
//! instrumented allocator observes every lifecycle event.
//!
//! ## Guarantees
//!
//! - Allocation failures are returned as [`TensileVecError`], never aborts,
//!   and leave the container unchanged.
//! - Growth allocates the new block before touching the old one.
//! - A panicking `Clone`, `Default` or iterator leaves the container valid
//!   and leaks nothing.
//! - Checked access ([`TensileVec::at`]) validates against `len`, not
//!   `capacity`.
//!
//! ## Example
//!
//! ```rust
//! use tensile_vec::{TensileVec, TensileVecError, tensile_vec};
//!
//! fn example() -> Result<(), TensileVecError> {
//!     let mut vec: TensileVec<u32> = TensileVec::with_capacity(2)?;
//!
//!     vec.push(1)?;
//!     vec.push(2)?;
//!     vec.push(3)?;
//!     assert_eq!(vec.capacity(), 4);
//!
//!     vec.insert_n(1, 2, 7)?;
//!     assert_eq!(vec, tensile_vec![1u32, 7, 7, 2, 3]);
//!
//!     vec.resize(2, 0)?;
//!     assert_eq!(vec.back(), &7);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Test Utilities
//!
//! Enable the `test-utils` feature to get the instrumented allocators from
//! `tensile-alloc` (`TrackingAllocator`, `FailingAllocator`).
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod impls;
mod into_iter;
mod macros;
mod raw;
mod vec;

pub use error::{TensileVecError, handle_alloc_failure};
pub use into_iter::IntoIter;
pub use vec::TensileVec;

pub use tensile_alloc::{AllocError, Allocator, Global};

#[cfg(any(test, feature = "test-utils"))]
pub use tensile_alloc::{AllocBehaviour, AllocStats, FailingAllocator, TrackingAllocator};
