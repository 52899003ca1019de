// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous containers with allocator-driven element lifecycle.
//!
//! Tensile is a `Vec`-like array whose elements are constructed and destroyed
//! through an explicit allocator capability, with fallible growth and checked
//! access validated against the live length.
//!
//! # Features
//!
//! - **Fallible growth**: every operation that may allocate returns a
//!   `Result`, and a failed allocation leaves the container untouched
//! - **Explicit lifecycle**: elements enter and leave storage only through
//!   `Allocator::construct` / `Allocator::destroy`
//! - **Panic safety**: a panicking `Clone` or iterator never leaks or
//!   double-drops
//! - **`no_std` compatible**: needs only `alloc`
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! tensile = "0.1.0-rc.1"
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use tensile::{TensileVec, tensile_vec};
//! use tensile::vec::TensileVecError;
//!
//! fn main() -> Result<(), TensileVecError> {
//!     let mut numbers = TensileVec::new();
//!
//!     for i in 0..10u32 {
//!         numbers.push(i)?;
//!     }
//!
//!     numbers.erase(3);
//!     numbers.insert(0, 99)?;
//!     assert_eq!(numbers.at(0)?, &99);
//!
//!     let words = tensile_vec!["tensile"; 2];
//!     assert_eq!(words.back(), &"tensile");
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! | Module     | Crate           | Contents                                   |
//! |------------|-----------------|--------------------------------------------|
//! | [`alloc`]  | `tensile-alloc` | `Allocator`, `Global`, `AllocError`        |
//! | [`vec`]    | `tensile-vec`   | `TensileVec`, `IntoIter`, `TensileVecError` |
//!
//! # Custom Allocators
//!
//! ```rust
//! use tensile::TensileVec;
//! use tensile::alloc::TrackingAllocator;
//!
//! let tracker = TrackingAllocator::new();
//!
//! {
//!     let mut vec = TensileVec::new_in(tracker.clone());
//!     vec.extend_from_slice(&[1u8, 2, 3]).expect("Failed to extend_from_slice(..)");
//! }
//!
//! assert!(tracker.is_balanced());
//! ```
//!
//! `TrackingAllocator` and `FailingAllocator` require the `test-utils`
//! feature.
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub use tensile_alloc as alloc;
pub use tensile_vec as vec;

pub use tensile_vec::{TensileVec, tensile_vec};
