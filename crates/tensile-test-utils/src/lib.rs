// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for Tensile crates.
//!
//! - [`Tracked`] / [`LifecycleCounter`]: element type whose constructions,
//!   clones and drops are counted, to verify that containers destroy every
//!   element exactly once.
//! - [`CloneBreaker`]: element type whose `clone()` panics once a shared
//!   budget is exhausted, to exercise unwinding paths.
//! - [`index_positions`] / [`index_ranges`]: every insertion position and
//!   every sub-range of a sequence.
//! - [`MisreportedLen`]: iterator whose `ExactSizeIterator::len` is wrong on
//!   purpose.
//!
//! ## License
//!
//! GPL-3.0-only

mod breaker;
mod iter;
mod lifecycle;
mod positions;

pub use breaker::CloneBreaker;
pub use iter::MisreportedLen;
pub use lifecycle::{LifecycleCounter, Tracked};
pub use positions::{index_positions, index_ranges};
