// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Creates a [`TensileVec`](crate::TensileVec) using the global allocator.
///
/// Mirrors `vec!`:
///
/// - `tensile_vec![]`: empty, no storage
/// - `tensile_vec![elem; n]`: `n` clones of `elem`
/// - `tensile_vec![a, b, c]`: the listed elements, in order
///
/// Panics if the allocation fails.
///
/// # Example
///
/// ```rust
/// use tensile_vec::tensile_vec;
///
/// let zeros = tensile_vec![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
///
/// let words = tensile_vec!["a", "b"];
/// assert_eq!(words.len(), 2);
/// ```
#[macro_export]
macro_rules! tensile_vec {
    () => {
        $crate::TensileVec::<_>::new()
    };
    ($elem:expr; $n:expr) => {
        match $crate::TensileVec::<_>::from_elem($n, $elem) {
            ::core::result::Result::Ok(vec) => vec,
            ::core::result::Result::Err(error) => $crate::handle_alloc_failure(error),
        }
    };
    ($($x:expr),+ $(,)?) => {
        <$crate::TensileVec<_> as ::core::convert::From<_>>::from([$($x),+])
    };
}
