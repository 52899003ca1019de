// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! FailingAllocator - Injects allocation failures for testing error paths.

use alloc::sync::Arc;
use core::alloc::Layout;
use core::ptr::NonNull;
use core::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

use crate::error::AllocError;
use crate::global::Global;
use crate::traits::Allocator;

/// Failure behaviour for a [`FailingAllocator`].
///
/// The behaviour is sticky - once set, it remains active until changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AllocBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every `allocate()` call fails with `AllocError::Exhausted`.
    FailAtAllocate,
    /// The next `n` `allocate()` calls succeed, every later one fails.
    FailAfter(usize),
}

const MODE_NONE: u8 = 0;
const MODE_FAIL: u8 = 1;
const MODE_FAIL_AFTER: u8 = 2;

#[derive(Debug, Default)]
struct State {
    mode: AtomicU8,
    remaining: AtomicUsize,
    refused: AtomicUsize,
}

impl State {
    fn should_fail(&self) -> bool {
        match self.mode.load(Ordering::Acquire) {
            MODE_FAIL => true,
            MODE_FAIL_AFTER => self
                .remaining
                .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
                .is_err(),
            _ => false,
        }
    }
}

/// Allocator wrapper that refuses requests according to an [`AllocBehaviour`].
///
/// Clones share their behaviour, so a test can hand one clone to a container
/// and keep another to flip the behaviour mid-test.
///
/// # Example
///
/// ```rust
/// use core::alloc::Layout;
/// use tensile_alloc::{AllocBehaviour, AllocError, Allocator, FailingAllocator};
///
/// let allocator = FailingAllocator::new();
/// let switch = allocator.clone();
///
/// switch.change_behaviour(AllocBehaviour::FailAtAllocate);
///
/// let layout = Layout::new::<u64>();
/// assert_eq!(allocator.allocate(layout), Err(AllocError::exhausted(layout)));
/// assert_eq!(switch.refused(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FailingAllocator<A = Global> {
    inner: A,
    state: Arc<State>,
}

impl FailingAllocator<Global> {
    /// Creates a failing allocator over the global heap with [`AllocBehaviour::None`].
    pub fn new() -> Self {
        Self::wrap(Global)
    }
}

impl<A> FailingAllocator<A> {
    /// Creates a failing allocator over `inner` with [`AllocBehaviour::None`].
    pub fn wrap(inner: A) -> Self {
        Self {
            inner,
            state: Arc::new(State::default()),
        }
    }

    /// Changes the failure behaviour for this allocator and all its clones.
    pub fn change_behaviour(&self, behaviour: AllocBehaviour) {
        match behaviour {
            AllocBehaviour::None => self.state.mode.store(MODE_NONE, Ordering::Release),
            AllocBehaviour::FailAtAllocate => self.state.mode.store(MODE_FAIL, Ordering::Release),
            AllocBehaviour::FailAfter(n) => {
                self.state.remaining.store(n, Ordering::Release);
                self.state.mode.store(MODE_FAIL_AFTER, Ordering::Release);
            }
        }
    }

    /// Number of requests refused so far.
    pub fn refused(&self) -> usize {
        self.state.refused.load(Ordering::Acquire)
    }
}

unsafe impl<A> Allocator for FailingAllocator<A>
where
    A: Allocator,
{
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if self.state.should_fail() {
            self.state.refused.fetch_add(1, Ordering::AcqRel);
            return Err(AllocError::exhausted(layout));
        }

        self.inner.allocate(layout)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY (PRECONDITIONS ARE MET): forwarded from caller
        unsafe { self.inner.deallocate(ptr, layout) }
    }
}
