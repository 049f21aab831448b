//! Sealed reference-count backends.
//!
//! A backend decides how the shared buffers of this crate count their
//! references:
//!
//! - [`Local`], a plain cell, the default — cheap, and confined to one
//!   thread by the compiler,
//! - [`Atomic`], an atomic counter — shared handles may cross threads.
//!
//! Neither backend synchronizes the *data*: concurrent mutation through a
//! single handle still requires external locking around the whole handle.

use core::cell::Cell;
use core::sync::atomic::{fence, AtomicUsize, Ordering};

mod sealed {
    pub trait Sealed {}
}

/// Basic reference counter interface.
///
/// Counters start at one and are updated through shared references.
pub trait Count: sealed::Sealed + Sized {
    /// Creates a new counter that starts at one.
    fn one() -> Self;

    /// Increments the counter.
    ///
    /// Returns `true` iff the counter overflowed, in which case the count is
    /// left unchanged and the caller must not create a new handle.
    fn incr(&self) -> bool;

    /// Decrements the counter.
    ///
    /// Returns `true` iff the counter reached zero, that is, the caller held
    /// the last reference.
    fn decr(&self) -> bool;

    /// Returns the current value of the counter.
    fn get(&self) -> usize;
}

/// Marker trait for types usable as a reference-count backend.
///
/// This trait is sealed: only [`Local`] and [`Atomic`] implement it.
pub trait Backend: Count + 'static {}

/// Local (not thread-safe) reference counter.
///
/// The cheapest backend. Buffers counted by `Local` must keep all their
/// handles on one thread; the compiler enforces this because `Local` is not
/// `Sync`, which keeps every `Local`-backed type `!Send` and `!Sync`.
pub struct Local(Cell<usize>);

/// Atomic (thread-safe) reference counter.
///
/// Handles to a buffer counted by `Atomic` may be cloned and dropped from
/// several threads at once.
pub struct Atomic(AtomicUsize);

impl sealed::Sealed for Local {}
impl sealed::Sealed for Atomic {}

impl Backend for Local {}
impl Backend for Atomic {}

impl Count for Local {
    #[inline]
    fn one() -> Self {
        Self(Cell::new(1))
    }

    #[inline]
    fn incr(&self) -> bool {
        let old = self.0.get();
        if old == usize::MAX {
            return true;
        }
        self.0.set(old + 1);
        false
    }

    #[inline]
    fn decr(&self) -> bool {
        let new_value = self.0.get() - 1;
        self.0.set(new_value);
        new_value == 0
    }

    #[inline]
    fn get(&self) -> usize {
        self.0.get()
    }
}

impl Count for Atomic {
    #[inline]
    fn one() -> Self {
        Self(AtomicUsize::new(1))
    }

    #[inline]
    fn incr(&self) -> bool {
        let mut old = self.0.load(Ordering::Relaxed);
        while old != usize::MAX {
            match self
                .0
                .compare_exchange_weak(old, old + 1, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return false,
                Err(actual) => old = actual,
            }
        }
        true
    }

    #[inline]
    fn decr(&self) -> bool {
        let old_value = self.0.fetch_sub(1, Ordering::Release);
        if old_value == 1 {
            // synchronize with all previous decrements before the value is freed
            fence(Ordering::Acquire);
            true
        } else {
            false
        }
    }

    #[inline]
    fn get(&self) -> usize {
        self.0.load(Ordering::Acquire)
    }
}
