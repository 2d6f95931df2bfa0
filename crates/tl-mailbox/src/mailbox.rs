//! The `Mailbox<T>` primitive.
//!
//! # Synchronisation
//!
//! One `Mutex<Option<T>>` guards the slot and one `Condvar` parks receivers.
//! Every slot mutation runs under the lock; `send` notifies after unlocking:
//!
//! - `send`: lock → overwrite slot → unlock → `notify_one`.
//! - `receive`: lock → wait until the slot is full → `take()` → unlock.
//!
//! Receivers race for the slot.  A receiver that is notified but loses the
//! race to another thread finds the slot empty and goes back to sleep, so
//! with N waiters and one send exactly one waiter returns.
//!
//! No user code ever runs while the lock is held, so the mutex cannot be
//! poisoned by this module.  Poisoned guards are recovered, never
//! propagated.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::trace;

/// Single-slot, last-write-wins blocking mailbox.
///
/// Share it between threads by reference (`&Mailbox<T>` inside an `Arc` or
/// a scoped thread); all methods take `&self`.
pub struct Mailbox<T> {
    slot: Mutex<Option<T>>,
    cond: Condvar,
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Mailbox<T> {
    /// Create an empty mailbox.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            cond: Condvar::new(),
        }
    }

    /// Store `value` as the pending value, discarding any value that has not
    /// been received yet, and wake one blocked receiver.
    ///
    /// Never blocks beyond the short critical section and never fails.
    pub fn send(&self, value: T) {
        {
            let mut slot = self.lock();
            if slot.replace(value).is_some() {
                trace!("mailbox send overwrote an unconsumed value");
            }
        }
        self.cond.notify_one();
    }

    /// Block until a value is pending, then remove and return it.
    ///
    /// Blocks indefinitely if nothing is ever sent.
    pub fn receive(&self) -> T {
        let mut slot = self.lock();
        loop {
            if let Some(value) = slot.take() {
                return value;
            }
            // Spurious wakeups and lost races both land here.
            slot = self.cond.wait(slot).unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Like [`receive`][Self::receive] but gives up after `timeout`.
    ///
    /// Returns `None` if no value arrived in time.
    pub fn receive_timeout(&self, timeout: Duration) -> Option<T> {
        let guard = self.lock();
        let (mut slot, _timed_out) = self
            .cond
            .wait_timeout_while(guard, timeout, |slot| slot.is_none())
            .unwrap_or_else(PoisonError::into_inner);
        slot.take()
    }

    /// Take the pending value if there is one, without blocking.
    pub fn try_receive(&self) -> Option<T> {
        self.lock().take()
    }

    /// `true` if a value is waiting to be received.
    pub fn is_pending(&self) -> bool {
        self.lock().is_some()
    }

    #[inline]
    fn lock(&self) -> MutexGuard<'_, Option<T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
