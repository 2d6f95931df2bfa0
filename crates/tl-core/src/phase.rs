//! The two-state signal phase.
//!
//! `Phase` is deliberately closed: the mailbox coalesces values and
//! `wait_for_green` discards anything that isn't `Green`, which only
//! guarantees liveness while exactly two values alternate.  A third state
//! would let a waiter stall when the target is overwritten between sends.

use std::fmt;

/// The phase a signal is currently showing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Phase {
    /// Traffic must stop.  Every signal starts here.
    #[default]
    Red = 0,
    /// Traffic may proceed.
    Green = 1,
}

impl Phase {
    /// The phase that follows `self`.  There is no self-transition.
    #[inline]
    pub fn flip(self) -> Phase {
        match self {
            Phase::Red   => Phase::Green,
            Phase::Green => Phase::Red,
        }
    }

    #[inline]
    pub fn is_green(self) -> bool {
        matches!(self, Phase::Green)
    }

    /// Compact encoding used for atomic storage.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`as_u8`][Self::as_u8].  Any non-zero byte decodes as
    /// `Green`.
    #[inline]
    pub fn from_u8(raw: u8) -> Phase {
        if raw == 0 { Phase::Red } else { Phase::Green }
    }

    /// Human-readable label, useful for log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Red   => "red",
            Phase::Green => "green",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
