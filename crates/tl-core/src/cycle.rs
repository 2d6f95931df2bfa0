//! Signal cycle configuration.
//!
//! # Design
//!
//! A cycle is the time a signal holds one phase before flipping.  Each cycle
//! length is drawn independently and uniformly from
//! `[min_cycle_ms, max_cycle_ms]` (both inclusive), so the signal never runs
//! on a fixed period.
//!
//! The timer loop does not sleep for the whole cycle in one call.  It sleeps
//! in `poll_interval_ms` steps and compares elapsed wall time against the
//! drawn length, so the achieved cycle overshoots the drawn one by at most
//! one poll interval plus scheduler latency.

use std::time::Duration;

use crate::{TlError, TlResult};

/// Default lower cycle bound: 4 s.
pub const DEFAULT_MIN_CYCLE_MS: u64 = 4_000;

/// Default upper cycle bound: 6 s.
pub const DEFAULT_MAX_CYCLE_MS: u64 = 6_000;

/// Default timer poll step: 1 ms.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1;

/// Timing configuration for one signal.
///
/// Applications typically keep the defaults; tests shrink the bounds to tens
/// of milliseconds so a full red/green cycle fits in a unit test.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleConfig {
    /// Shortest cycle, inclusive.  Default: 4000.
    pub min_cycle_ms: u64,

    /// Longest cycle, inclusive.  Default: 6000.
    pub max_cycle_ms: u64,

    /// Sleep granularity of the timer loop.  Default: 1.
    pub poll_interval_ms: u64,

    /// RNG seed for cycle lengths.  `None` seeds from OS entropy; a fixed
    /// seed reproduces the same sequence of cycle lengths.
    pub seed: Option<u64>,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            min_cycle_ms:     DEFAULT_MIN_CYCLE_MS,
            max_cycle_ms:     DEFAULT_MAX_CYCLE_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            seed:             None,
        }
    }
}

impl CycleConfig {
    /// Check the bounds are usable.
    ///
    /// Rejects an empty range (`min > max`), a zero-length cycle, and a zero
    /// poll interval (which would turn the timer loop into a busy spin).
    pub fn validate(&self) -> TlResult<()> {
        if self.min_cycle_ms == 0 {
            return Err(TlError::Config("min_cycle_ms must be greater than zero".into()));
        }
        if self.min_cycle_ms > self.max_cycle_ms {
            return Err(TlError::Config(format!(
                "min_cycle_ms ({}) exceeds max_cycle_ms ({})",
                self.min_cycle_ms, self.max_cycle_ms,
            )));
        }
        if self.poll_interval_ms == 0 {
            return Err(TlError::Config("poll_interval_ms must be greater than zero".into()));
        }
        Ok(())
    }

    #[inline]
    pub fn min_cycle(&self) -> Duration {
        Duration::from_millis(self.min_cycle_ms)
    }

    #[inline]
    pub fn max_cycle(&self) -> Duration {
        Duration::from_millis(self.max_cycle_ms)
    }

    #[inline]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// `true` if `d` is a legal drawn cycle length.
    #[inline]
    pub fn contains(&self, d: Duration) -> bool {
        d >= self.min_cycle() && d <= self.max_cycle()
    }
}
