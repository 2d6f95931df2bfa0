//! Observer trait for watching the timer loop.

use std::time::Duration;

use tl_core::Phase;

/// One completed flip, as seen by the timer thread.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PhaseChange {
    /// The phase the signal has just switched to.
    pub phase: Phase,
    /// Cycle length drawn for the cycle that just ended.
    pub drawn: Duration,
    /// Wall time actually spent in the previous phase.  Always `>= drawn`.
    pub elapsed: Duration,
    /// Total flips so far, including this one.
    pub flips: u64,
}

/// Callbacks invoked by the timer loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Hooks run on the timer thread after
/// the new phase is published, so a slow hook delays the *next* flip but
/// never the current one.
///
/// # Example — flip logger
///
/// ```rust,ignore
/// struct FlipPrinter;
///
/// impl PhaseObserver for FlipPrinter {
///     fn on_flip(&mut self, change: &PhaseChange) {
///         println!("#{}: {} after {:?}", change.flips, change.phase, change.elapsed);
///     }
/// }
/// ```
pub trait PhaseObserver: Send + 'static {
    /// Called once when the timer thread starts, before the first cycle.
    fn on_start(&mut self, _initial: Phase) {}

    /// Called after every flip.
    fn on_flip(&mut self, _change: &PhaseChange) {}
}

/// A [`PhaseObserver`] that does nothing.
pub struct NoopObserver;

impl PhaseObserver for NoopObserver {}
