//! The `PhaseController` handle and the state it shares with the timer
//! thread.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use tl_core::{CycleConfig, Phase, TlResult};
use tl_mailbox::Mailbox;
use tracing::{trace, warn};

use crate::{NoopObserver, PhaseControllerBuilder, PhaseObserver, timer};

/// Name given to the OS thread running the timer loop.
const TIMER_THREAD_NAME: &str = "tl-phase-timer";

// ── Shared state ──────────────────────────────────────────────────────────────

/// State reachable from both the controller handle and the timer thread.
pub(crate) struct Shared {
    /// Authoritative phase, stored as [`Phase::as_u8`].  Written only by the
    /// timer thread.
    phase: AtomicU8,
    /// Completed flips.  Written only by the timer thread.
    flips: AtomicU64,
    /// Set once by the first successful `simulate`.
    running: AtomicBool,
    /// Wake-up channel.  The last value sent always equals `phase` at the
    /// moment of the send.
    pub(crate) mailbox: Mailbox<Phase>,
    pub(crate) config: CycleConfig,
    /// Handed to the timer thread when it starts.
    observer: Mutex<Option<Box<dyn PhaseObserver>>>,
}

impl Shared {
    #[inline]
    pub(crate) fn phase(&self) -> Phase {
        Phase::from_u8(self.phase.load(Ordering::Acquire))
    }

    /// Flip the phase and publish it.  Returns the new phase and the flip
    /// count.  Must only be called from the timer thread.
    pub(crate) fn advance(&self) -> (Phase, u64) {
        let next = self.phase().flip();
        self.phase.store(next.as_u8(), Ordering::Release);
        let flips = self.flips.fetch_add(1, Ordering::AcqRel) + 1;
        self.mailbox.send(next);
        (next, flips)
    }

    pub(crate) fn take_observer(&self) -> Box<dyn PhaseObserver> {
        self.observer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .unwrap_or_else(|| Box::new(NoopObserver))
    }
}

// ── PhaseController ───────────────────────────────────────────────────────────

/// A red/green traffic signal driven by a background timer.
///
/// The controller is a cheap handle: clone it and pass the clone to any
/// thread that needs to wait for or read the phase.  All clones address the
/// same signal.
///
/// Create with [`PhaseController::new`] for the default 4–6 s cycle, or via
/// [`PhaseControllerBuilder`] for custom timing.
#[derive(Clone)]
pub struct PhaseController {
    shared: Arc<Shared>,
}

impl Default for PhaseController {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseController {
    /// An idle controller showing `Red`, with the default cycle bounds.
    pub fn new() -> Self {
        Self::from_parts(CycleConfig::default(), None)
    }

    pub fn builder() -> PhaseControllerBuilder {
        PhaseControllerBuilder::new()
    }

    /// `config` must already be validated.
    pub(crate) fn from_parts(
        config:   CycleConfig,
        observer: Option<Box<dyn PhaseObserver>>,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                phase:    AtomicU8::new(Phase::Red.as_u8()),
                flips:    AtomicU64::new(0),
                running:  AtomicBool::new(false),
                mailbox:  Mailbox::new(),
                config,
                observer: Mutex::new(observer),
            }),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Start the timer loop on its own thread and return immediately.
    ///
    /// Returns `Ok(true)` if this call started the timer and `Ok(false)` if
    /// it was already running; a repeated call never starts a second writer.
    /// The thread is detached and runs until the process exits.
    ///
    /// # Errors
    /// [`TlError::Spawn`][tl_core::TlError::Spawn] if the OS cannot create
    /// the thread.  The controller stays idle and `simulate` may be retried.
    pub fn simulate(&self) -> TlResult<bool> {
        if self.shared.running.swap(true, Ordering::AcqRel) {
            warn!("simulate called on a signal that is already running; ignoring");
            return Ok(false);
        }

        let shared = Arc::clone(&self.shared);
        let spawned = thread::Builder::new()
            .name(TIMER_THREAD_NAME.into())
            .spawn(move || timer::run(&shared));

        match spawned {
            Ok(_detached) => Ok(true),
            Err(e) => {
                self.shared.running.store(false, Ordering::Release);
                Err(e.into())
            }
        }
    }

    /// `true` once [`simulate`][Self::simulate] has started the timer.
    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::Acquire)
    }

    // ── Observation ───────────────────────────────────────────────────────

    /// The phase the signal is showing right now.  Never blocks and never
    /// touches the mailbox.
    #[inline]
    pub fn current_phase(&self) -> Phase {
        self.shared.phase()
    }

    /// Number of flips the timer has performed.
    pub fn flip_count(&self) -> u64 {
        self.shared.flips.load(Ordering::Acquire)
    }

    pub fn config(&self) -> &CycleConfig {
        &self.shared.config
    }

    /// Block until a `Green` phase is received from the signal.
    ///
    /// `Red` notifications are discarded and the wait continues.  If a
    /// `Green` notification is already pending this returns immediately.
    /// Blocks forever if the timer was never started.
    pub fn wait_for_green(&self) {
        loop {
            match self.shared.mailbox.receive() {
                Phase::Green => return,
                Phase::Red   => trace!("discarding red while waiting for green"),
            }
        }
    }

    /// Like [`wait_for_green`][Self::wait_for_green] but gives up after
    /// `timeout`.  Returns `true` if green was observed.
    ///
    /// A timeout too large to represent as a deadline waits without limit.
    pub fn wait_for_green_timeout(&self, timeout: Duration) -> bool {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            self.wait_for_green();
            return true;
        };
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            match self.shared.mailbox.receive_timeout(remaining) {
                Some(Phase::Green) => return true,
                Some(Phase::Red)   => trace!("discarding red while waiting for green"),
                None               => return false,
            }
        }
    }
}

impl fmt::Debug for PhaseController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhaseController")
            .field("phase", &self.current_phase())
            .field("flips", &self.flip_count())
            .field("running", &self.is_running())
            .field("config", &self.shared.config)
            .finish()
    }
}
