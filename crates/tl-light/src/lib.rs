//! `tl-light` — a traffic signal that flips between red and green on a
//! randomized timer.
//!
//! # Roles
//!
//! ```text
//!   timer thread (one, started by simulate)        waiter threads (any number)
//!   ───────────────────────────────────────        ───────────────────────────
//!   loop:                                          wait_for_green():
//!     sleep until drawn cycle elapsed                loop:
//!     phase ← phase.flip()    ── atomic store ──▶      current_phase()  (atomic load)
//!     mailbox.send(phase)     ── coalescing ────▶      mailbox.receive() == Green → return
//!     draw next cycle
//! ```
//!
//! The atomic phase is the single source of truth.  The mailbox only carries
//! wake-ups: it holds the latest phase until some waiter takes it.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tl_light::PhaseController;
//!
//! let light = PhaseController::new();
//! light.simulate()?;
//!
//! let handle = light.clone();
//! std::thread::spawn(move || {
//!     handle.wait_for_green();
//!     assert!(handle.current_phase().is_green());
//! });
//! ```

pub mod builder;
pub mod controller;
pub mod observer;
mod timer;


pub use builder::PhaseControllerBuilder;
pub use controller::PhaseController;
pub use observer::{NoopObserver, PhaseChange, PhaseObserver};
pub use tl_core::{CycleConfig, Phase, TlError, TlResult};
