//! `tl-core` — foundational types for the `rust_tl` traffic-signal framework.
//!
//! This crate is a dependency of every other `tl-*` crate.  It intentionally
//! has no `tl-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`phase`]  | `Phase` enum (`Red`, `Green`)                          |
//! | [`cycle`]  | `CycleConfig` — cycle-length bounds and poll interval  |
//! | [`rng`]    | `CycleRng` — draws randomized cycle lengths            |
//! | [`error`]  | `TlError`, `TlResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cycle;
pub mod error;
pub mod phase;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cycle::CycleConfig;
pub use error::{TlError, TlResult};
pub use phase::Phase;
pub use rng::CycleRng;
