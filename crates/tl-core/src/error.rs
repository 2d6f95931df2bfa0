//! Framework error type.
//!
//! The signal itself never fails at runtime: `send`, `receive`,
//! `current_phase` and `wait_for_green` are total.  Errors only arise while
//! building a controller from an invalid configuration, or when the OS
//! refuses to create the timer thread.

use thiserror::Error;

/// The top-level error type shared by all `tl-*` crates.
#[derive(Debug, Error)]
pub enum TlError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to spawn timer thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Shorthand result type for all `tl-*` crates.
pub type TlResult<T> = Result<T, TlError>;
