//! `tl-mailbox` — a coalescing, single-slot inter-thread handoff.
//!
//! [`Mailbox<T>`] holds at most one pending value.  `send` overwrites
//! whatever is waiting and never blocks; `receive` blocks until a value is
//! present and takes it.  It is *not* a FIFO: if several values are sent
//! before anyone receives, only the last one is ever delivered.
//!
//! ```rust,ignore
//! let mailbox = Mailbox::new();
//! mailbox.send(1);
//! mailbox.send(2);
//! assert_eq!(mailbox.receive(), 2);
//! ```

pub mod mailbox;

#[cfg(test)]
mod tests;

pub use mailbox::Mailbox;
