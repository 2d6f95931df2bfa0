//! Unit tests for tl-mailbox.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use crate::Mailbox;

// ── Single-thread semantics ───────────────────────────────────────────────────

#[cfg(test)]
mod slot_tests {
    use super::*;

    #[test]
    fn new_mailbox_is_empty() {
        let mb: Mailbox<u32> = Mailbox::new();
        assert!(!mb.is_pending());
        assert_eq!(mb.try_receive(), None);
    }

    #[test]
    fn send_then_receive() {
        let mb = Mailbox::new();
        mb.send("hello");
        assert!(mb.is_pending());
        assert_eq!(mb.receive(), "hello");
        assert!(!mb.is_pending());
    }

    #[test]
    fn last_write_wins() {
        let mb = Mailbox::new();
        mb.send(1);
        mb.send(2);
        mb.send(3);
        assert_eq!(mb.receive(), 3);
        // Intermediate values are gone, not queued behind.
        assert_eq!(mb.try_receive(), None);
    }

    #[test]
    fn receive_consumes() {
        let mb = Mailbox::new();
        mb.send(String::from("once"));
        assert_eq!(mb.try_receive().as_deref(), Some("once"));
        assert_eq!(mb.try_receive(), None);
    }

    #[test]
    fn receive_timeout_expires_when_empty() {
        let mb: Mailbox<u8> = Mailbox::default();
        assert_eq!(mb.receive_timeout(Duration::from_millis(20)), None);
    }

    #[test]
    fn receive_timeout_returns_pending_immediately() {
        let mb = Mailbox::new();
        mb.send(9u8);
        assert_eq!(mb.receive_timeout(Duration::from_millis(1)), Some(9));
    }
}

// ── Cross-thread blocking ─────────────────────────────────────────────────────

#[cfg(test)]
mod blocking_tests {
    use super::*;

    #[test]
    fn receive_blocks_until_send() {
        let mb = Arc::new(Mailbox::new());
        let done = Arc::new(AtomicBool::new(false));

        let receiver = {
            let mb = Arc::clone(&mb);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let v = mb.receive();
                done.store(true, Ordering::SeqCst);
                v
            })
        };

        thread::sleep(Duration::from_millis(50));
        assert!(!done.load(Ordering::SeqCst), "receive returned before any send");

        mb.send(42u64);
        assert_eq!(receiver.join().unwrap(), 42);
        assert!(done.load(Ordering::SeqCst));
    }

    #[test]
    fn receive_timeout_wakes_on_send() {
        let mb = Arc::new(Mailbox::new());
        let receiver = {
            let mb = Arc::clone(&mb);
            thread::spawn(move || mb.receive_timeout(Duration::from_secs(5)))
        };
        thread::sleep(Duration::from_millis(20));
        mb.send('x');
        assert_eq!(receiver.join().unwrap(), Some('x'));
    }

    #[test]
    fn one_send_wakes_exactly_one_of_many() {
        let mb = Arc::new(Mailbox::new());
        let got = Arc::new(AtomicUsize::new(0));

        let waiters: Vec<_> = (0..4)
            .map(|_| {
                let mb = Arc::clone(&mb);
                let got = Arc::clone(&got);
                thread::spawn(move || {
                    if mb.receive_timeout(Duration::from_millis(300)).is_some() {
                        got.fetch_add(1, Ordering::SeqCst);
                    }
                })
            })
            .collect();

        thread::sleep(Duration::from_millis(30));
        mb.send(());
        for w in waiters {
            w.join().unwrap();
        }
        assert_eq!(got.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn every_send_is_eventually_received_by_some_waiter() {
        let mb = Arc::new(Mailbox::new());
        let received = Arc::new(AtomicUsize::new(0));

        let waiters: Vec<_> = (0..3)
            .map(|_| {
                let mb = Arc::clone(&mb);
                let received = Arc::clone(&received);
                thread::spawn(move || {
                    mb.receive();
                    received.fetch_add(1, Ordering::SeqCst);
                })
            })
            .collect();

        // Space the sends so each is consumed before the next overwrites it.
        for i in 0..3 {
            thread::sleep(Duration::from_millis(30));
            mb.send(i);
        }
        for w in waiters {
            w.join().unwrap();
        }
        assert_eq!(received.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn sender_never_blocks_without_receivers() {
        let mb = Mailbox::new();
        for i in 0..10_000 {
            mb.send(i);
        }
        assert_eq!(mb.receive(), 9_999);
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod coalescing_props {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn receive_returns_last_send(values in prop::collection::vec(any::<i64>(), 1..32)) {
            let mb = Mailbox::new();
            for &v in &values {
                mb.send(v);
            }
            prop_assert_eq!(mb.receive(), *values.last().unwrap());
            prop_assert!(!mb.is_pending());
        }
    }
}
