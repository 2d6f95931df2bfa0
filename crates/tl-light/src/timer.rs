//! The timer loop run by the signal's background thread.

use std::thread;
use std::time::Instant;

use tl_core::CycleRng;
use tracing::debug;

use crate::PhaseChange;
use crate::controller::Shared;

/// Flip the phase forever at randomized intervals.
///
/// ```text
/// draw cycle
/// loop:
///   sleep(poll_interval)
///   if elapsed since last flip < cycle: continue
///   reset stopwatch, draw next cycle
///   flip phase, send it to the mailbox
///   notify observer
/// ```
///
/// Sleeping in small steps rather than for the whole cycle keeps the achieved
/// cycle within one poll interval of the drawn length.
pub(crate) fn run(shared: &Shared) {
    let config = &shared.config;
    let poll = config.poll_interval();
    let mut rng = CycleRng::for_config(config);
    let mut observer = shared.take_observer();

    debug!(
        min_ms = config.min_cycle_ms,
        max_ms = config.max_cycle_ms,
        poll_ms = config.poll_interval_ms,
        "phase timer started"
    );
    observer.on_start(shared.phase());

    let mut last_flip = Instant::now();
    let mut cycle = rng.next_cycle(config);

    loop {
        thread::sleep(poll);

        let elapsed = last_flip.elapsed();
        if elapsed < cycle {
            continue;
        }

        last_flip = Instant::now();
        let drawn = cycle;
        cycle = rng.next_cycle(config);

        let (phase, flips) = shared.advance();
        debug!(%phase, elapsed_ms = elapsed.as_millis() as u64, flips, "signal flipped");

        observer.on_flip(&PhaseChange { phase, drawn, elapsed, flips });
    }
}
