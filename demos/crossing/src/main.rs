//! crossing — smallest demo for the rust_tl traffic-signal framework.
//!
//! One signal at a single crossing, a handful of vehicles arriving at
//! random times.  Each vehicle thread blocks in `wait_for_green` and crosses
//! once the light turns green.  The process exits after the last vehicle
//! has crossed; the signal's timer thread simply ends with it.
//!
//! Set `RUST_LOG=debug` to see every flip.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tl_core::CycleRng;
use tl_light::{PhaseChange, PhaseController, PhaseObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const VEHICLE_COUNT:     u64 = 6;
const SEED:              u64 = 42;
const MAX_ARRIVAL_DELAY: u64 = 12_000; // ms after start

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs each flip at `info` so the demo is readable without `RUST_LOG`.
struct FlipLogger;

impl PhaseObserver for FlipLogger {
    fn on_flip(&mut self, change: &PhaseChange) {
        info!(
            phase = %change.phase,
            held_ms = change.elapsed.as_millis() as u64,
            flips = change.flips,
            "light changed"
        );
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_logging();

    let light = PhaseController::builder()
        .seed(SEED)
        .observer(FlipLogger)
        .build()?;
    let start = Instant::now();
    light.simulate()?;
    info!(phase = %light.current_phase(), "signal started");

    let mut root = CycleRng::new(SEED);
    let vehicles: Vec<_> = (0..VEHICLE_COUNT)
        .map(|id| {
            let light = light.clone();
            let mut rng = root.child(id);
            let delay = Duration::from_millis(rng.gen_range(0..=MAX_ARRIVAL_DELAY));
            thread::spawn(move || {
                thread::sleep(delay);
                let phase = light.current_phase();
                info!(vehicle = id, %phase, "arrived at crossing");
                if !phase.is_green() {
                    light.wait_for_green();
                }
                info!(
                    vehicle = id,
                    at_ms = start.elapsed().as_millis() as u64,
                    "crossed"
                );
            })
        })
        .collect();

    for v in vehicles {
        if v.join().is_err() {
            anyhow::bail!("vehicle thread panicked");
        }
    }

    info!(flips = light.flip_count(), "all vehicles crossed");
    Ok(())
}
