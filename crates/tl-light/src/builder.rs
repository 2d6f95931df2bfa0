//! Fluent builder for constructing a [`PhaseController`].

use tl_core::{CycleConfig, TlResult};

use crate::{PhaseController, PhaseObserver};

/// Fluent builder for [`PhaseController`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                         |
/// |--------------------------|---------------------------------|
/// | `.config(c)`             | `CycleConfig::default()`        |
/// | `.cycle_ms(min, max)`    | 4000, 6000                      |
/// | `.poll_interval_ms(ms)`  | 1                               |
/// | `.seed(s)`               | OS entropy                      |
/// | `.observer(o)`           | none                            |
///
/// # Example
///
/// ```rust,ignore
/// let light = PhaseControllerBuilder::new()
///     .cycle_ms(40, 60)
///     .seed(42)
///     .build()?;
/// light.simulate()?;
/// ```
#[derive(Default)]
pub struct PhaseControllerBuilder {
    config:   CycleConfig,
    observer: Option<Box<dyn PhaseObserver>>,
}

impl PhaseControllerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole timing configuration.
    pub fn config(mut self, config: CycleConfig) -> Self {
        self.config = config;
        self
    }

    /// Inclusive bounds for each randomly drawn cycle length.
    pub fn cycle_ms(mut self, min: u64, max: u64) -> Self {
        self.config.min_cycle_ms = min;
        self.config.max_cycle_ms = max;
        self
    }

    /// Sleep granularity of the timer loop.
    pub fn poll_interval_ms(mut self, ms: u64) -> Self {
        self.config.poll_interval_ms = ms;
        self
    }

    /// Fix the RNG seed so cycle lengths repeat across runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Attach an observer.  It is moved onto the timer thread by
    /// [`PhaseController::simulate`].
    pub fn observer<O: PhaseObserver>(mut self, observer: O) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Validate the configuration and return an idle controller showing
    /// `Red`.
    pub fn build(self) -> TlResult<PhaseController> {
        self.config.validate()?;
        Ok(PhaseController::from_parts(self.config, self.observer))
    }
}
