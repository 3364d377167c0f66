//! Simulated progress shown while the service is generating.
//!
//! The generate endpoint gives no progress feedback, so the bar advances on
//! a timer: +10 points every 500 ms, parking at 90 until the request
//! settles, then jumping to 100 whatever the outcome. The container stays
//! visible for 2 seconds after settlement so the user sees the bar complete.

use std::time::Duration;

/// Points added per tick.
pub const TICK_STEP: f32 = 10.0;
/// Interval between automatic ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(500);
/// Automatic ticks stop here; only settlement moves the bar past it.
pub const TICK_CEILING: f32 = 90.0;
/// How long the bar lingers at 100% before the container is hidden.
pub const LINGER: Duration = Duration::from_millis(2000);

/// The displayed value. Not a measurement of anything.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulatedProgress {
    value: f32,
}

impl SimulatedProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percent(&self) -> f32 {
        self.value
    }

    /// One timer tick. Returns the new value, never past the ceiling.
    pub fn tick(&mut self) -> f32 {
        self.value = (self.value + TICK_STEP).min(TICK_CEILING);
        self.value
    }

    pub fn at_ceiling(&self) -> bool {
        self.value >= TICK_CEILING
    }

    /// The request settled; the bar completes regardless of outcome.
    pub fn finish(&mut self) {
        self.value = 100.0;
    }
}
