//! Lamp output driven by phase-accumulated software PWM.
//!
//! A fixed-rate tick loop advances the phase engine and copies its
//! decision onto the lamp pin. One full period is 256 ticks, so at the
//! configured tick rate the lamp switches at roughly 244 Hz, fast
//! enough that the eye sees only the duty-cycle average.

use embassy_nrf::gpio::{AnyPin, Level, Output};
use embassy_time::{Duration, Ticker};

use crate::*;

/// Soft-PWM task driving the lamp pin.
pub struct Dimmer {
    lamp: Output<'static, AnyPin>,
    engine: PhaseEngine,
}

impl Dimmer {
    pub fn new(lamp: Output<'static, AnyPin>) -> Self {
        Self {
            lamp,
            engine: PhaseEngine::new(),
        }
    }

    /// Runs the tick loop forever.
    ///
    /// The setpoint is re-read from shared state on every tick, so a
    /// change lands mid-period without waiting for a period boundary.
    pub async fn run(mut self) -> ! {
        let mut ticker = Ticker::every(Duration::from_hz(config::PWM_TICK_HZ));
        loop {
            let asserted = self.engine.tick(duty());
            self.lamp.set_level(Level::from(asserted));
            ticker.next().await;
        }
    }
}
