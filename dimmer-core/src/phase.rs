//! Software PWM phase engine.
//!
//! A free-running 8-bit phase counter defines a 256-tick PWM period. On
//! every tick the output is asserted while the phase is below the duty
//! setpoint, so the on-fraction averaged over a full period is exactly
//! `duty / 256`.

/// Phase-accumulating PWM generator.
///
/// Holds only the current position within the 256-tick period. The duty
/// setpoint is passed in on every tick rather than stored, so a setpoint
/// change lands on the very next tick; there is no double buffering, and
/// a mid-period change may produce one truncated or stretched pulse.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhaseEngine {
    phase: u8,
}

impl PhaseEngine {
    /// Creates an engine at phase 0, the start of a period.
    pub const fn new() -> Self {
        Self { phase: 0 }
    }

    /// Advances one tick and returns whether the output is asserted.
    ///
    /// The comparison uses the pre-advance phase: with `duty == 0` the
    /// output is never asserted, with `duty == 255` it is asserted on
    /// every tick except the last of the period.
    pub fn tick(&mut self, duty: u8) -> bool {
        let asserted = self.phase < duty;
        self.phase = self.phase.wrapping_add(1);
        asserted
    }

    /// Current position within the 256-tick period.
    pub fn phase(&self) -> u8 {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: u32 = 256;

    fn run_period(engine: &mut PhaseEngine, duty: u8) -> Vec<bool> {
        (0..PERIOD).map(|_| engine.tick(duty)).collect()
    }

    #[test]
    fn duty_linearity_over_full_period() {
        for duty in 0..=u8::MAX {
            let mut engine = PhaseEngine::new();
            let asserted = run_period(&mut engine, duty)
                .iter()
                .filter(|&&on| on)
                .count();
            assert_eq!(asserted as u32, duty as u32, "duty {duty}");
        }
    }

    #[test]
    fn zero_duty_never_asserts() {
        let mut engine = PhaseEngine::new();
        assert!(run_period(&mut engine, 0).iter().all(|&on| !on));
    }

    #[test]
    fn full_duty_asserts_all_but_final_tick() {
        let mut engine = PhaseEngine::new();
        let pattern = run_period(&mut engine, u8::MAX);
        assert!(pattern[..255].iter().all(|&on| on));
        assert!(!pattern[255]);
    }

    #[test]
    fn phase_wraps_and_pattern_repeats() {
        let mut engine = PhaseEngine::new();
        let first = run_period(&mut engine, 128);
        assert_eq!(engine.phase(), 0);
        let second = run_period(&mut engine, 128);
        assert_eq!(engine.phase(), 0);
        assert_eq!(first, second);
    }

    #[test]
    fn setpoint_change_applies_next_tick() {
        let mut engine = PhaseEngine::new();
        // Hold the output low for part of a period, then raise the
        // setpoint above the current phase.
        for _ in 0..100 {
            assert!(!engine.tick(0));
        }
        assert!(engine.tick(200));
    }
}
