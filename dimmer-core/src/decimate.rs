//! Sample-stream decimation.
//!
//! The analog converter produces readings far faster than the serial
//! link should carry them. The decimator counts conversion notifications
//! and lets one reading through per `factor + 1` notifications.

/// Event-counting decimator over the conversion-complete stream.
#[derive(Debug, Clone, Copy)]
pub struct Decimator {
    count: u8,
    factor: u8,
}

impl Decimator {
    /// Creates a decimator forwarding one reading per `factor + 1`
    /// notifications.
    pub const fn new(factor: u8) -> Self {
        Self { count: 0, factor }
    }

    /// Consumes one conversion notification.
    ///
    /// Returns the reading to forward on every `factor + 1`th call,
    /// `None` otherwise. The forwarded value is whatever was latched at
    /// the forwarding instant; readings in between are skipped, not
    /// averaged.
    pub fn on_sample(&mut self, reading: u8) -> Option<u8> {
        if self.count == self.factor {
            self.count = 0;
            Some(reading)
        } else {
            self.count += 1;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::DECIMATION;

    #[test]
    fn forwards_one_byte_per_factor_plus_one_samples() {
        let mut decimator = Decimator::new(DECIMATION);
        let mut forwarded = Vec::new();
        for i in 0..3 * (DECIMATION as u32 + 1) {
            if let Some(byte) = decimator.on_sample(i as u8) {
                forwarded.push((i, byte));
            }
        }
        assert_eq!(forwarded, vec![(10, 10), (21, 21), (32, 32)]);
    }

    #[test]
    fn forwarded_value_is_the_latest_reading() {
        let mut decimator = Decimator::new(2);
        assert_eq!(decimator.on_sample(7), None);
        assert_eq!(decimator.on_sample(8), None);
        assert_eq!(decimator.on_sample(9), Some(9));
        // The counter resets, so the next window starts fresh.
        assert_eq!(decimator.on_sample(1), None);
        assert_eq!(decimator.on_sample(2), None);
        assert_eq!(decimator.on_sample(3), Some(3));
    }

    #[test]
    fn zero_factor_forwards_every_sample() {
        let mut decimator = Decimator::new(0);
        for value in 0..20u8 {
            assert_eq!(decimator.on_sample(value), Some(value));
        }
    }
}
