//! Analog input sampling and stream decimation.
//!
//! The converter runs conversions back to back; every completed
//! conversion updates the shared latest-reading byte and feeds the
//! decimator, which lets one reading through to the serial queue per
//! [`config::DECIMATION`] + 1 conversions.

use embassy_nrf::saadc;

use crate::*;

/// Single-channel SAADC configured for the sensor input.
pub type Adc = saadc::Saadc<'static, 1>;

/// Free-running analog sampler feeding the decimated serial stream.
pub struct Sampler {
    adc: Adc,
    decimator: Decimator,
}

impl Sampler {
    /// Creates the sampler and calibrates the converter once.
    pub async fn new(adc: Adc) -> Self {
        adc.calibrate().await;
        Self {
            adc,
            decimator: Decimator::new(config::DECIMATION),
        }
    }

    /// Runs one conversion and reduces it to the 8-bit reading.
    ///
    /// Only the top 8 bits of the 12-bit result are kept; converter
    /// noise below ground clamps to 0.
    async fn measure(&mut self) -> u8 {
        let mut buf = [0i16; 1];
        self.adc.sample(&mut buf).await;
        let raw = buf[0].clamp(0, 0x0fff) as u16;
        (raw >> 4) as u8
    }

    /// Samples forever.
    ///
    /// Readings are published unconditionally; forwarding onto the
    /// serial queue is best-effort. If the host stops draining the link,
    /// stream bytes are dropped here rather than stalling the sampler.
    pub async fn run(mut self) -> ! {
        loop {
            let reading = self.measure().await;
            set_latest_reading(reading);
            if let Some(byte) = self.decimator.on_sample(reading) {
                try_send_serial(byte);
            }
        }
    }
}
