//! Fixed configuration of the dimmer.
//!
//! Everything here is compile-time; the device has no runtime
//! configuration surface.

/// Serial link rate, symbols per second.
pub const BAUD_RATE: u32 = 38_400;

/// Soft-PWM tick rate: a 16 MHz source divided by 256. The 8-bit phase
/// counter makes one PWM period 256 ticks, so the output switches at
/// about 244 Hz.
pub const PWM_TICK_HZ: u64 = 62_500;

/// Decimation factor for the streamed readings: one byte is forwarded
/// per `DECIMATION + 1` completed conversions.
pub const DECIMATION: u8 = 10;

/// Duty-cycle setpoint at power-on (50%).
pub const DEFAULT_DUTY: u8 = 128;

/// Depth of the outbound serial byte queue.
pub const SERIAL_QUEUE_LEN: usize = 64;
