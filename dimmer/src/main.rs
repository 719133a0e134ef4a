//! Serial-controlled lamp dimmer.
//!
//! Three periodic loops and one foreground loop run concurrently on the
//! embassy executor: the soft-PWM dimmer ticks the lamp pin, the sampler
//! streams decimated analog readings, the console dispatches single-byte
//! host commands, and the serial sink drains everything outbound onto
//! the wire. The loops share exactly two values, the duty setpoint and
//! the latest reading, each a single-writer atomic byte.
#![no_std]
#![no_main]

mod console;
mod pwm;
mod sampler;
mod serial;

use panic_rtt_target as _;

use core::sync::atomic::{AtomicU8, Ordering};

use embassy_executor::Spawner;
use embassy_futures::join;
use embassy_nrf::{
    bind_interrupts,
    gpio::{AnyPin, Level, Output, OutputDrive},
    peripherals, saadc, uarte,
};

pub use rtt_target::{rprintln, rtt_init_print};

pub use dimmer_core::{command, config, Command, Decimator, PhaseEngine};

pub use console::Console;
pub use pwm::Dimmer;
pub use sampler::{Adc, Sampler};
pub use serial::{send_serial, try_send_serial, SerialSink};

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    UARTE0_UART0 => uarte::InterruptHandler<peripherals::UARTE0>;
});

/// Duty setpoint in on-ticks per 256-tick period. Written only by the
/// console; read by the dimmer on every tick.
static DUTY: AtomicU8 = AtomicU8::new(config::DEFAULT_DUTY);

/// Most recent analog reading. Written only by the sampler.
static LATEST_READING: AtomicU8 = AtomicU8::new(0);

pub fn duty() -> u8 {
    DUTY.load(Ordering::Relaxed)
}

pub fn set_duty(value: u8) {
    DUTY.store(value, Ordering::Relaxed);
}

pub fn latest_reading() -> u8 {
    LATEST_READING.load(Ordering::Relaxed)
}

pub fn set_latest_reading(value: u8) {
    LATEST_READING.store(value, Ordering::Relaxed);
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    rtt_init_print!();
    let p = embassy_nrf::init(Default::default());

    let lamp = Output::new(AnyPin::from(p.P0_13), Level::Low, OutputDrive::Standard);
    let dimmer = Dimmer::new(lamp);

    let mut saadc_config = saadc::Config::default();
    saadc_config.resolution = saadc::Resolution::_12BIT;
    let mut channel_config = saadc::ChannelConfig::single_ended(p.P0_02);
    channel_config.reference = saadc::Reference::INTERNAL;
    let adc = saadc::Saadc::new(p.SAADC, Irqs, saadc_config, [channel_config]);
    let sampler = Sampler::new(adc).await;

    let mut uart_config = uarte::Config::default();
    uart_config.baudrate = uarte::Baudrate::BAUD38400;
    uart_config.parity = uarte::Parity::EXCLUDED;
    let uart = uarte::Uarte::new(p.UARTE0, Irqs, p.P0_08, p.P0_06, uart_config);
    let (tx, rx) = uart.split();

    rprintln!("dimmer up: duty {}/256", duty());

    join::join4(
        dimmer.run(),
        sampler.run(),
        Console::new(rx).run(),
        SerialSink::new(tx).run(),
    )
    .await;

    panic!("main tasks returned");
}
