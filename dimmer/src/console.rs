//! Foreground command loop.
//!
//! Blocks on serial input and dispatches single-byte commands. This is
//! the only writer of the duty setpoint; the periodic tasks keep running
//! through every await here.

use embassy_nrf::peripherals::UARTE0;
use embassy_nrf::uarte::UarteRx;

use crate::*;

/// Command dispatcher owning the UARTE RX half.
pub struct Console {
    rx: UarteRx<'static, UARTE0>,
}

impl Console {
    pub fn new(rx: UarteRx<'static, UARTE0>) -> Self {
        Self { rx }
    }

    /// Waits for the next byte from the host.
    async fn recv_byte(&mut self) -> u8 {
        let mut buf = [0u8; 1];
        // A one-byte stack buffer cannot trip any UARTE error arm.
        self.rx.read(&mut buf).await.unwrap();
        buf[0]
    }

    /// Dispatches commands forever. Unknown bytes get no response.
    pub async fn run(mut self) -> ! {
        loop {
            match Command::from_byte(self.recv_byte().await) {
                Some(Command::DumpReadings) => {
                    // Re-read per byte, so a burst can span conversions.
                    for _ in 0..command::DUMP_LEN {
                        send_serial(latest_reading()).await;
                    }
                }
                Some(Command::Greet) => {
                    for &byte in command::GREETING {
                        send_serial(byte).await;
                    }
                }
                Some(Command::SetDuty) => {
                    let value = self.recv_byte().await;
                    set_duty(value);
                    rprintln!("duty set to {}/256", value);
                }
                None => {}
            }
        }
    }
}
