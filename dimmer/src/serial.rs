//! Outbound serial plumbing.
//!
//! Every byte leaving the device, decimated stream bytes and command
//! responses alike, funnels through one queue drained by a single task
//! owning the UARTE TX half. Stream and response bytes therefore
//! interleave at byte granularity; the protocol has no framing to keep
//! them apart.

use embassy_nrf::peripherals::UARTE0;
use embassy_nrf::uarte::UarteTx;
use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
use embassy_sync::channel::Channel;

use crate::*;

static SERIAL_OUT: Channel<ThreadModeRawMutex, u8, { config::SERIAL_QUEUE_LEN }> = Channel::new();

/// Queues a byte for transmission, waiting for room if the queue is full.
pub async fn send_serial(byte: u8) {
    SERIAL_OUT.send(byte).await;
}

/// Queues a byte for transmission if there is room, dropping it otherwise.
pub fn try_send_serial(byte: u8) {
    let _ = SERIAL_OUT.try_send(byte);
}

/// Task draining the outbound queue onto the wire.
pub struct SerialSink {
    tx: UarteTx<'static, UARTE0>,
}

impl SerialSink {
    pub fn new(tx: UarteTx<'static, UARTE0>) -> Self {
        Self { tx }
    }

    pub async fn run(mut self) -> ! {
        loop {
            let byte = SERIAL_OUT.receive().await;
            // A one-byte stack buffer cannot trip any UARTE error arm.
            self.tx.write(&[byte]).await.unwrap();
        }
    }
}
