//! Console UART receive task
//!
//! Feeds received bytes into the console one at a time and echoes each of
//! them back. A completed line only raises an event; the redraw happens in
//! the main loop.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use lcdterm_core::echo::{echo, hex_tag};
use lcdterm_core::input::Dispatch;
use lcdterm_core::ConsoleEvent;
use lcdterm_hal_rp2040::{SerialTx, UartBusError};

use crate::channels::{CONSOLE, PENDING, WAKE};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx, mut tx: SerialTx) {
    info!("Serial RX task started");

    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        let n = match rx.read(&mut buf).await {
            Ok(n) => n,
            Err(e) => {
                warn!("UART read error: {:?}", UartBusError::from(e));
                continue;
            }
        };

        let mut line_ready = false;
        for &byte in &buf[..n] {
            // The lock covers only the feed; the echo may block on the TX ring
            let dispatch = CONSOLE.lock().await.feed(byte);
            match dispatch {
                Dispatch::Ignored(b) => debug!("{}", hex_tag(b).as_str()),
                Dispatch::Truncated => trace!("Line full, dropped {=u8:#x}", byte),
                _ => {}
            }

            if let Err(e) = echo(&mut tx, byte, &dispatch) {
                warn!("Echo failed: {:?}", e);
            }
            line_ready |= dispatch.needs_refresh();
        }

        if line_ready {
            PENDING.raise(ConsoleEvent::LineReady);
            WAKE.signal(());
        }
    }
}
