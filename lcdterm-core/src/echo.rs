//! Serial greeting and echo
//!
//! On startup the console writes a fixed test pattern so the link can be
//! checked with a terminal. Afterwards every received byte is sent back;
//! control bytes the console does not understand are announced as `[XX]`
//! first so they show up in the terminal.

use core::fmt::Write;

use heapless::String;
use lcdterm_hal::UartTx;

use crate::input::Dispatch;

/// Test pattern sent once at startup
pub const GREETING: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789\n\r";

/// Send the startup test pattern and wait for it to leave the UART
pub fn send_greeting<T: UartTx>(tx: &mut T) -> Result<(), T::Error> {
    tx.write_and_wait(GREETING)
}

/// Echo a received byte
pub fn echo<T: UartTx>(tx: &mut T, byte: u8, dispatch: &Dispatch) -> Result<(), T::Error> {
    if let Dispatch::Ignored(code) = dispatch {
        tx.write_blocking(hex_tag(*code).as_bytes())?;
    }
    tx.write_blocking(&[byte])
}

/// `[XX]` tag for an unclassified byte
pub fn hex_tag(byte: u8) -> String<4> {
    let mut tag = String::new();
    // Four characters always fit
    let _ = write!(tag, "[{:02X}]", byte);
    tag
}
