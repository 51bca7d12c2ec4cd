//! RP2040-specific HAL for the serial display firmware
//!
//! Implements the shared `lcdterm-hal` traits on top of embassy-rp:
//!
//! - Buffered UART transmitter (implements `lcdterm_hal::UartTx`)
//! - UART line settings translated to embassy-rp's configuration
//! - Debounced push button and plain GPIO outputs
//! - PWM-driven panel backlight (implements `lcdterm_hal::Backlight`)

#![no_std]

pub mod backlight;
pub mod gpio;
pub mod uart;

pub use backlight::PwmBacklight;
pub use gpio::{Button, PinOutput};
pub use uart::{line_config, SerialTx, UartBusError};
