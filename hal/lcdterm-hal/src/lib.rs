//! lcdterm Hardware Abstraction Layer
//!
//! This crate defines the hardware collaborators the console logic talks to.
//! Chip-specific HALs implement them, so the same core runs on any board
//! that can provide a serial line, a button and a backlit panel.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (lcdterm-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lcdterm-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ lcdterm-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`uart::UartTx`] - Serial transmission
//! - [`backlight::Backlight`] - Panel backlight level

#![no_std]
#![deny(unsafe_code)]

pub mod backlight;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use backlight::Backlight;
pub use gpio::{InputPin, OutputPin};
pub use uart::{UartConfig, UartTx};
