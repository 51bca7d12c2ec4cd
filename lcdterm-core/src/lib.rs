//! Board-agnostic core logic for the serial line display
//!
//! This crate contains all console logic that does not depend on specific
//! hardware:
//!
//! - Fixed-capacity lines and the in-progress line buffer
//! - Circular line store with oldest-line eviction
//! - Screen refresh policy (which lines, which order, when to clear)
//! - Byte classification and dispatch
//! - Deferred events drained by the main loop
//! - Rendering onto a text canvas
//! - Configuration types and parser

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod console;
pub mod echo;
pub mod events;
pub mod input;
pub mod line;
pub mod refresh;
pub mod ring;
pub mod screen;
pub mod traits;

pub use console::Console;
pub use events::{ConsoleEvent, PendingEvents};
pub use line::MAX_LINE_CHAR_COUNT;
pub use ring::MAX_FRAME_LINE_COUNT;
pub use screen::Screen;
