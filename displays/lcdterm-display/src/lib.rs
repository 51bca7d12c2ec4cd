//! Panel-side rendering for lcdterm
//!
//! This crate provides:
//! - `GraphicsCanvas`, an implementation of the core `TextCanvas` trait for
//!   any embedded-graphics `DrawTarget` plus a backlight
//! - `Ili9488`, a driver for 480x320 ILI9488 TFT panels on a 4-wire SPI bus
//!
//! # Architecture
//!
//! The console core only knows how to fill the screen and draw a run of
//! characters. `GraphicsCanvas` turns those calls into embedded-graphics
//! primitives, and the panel driver streams the resulting pixels to the
//! controller's frame memory.

#![no_std]

pub mod canvas;
pub mod ili9488;

// Re-export key types
pub use canvas::GraphicsCanvas;
pub use ili9488::{Ili9488, PanelError};
