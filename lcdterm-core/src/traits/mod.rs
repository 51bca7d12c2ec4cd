//! Hardware abstraction traits
//!
//! These traits define the interface between the console logic and the
//! panel driver that renders it.

pub mod display;

pub use display::{Color, DisplayError, FontMetrics, TextCanvas};
