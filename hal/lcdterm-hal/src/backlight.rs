//! Backlight control
//!
//! The panel backlight is driven with a single byte level, set once at
//! startup. How the level maps to hardware (PWM duty, DAC, I2C register) is
//! up to the implementation.

/// Panel backlight
pub trait Backlight {
    /// Set the backlight level (0 = off, 255 = full brightness)
    fn set_level(&mut self, level: u8);

    /// Current backlight level
    fn level(&self) -> u8;
}
