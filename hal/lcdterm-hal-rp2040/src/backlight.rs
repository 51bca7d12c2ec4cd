//! PWM backlight
//!
//! Runs one PWM channel with `top = 255`, so the 8-bit level maps straight
//! onto the compare value.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use lcdterm_hal::Backlight;

/// Backlight on channel B of a PWM slice
pub struct PwmBacklight {
    pwm: Pwm<'static>,
    config: PwmConfig,
    level: u8,
}

impl PwmBacklight {
    /// Take over a PWM slice; the backlight starts off
    pub fn new(mut pwm: Pwm<'static>) -> Self {
        let mut config = PwmConfig::default();
        config.top = u8::MAX as u16;
        config.compare_b = 0;
        pwm.set_config(&config);

        Self {
            pwm,
            config,
            level: 0,
        }
    }
}

impl Backlight for PwmBacklight {
    fn set_level(&mut self, level: u8) {
        self.level = level;
        self.config.compare_b = level as u16;
        self.pwm.set_config(&self.config);
    }

    fn level(&self) -> u8 {
        self.level
    }
}
