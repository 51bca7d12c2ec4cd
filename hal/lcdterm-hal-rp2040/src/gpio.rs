//! GPIO wrappers

use embassy_rp::gpio::{Input, Output};
use embassy_time::{Duration, Timer};
use lcdterm_hal::gpio::{InputPin, OutputPin};

/// Active-low push button with a software debounce
pub struct Button {
    pin: Input<'static>,
    debounce: Duration,
}

impl Button {
    /// Wrap an input pin; it should already be pulled up
    pub fn new(pin: Input<'static>, debounce_ms: u16) -> Self {
        Self {
            pin,
            debounce: Duration::from_millis(debounce_ms as u64),
        }
    }

    /// Wait for a press that is still held after the debounce interval
    pub async fn wait_for_press(&mut self) {
        loop {
            self.pin.wait_for_falling_edge().await;
            Timer::after(self.debounce).await;
            if self.pin.is_low() {
                return;
            }
        }
    }

    /// Wait until the button is let go
    pub async fn wait_for_release(&mut self) {
        self.pin.wait_for_high().await;
        Timer::after(self.debounce).await;
    }
}

impl InputPin for Button {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Push-pull output
pub struct PinOutput {
    pin: Output<'static>,
}

impl PinOutput {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl OutputPin for PinOutput {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
