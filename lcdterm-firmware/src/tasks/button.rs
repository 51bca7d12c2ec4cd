//! Clear button task

use defmt::*;
use lcdterm_core::ConsoleEvent;
use lcdterm_hal_rp2040::Button;

use crate::channels::{PENDING, WAKE};

/// Request a console reset on every debounced press
#[embassy_executor::task]
pub async fn button_task(mut button: Button) {
    info!("Button task started");

    loop {
        button.wait_for_press().await;
        debug!("Clear button pressed");
        PENDING.raise(ConsoleEvent::ResetRequested);
        WAKE.signal(());

        button.wait_for_release().await;
    }
}
