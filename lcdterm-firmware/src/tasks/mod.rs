//! Embassy async tasks
//!
//! Each task runs independently and hands work to the main loop through
//! the pending event flags.

pub mod button;
pub mod serial_rx;

pub use button::button_task;
pub use serial_rx::serial_rx_task;
