//! Inter-task communication
//!
//! The receive and button tasks only record work; the main loop owns the
//! panel and carries it out.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;

use lcdterm_core::{Console, PendingEvents};

use crate::board::BoardConsole;

/// Line buffer and ring, shared by the receive task and the main loop
pub static CONSOLE: Mutex<CriticalSectionRawMutex, BoardConsole> = Mutex::new(Console::new());

/// Work waiting for the main loop
pub static PENDING: PendingEvents = PendingEvents::new();

/// Wakes the main loop after an event was raised
pub static WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
