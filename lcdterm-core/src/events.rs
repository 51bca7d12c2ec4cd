//! Deferred console events
//!
//! The serial and button contexts only record what happened. The main loop
//! drains the flags and does every panel-touching operation itself, which
//! keeps the interrupt-side work short and bounded.

use portable_atomic::{AtomicBool, Ordering};

/// Work requested from the main loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleEvent {
    /// One or more lines were finalized; redraw
    LineReady,
    /// The reset button fired; clear ring and screen
    ResetRequested,
}

/// Coalescing single-consumer event flags
///
/// Raising an event that is already pending has no further effect.
pub struct PendingEvents {
    line_ready: AtomicBool,
    reset_requested: AtomicBool,
}

impl Default for PendingEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl PendingEvents {
    /// No pending events
    pub const fn new() -> Self {
        Self {
            line_ready: AtomicBool::new(false),
            reset_requested: AtomicBool::new(false),
        }
    }

    /// Record an event
    pub fn raise(&self, event: ConsoleEvent) {
        self.flag(event).store(true, Ordering::Release);
    }

    /// Take the next pending event, reset first
    pub fn take(&self) -> Option<ConsoleEvent> {
        [ConsoleEvent::ResetRequested, ConsoleEvent::LineReady]
            .into_iter()
            .find(|&event| self.flag(event).swap(false, Ordering::AcqRel))
    }

    /// Check if an event is waiting
    pub fn is_pending(&self, event: ConsoleEvent) -> bool {
        self.flag(event).load(Ordering::Acquire)
    }

    fn flag(&self, event: ConsoleEvent) -> &AtomicBool {
        match event {
            ConsoleEvent::LineReady => &self.line_ready,
            ConsoleEvent::ResetRequested => &self.reset_requested,
        }
    }
}
