//! Input dispatcher
//!
//! Classifies each received byte and feeds it into the line buffer and ring.
//! This is the only code that runs per byte, so it never touches the panel:
//! a completed line is reported back and the redraw happens later.

use crate::line::{Append, LineBuffer, TERMINATOR};
use crate::ring::{Commit, LineRing};

/// Backspace control character
pub const BACKSPACE: u8 = 0x08;

/// What a received byte means to the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteClass {
    /// `0x20` and above, appended to the line
    Printable,
    /// Line terminator, finalizes the line
    Terminator,
    /// Removes the last character of the line
    Backspace,
    /// Any other control byte, diagnostic only
    Control,
}

impl ByteClass {
    /// Classify a byte
    pub const fn of(byte: u8) -> Self {
        match byte {
            0x20..=0xFF => ByteClass::Printable,
            TERMINATOR => ByteClass::Terminator,
            BACKSPACE => ByteClass::Backspace,
            _ => ByteClass::Control,
        }
    }
}

/// Effect of one byte on the console state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// Character appended to the in-progress line
    Stored,
    /// Line already full, character dropped
    Truncated,
    /// Last character removed
    Erased,
    /// Backspace on an empty line
    NothingToErase,
    /// Line finalized and committed to the ring
    LineCompleted(Commit),
    /// Unclassified control byte, not buffered
    Ignored(u8),
}

impl Dispatch {
    /// Check if the screen should be redrawn
    pub fn needs_refresh(&self) -> bool {
        matches!(self, Dispatch::LineCompleted(_))
    }
}

/// Feed one byte into the line buffer and ring
pub fn dispatch<const N: usize, const M: usize>(
    line: &mut LineBuffer<M>,
    ring: &mut LineRing<N, M>,
    byte: u8,
) -> Dispatch {
    match ByteClass::of(byte) {
        ByteClass::Printable => match line.append(byte) {
            Append::Stored => Dispatch::Stored,
            Append::Truncated => Dispatch::Truncated,
        },
        ByteClass::Terminator => Dispatch::LineCompleted(ring.commit_line(line.finalize())),
        ByteClass::Backspace => {
            if line.delete_last() {
                Dispatch::Erased
            } else {
                Dispatch::NothingToErase
            }
        }
        ByteClass::Control => Dispatch::Ignored(byte),
    }
}
