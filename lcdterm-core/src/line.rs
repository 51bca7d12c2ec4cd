//! Fixed-capacity text lines
//!
//! [`LineBuffer`] accumulates the line currently being typed. Once the line
//! terminator arrives it is finalized into an immutable [`Line`] that the
//! ring stores until the slot is overwritten.

use heapless::Vec;

/// Characters per line on the reference 800x480 panel
pub const MAX_LINE_CHAR_COUNT: usize = 66;

/// Line terminator
pub const TERMINATOR: u8 = b'\n';

/// A finalized line of at most `M` characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<const M: usize> {
    chars: Vec<u8, M>,
}

impl<const M: usize> Default for Line<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const M: usize> Line<M> {
    /// Create an empty line
    pub const fn new() -> Self {
        Self { chars: Vec::new() }
    }

    /// Raw characters, in the panel font's code page
    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    /// Text as a string slice, if every character is valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.chars).ok()
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the line has no characters
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Blank the line
    pub fn clear(&mut self) {
        self.chars.clear();
    }
}

/// Outcome of appending a character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Append {
    /// Character stored, position advanced
    Stored,
    /// Line already holds `M` characters; the character was dropped
    Truncated,
}

/// The line currently being written
///
/// Position never exceeds `M`. Excess characters are dropped, and a
/// backspace only moves the position marker back.
#[derive(Debug, Clone)]
pub struct LineBuffer<const M: usize> {
    chars: Vec<u8, M>,
}

impl<const M: usize> Default for LineBuffer<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const M: usize> LineBuffer<M> {
    /// Create an empty line buffer
    pub const fn new() -> Self {
        Self { chars: Vec::new() }
    }

    /// Append one character at the current position
    pub fn append(&mut self, ch: u8) -> Append {
        match self.chars.push(ch) {
            Ok(()) => Append::Stored,
            Err(_) => Append::Truncated,
        }
    }

    /// Logical backspace
    ///
    /// Returns `false` when the position is already at the start of the line.
    pub fn delete_last(&mut self) -> bool {
        self.chars.pop().is_some()
    }

    /// Finish the line and reset the position to 0
    pub fn finalize(&mut self) -> Line<M> {
        Line {
            chars: core::mem::take(&mut self.chars),
        }
    }

    /// Discard the in-progress content
    pub fn clear(&mut self) {
        self.chars.clear();
    }

    /// Current in-line position
    pub fn position(&self) -> usize {
        self.chars.len()
    }

    /// Check if the line holds `M` characters
    pub fn is_full(&self) -> bool {
        self.chars.is_full()
    }

    /// In-progress content
    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }
}
