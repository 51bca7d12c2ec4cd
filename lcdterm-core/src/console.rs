//! Console text state
//!
//! Owns the in-progress line and the ring of finalized lines. One instance
//! lives for the whole run; the firmware keeps it behind a mutex shared by
//! the serial task and the main loop.

use crate::input::{dispatch, Dispatch};
use crate::line::LineBuffer;
use crate::refresh::{compute_redraw_range, RedrawPlan};
use crate::ring::LineRing;

/// Scrolling text console of `N` lines by `M` characters
#[derive(Debug, Clone)]
pub struct Console<const N: usize, const M: usize> {
    line: LineBuffer<M>,
    ring: LineRing<N, M>,
}

impl<const N: usize, const M: usize> Default for Console<N, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const M: usize> Console<N, M> {
    /// Empty console
    pub const fn new() -> Self {
        Self {
            line: LineBuffer::new(),
            ring: LineRing::new(),
        }
    }

    /// Feed one received byte
    pub fn feed(&mut self, byte: u8) -> Dispatch {
        dispatch(&mut self.line, &mut self.ring, byte)
    }

    /// Feed a run of bytes, returning `true` if any line completed
    pub fn feed_all(&mut self, bytes: &[u8]) -> bool {
        bytes
            .iter()
            .fold(false, |completed, &b| self.feed(b).needs_refresh() || completed)
    }

    /// Discard every line, including the one being typed
    pub fn reset(&mut self) {
        self.line.clear();
        self.ring.reset();
    }

    /// Decide what the next refresh draws
    pub fn plan_redraw(&mut self) -> RedrawPlan<N> {
        compute_redraw_range(&mut self.ring)
    }

    /// Finalized lines
    pub fn ring(&self) -> &LineRing<N, M> {
        &self.ring
    }

    /// Line being typed
    pub fn line_buffer(&self) -> &LineBuffer<M> {
        &self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::RingState;

    #[test]
    fn test_feed_all_reports_completion() {
        let mut console: Console<4, 8> = Console::new();
        assert!(!console.feed_all(b"abc"));
        assert!(console.feed_all(b"d\nef"));
        assert_eq!(console.ring().len(), 1);
        assert_eq!(console.line_buffer().as_bytes(), b"ef");
    }

    #[test]
    fn test_reset_mid_line_discards_partial() {
        let mut console: Console<4, 8> = Console::new();
        console.feed_all(b"done\npart");

        console.reset();
        assert_eq!(console.ring().state(), RingState::Empty);
        assert_eq!(console.line_buffer().position(), 0);

        console.feed_all(b"\n");
        assert_eq!(console.ring().slot(0).and_then(|l| l.as_str()), Some(""));
    }

    #[test]
    fn test_in_progress_line_never_planned() {
        let mut console: Console<2, 8> = Console::new();
        console.feed_all(b"one\ntwo\nthr");

        let plan = console.plan_redraw();
        let drawn: heapless::Vec<&str, 2> = plan
            .indices()
            .filter_map(|slot| console.ring().slot(slot).and_then(|l| l.as_str()))
            .collect();
        assert_eq!(drawn.as_slice(), &["one", "two"]);
    }
}
