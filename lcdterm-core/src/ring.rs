//! Circular line store
//!
//! A ring of `N` finalized lines addressed by a write cursor and a read
//! cursor. Both cursors stay in `[0, N)` and advance modulo `N`. Once every
//! slot holds a line the cursors coincide, and each further commit evicts the
//! oldest line before advancing.

use crate::line::Line;

/// Lines on the reference 800x480 panel
pub const MAX_FRAME_LINE_COUNT: usize = 25;

/// Ring lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RingState {
    /// No line committed since startup or the last reset
    Empty,
    /// Some slots hold lines; write cursor is ahead of read cursor
    Filling,
    /// Every slot holds a line; cursors coincide
    Full,
}

/// Result of committing a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Commit {
    /// Slot the line was stored in
    pub slot: usize,
    /// The oldest line was discarded to make room
    pub evicted: bool,
}

/// Fixed-capacity ring of `N` lines of `M` characters
#[derive(Debug, Clone)]
pub struct LineRing<const N: usize, const M: usize> {
    slots: [Line<M>; N],
    /// Slot the next committed line goes to
    write: usize,
    /// Oldest retained line
    read: usize,
    empty: bool,
    /// A redraw has already seen the ring full
    full_observed: bool,
    /// Lines evicted since the last redraw plan
    evicted_since_plan: usize,
}

impl<const N: usize, const M: usize> Default for LineRing<N, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const M: usize> LineRing<N, M> {
    /// Create an empty ring
    pub const fn new() -> Self {
        Self {
            slots: [const { Line::new() }; N],
            write: 0,
            read: 0,
            empty: true,
            full_observed: false,
            evicted_since_plan: 0,
        }
    }

    /// Store a finalized line at the write cursor and advance
    ///
    /// When the ring is full the read cursor moves first, discarding the
    /// oldest line.
    pub fn commit_line(&mut self, line: Line<M>) -> Commit {
        let evicted = self.is_full();
        if evicted {
            self.read = (self.read + 1) % N;
            self.evicted_since_plan = self.evicted_since_plan.saturating_add(1);
        }

        let slot = self.write;
        self.slots[slot] = line;
        self.write = (self.write + 1) % N;
        self.empty = false;

        Commit { slot, evicted }
    }

    /// Return to the empty state, blanking every slot
    pub fn reset(&mut self) {
        self.write = 0;
        self.read = 0;
        self.empty = true;
        self.full_observed = false;
        self.evicted_since_plan = 0;
        for slot in &mut self.slots {
            slot.clear();
        }
    }

    /// Current lifecycle phase
    pub fn state(&self) -> RingState {
        if self.empty {
            RingState::Empty
        } else if self.write == self.read {
            RingState::Full
        } else {
            RingState::Filling
        }
    }

    /// Check if every slot holds a line
    pub fn is_full(&self) -> bool {
        self.state() == RingState::Full
    }

    /// Check if no line has been committed
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Number of retained lines
    pub fn len(&self) -> usize {
        match self.state() {
            RingState::Empty => 0,
            RingState::Full => N,
            RingState::Filling => (self.write + N - self.read) % N,
        }
    }

    /// Slot capacity
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Write cursor
    pub fn write_cursor(&self) -> usize {
        self.write
    }

    /// Read cursor
    pub fn read_cursor(&self) -> usize {
        self.read
    }

    /// Line stored in a slot
    pub fn slot(&self, index: usize) -> Option<&Line<M>> {
        self.slots.get(index)
    }

    /// Retained lines, oldest first
    pub fn lines(&self) -> impl Iterator<Item = &Line<M>> + '_ {
        (0..self.len()).map(move |k| &self.slots[(self.read + k) % N])
    }

    /// Record that a redraw saw the ring full
    ///
    /// Returns `true` if an earlier redraw had already seen it.
    pub(crate) fn observe_full(&mut self) -> bool {
        core::mem::replace(&mut self.full_observed, true)
    }

    /// Take the number of evictions since the previous redraw plan
    pub(crate) fn take_evictions(&mut self) -> usize {
        core::mem::take(&mut self.evicted_since_plan)
    }
}
