//! Screen refresh policy
//!
//! Decides which ring slots to redraw, in which order, and whether the
//! screen has to be wiped first.
//!
//! While the ring is filling, slot `k` always lands on row `k`, so redrawing
//! over the previous frame is harmless. Once lines start being evicted every
//! row shifts up by one and the old frame must be cleared first.

use crate::config::LayoutConfig;
use crate::ring::{LineRing, RingState};
use crate::traits::display::FontMetrics;

/// Lines to draw for one refresh, oldest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RedrawPlan<const N: usize> {
    /// Wipe the screen before drawing
    pub clear: bool,
    /// First slot to draw (the read cursor)
    pub start: usize,
    /// Number of slots to draw
    pub count: usize,
}

impl<const N: usize> RedrawPlan<N> {
    /// Slot indices in draw order
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        let start = self.start;
        (0..self.count).map(move |k| (start + k) % N)
    }

    /// Slot indices paired with their on-screen position
    pub fn rows(&self, layout: Layout) -> impl Iterator<Item = (usize, Position)> {
        self.indices()
            .enumerate()
            .map(move |(row, slot)| (slot, layout.row_position(row)))
    }

    /// Check if nothing will be drawn
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Compute the next redraw
///
/// - Not full: slots from the read cursor up to, but excluding, the write
///   cursor. The in-progress line never appears.
/// - Full: all `N` slots starting at the read cursor. The first refresh to
///   see the ring full draws without clearing; every later one clears.
///
/// A first full observation still clears when lines were evicted before it,
/// which happens when several lines complete between two refreshes.
pub fn compute_redraw_range<const N: usize, const M: usize>(
    ring: &mut LineRing<N, M>,
) -> RedrawPlan<N> {
    let evictions = ring.take_evictions();
    let start = ring.read_cursor();

    match ring.state() {
        RingState::Full => {
            let seen_before = ring.observe_full();
            RedrawPlan {
                clear: seen_before || evictions > 0,
                start,
                count: N,
            }
        }
        RingState::Empty | RingState::Filling => RedrawPlan {
            clear: false,
            start,
            count: ring.len(),
        },
    }
}

/// Pixel position of a drawn line (top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

/// Where lines land on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    /// Left margin in pixels
    pub origin_x: u16,
    /// Top margin in pixels
    pub origin_y: u16,
    /// Font height plus line spacing
    pub line_pitch: u16,
    /// Glyph advance in pixels
    pub char_width: u16,
}

impl Layout {
    /// Combine the configured margins with the font in use
    pub fn new(config: &LayoutConfig, font: FontMetrics) -> Self {
        Self {
            origin_x: config.start_x,
            origin_y: config.start_y,
            line_pitch: font.height.saturating_add(config.line_space),
            char_width: font.width,
        }
    }

    /// Position of the `row`-th drawn line
    pub fn row_position(&self, row: usize) -> Position {
        let offset = (row as u32).saturating_mul(self.line_pitch as u32);
        Position {
            x: self.origin_x,
            y: (self.origin_y as u32)
                .saturating_add(offset)
                .min(u16::MAX as u32) as u16,
        }
    }

    /// Check that `rows` lines of `cols` characters fit on a panel
    ///
    /// The refresh policy does not clip; callers check this once at startup.
    pub fn fits(&self, rows: usize, cols: usize, dimensions: (u16, u16)) -> bool {
        let (width, height) = dimensions;
        let right = self.origin_x as u32 + cols as u32 * self.char_width as u32;
        let bottom = self.origin_y as u32 + rows as u32 * self.line_pitch as u32;
        right <= width as u32 && bottom <= height as u32
    }
}
