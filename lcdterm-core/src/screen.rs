//! Screen rendering
//!
//! Turns a [`RedrawPlan`] into canvas calls, and carries out the deferred
//! console events from the main loop.

use crate::config::{ConsoleConfig, DisplayConfig};
use crate::console::Console;
use crate::events::ConsoleEvent;
use crate::refresh::{Layout, RedrawPlan};
use crate::traits::display::{Color, DisplayError, TextCanvas};

/// Renders console lines onto a text canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Screen {
    layout: Layout,
    background: Color,
    text: Color,
    backlight: u8,
}

impl Screen {
    /// Build a renderer for the canvas's font
    pub fn new<C: TextCanvas>(config: &ConsoleConfig, canvas: &C) -> Self {
        Self::with_layout(
            &config.display,
            Layout::new(&config.layout, canvas.font_metrics()),
        )
    }

    /// Build a renderer with an explicit layout
    pub fn with_layout(display: &DisplayConfig, layout: Layout) -> Self {
        Self {
            layout,
            background: Color(display.background),
            text: Color(display.text_color),
            backlight: display.backlight,
        }
    }

    /// Line placement in use
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Paint the background and switch the backlight on
    pub fn power_on<C: TextCanvas>(&self, canvas: &mut C) -> Result<(), DisplayError> {
        canvas.fill(self.background)?;
        canvas.set_backlight(self.backlight)
    }

    /// Fill the screen with the background color
    pub fn wipe<C: TextCanvas>(&self, canvas: &mut C) -> Result<(), DisplayError> {
        canvas.fill(self.background)
    }

    /// Redraw the console according to the refresh policy
    pub fn refresh<C: TextCanvas, const N: usize, const M: usize>(
        &self,
        console: &mut Console<N, M>,
        canvas: &mut C,
    ) -> Result<RedrawPlan<N>, DisplayError> {
        let plan = console.plan_redraw();
        if plan.clear {
            self.wipe(canvas)?;
        }

        for (slot, pos) in plan.rows(self.layout) {
            if let Some(line) = console.ring().slot(slot) {
                canvas.draw_text(pos.x, pos.y, line.as_bytes(), self.text)?;
            }
        }

        Ok(plan)
    }

    /// Carry out a deferred event
    pub fn handle<C: TextCanvas, const N: usize, const M: usize>(
        &self,
        event: ConsoleEvent,
        console: &mut Console<N, M>,
        canvas: &mut C,
    ) -> Result<(), DisplayError> {
        match event {
            ConsoleEvent::LineReady => self.refresh(console, canvas).map(|_| ()),
            ConsoleEvent::ResetRequested => {
                console.reset();
                self.wipe(canvas)
            }
        }
    }
}
