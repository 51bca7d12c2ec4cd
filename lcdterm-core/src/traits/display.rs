//! Text canvas trait for the LCD panel
//!
//! The console never touches pixels itself. It asks the panel driver to fill
//! the screen with a color and to draw a run of characters at a pixel
//! position, and nothing else.

/// Errors reported by the panel driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer to the panel failed
    Communication,
    /// Drawing outside the panel area
    InvalidCoordinates,
    /// Panel not initialized
    NotInitialized,
}

/// 24-bit RGB color, `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x00_0000);
    pub const WHITE: Color = Color(0xFF_FFFF);

    /// Red component
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green component
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue component
    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

/// Size of one glyph cell in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FontMetrics {
    pub width: u16,
    pub height: u16,
}

/// Panel that can render text
pub trait TextCanvas {
    /// Fill the whole panel with one color
    fn fill(&mut self, color: Color) -> Result<(), DisplayError>;

    /// Draw characters with their top-left corner at `(x, y)`
    ///
    /// Characters are bytes in the panel font's code page.
    fn draw_text(&mut self, x: u16, y: u16, text: &[u8], color: Color)
        -> Result<(), DisplayError>;

    /// Set the backlight level (0-255)
    fn set_backlight(&mut self, level: u8) -> Result<(), DisplayError>;

    /// Metrics of the selected font
    fn font_metrics(&self) -> FontMetrics;

    /// Panel size in pixels (width, height)
    fn pixel_dimensions(&self) -> (u16, u16);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_components() {
        let color = Color(0x12_34_56);
        assert_eq!(color.r(), 0x12);
        assert_eq!(color.g(), 0x34);
        assert_eq!(color.b(), 0x56);
    }
}
