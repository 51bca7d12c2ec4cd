//! Configuration type definitions
//!
//! Defaults reproduce the reference board: 115200 8N1, white text on black,
//! backlight at 0xF0, 5 pixel margins and line spacing.

use lcdterm_hal::UartConfig;

/// Complete console configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConsoleConfig {
    /// Serial line settings
    pub serial: UartConfig,
    /// Panel colors and backlight
    pub display: DisplayConfig,
    /// Text placement
    pub layout: LayoutConfig,
    /// Reset button
    pub button: ButtonConfig,
}

/// Panel colors and backlight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Background color, `0xRRGGBB`
    pub background: u32,
    /// Text color, `0xRRGGBB`
    pub text_color: u32,
    /// Backlight level, set once at startup
    pub backlight: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            background: 0x00_0000,
            text_color: 0xFF_FFFF,
            backlight: 0xF0,
        }
    }
}

/// Text placement in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayoutConfig {
    /// Left margin
    pub start_x: u16,
    /// Top margin
    pub start_y: u16,
    /// Gap between lines
    pub line_space: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            start_x: 5,
            start_y: 5,
            line_space: 5,
        }
    }
}

/// Reset button settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Time the line must stay low after a falling edge
    pub debounce_ms: u16,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self { debounce_ms: 10 }
    }
}
