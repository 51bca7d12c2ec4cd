//! Text canvas over embedded-graphics
//!
//! Draws console lines with a 7x14 monospace font. Glyph cells are painted
//! with the background color too, so redrawing a line over itself never
//! leaves stale pixels inside the cells.

use embedded_graphics::mono_font::ascii::FONT_7X14;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use lcdterm_core::traits::display::{Color, DisplayError, FontMetrics, TextCanvas};
use lcdterm_hal::Backlight;

/// Characters converted per embedded-graphics text call
const CHUNK: usize = 32;

/// Font used for console text
pub const FONT: &MonoFont<'static> = &FONT_7X14;

/// `TextCanvas` backed by an embedded-graphics draw target
pub struct GraphicsCanvas<D, B> {
    target: D,
    backlight: B,
    background: Rgb888,
}

impl<D, B> GraphicsCanvas<D, B>
where
    D: DrawTarget<Color = Rgb888>,
    B: Backlight,
{
    /// Wrap a draw target and its backlight
    pub fn new(target: D, backlight: B) -> Self {
        Self {
            target,
            backlight,
            background: Rgb888::BLACK,
        }
    }

    /// Underlying draw target
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Current backlight level
    pub fn backlight_level(&self) -> u8 {
        self.backlight.level()
    }
}

fn rgb(color: Color) -> Rgb888 {
    Rgb888::new(color.r(), color.g(), color.b())
}

/// Map a byte to a glyph the ASCII font has
fn glyph(byte: u8) -> u8 {
    if (0x20..0x7F).contains(&byte) {
        byte
    } else {
        b'?'
    }
}

impl<D, B> TextCanvas for GraphicsCanvas<D, B>
where
    D: DrawTarget<Color = Rgb888>,
    B: Backlight,
{
    fn fill(&mut self, color: Color) -> Result<(), DisplayError> {
        self.background = rgb(color);
        self.target
            .clear(self.background)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &[u8],
        color: Color,
    ) -> Result<(), DisplayError> {
        let style = MonoTextStyleBuilder::new()
            .font(FONT)
            .text_color(rgb(color))
            .background_color(self.background)
            .build();

        let mut cursor = Point::new(x.into(), y.into());
        let mut chunk = [0u8; CHUNK];

        for run in text.chunks(CHUNK) {
            for (dst, &src) in chunk.iter_mut().zip(run) {
                *dst = glyph(src);
            }
            let run = core::str::from_utf8(&chunk[..run.len()])
                .map_err(|_| DisplayError::InvalidCoordinates)?;

            cursor = Text::with_baseline(run, cursor, style, Baseline::Top)
                .draw(&mut self.target)
                .map_err(|_| DisplayError::Communication)?;
        }

        Ok(())
    }

    fn set_backlight(&mut self, level: u8) -> Result<(), DisplayError> {
        self.backlight.set_level(level);
        Ok(())
    }

    fn font_metrics(&self) -> FontMetrics {
        FontMetrics {
            width: (FONT.character_size.width + FONT.character_spacing) as u16,
            height: FONT.character_size.height as u16,
        }
    }

    fn pixel_dimensions(&self) -> (u16, u16) {
        let size = self.target.bounding_box().size;
        (size.width as u16, size.height as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    const W: usize = 48;
    const H: usize = 20;

    struct Frame {
        pixels: [[Rgb888; W]; H],
    }

    impl Frame {
        fn new() -> Self {
            Self {
                pixels: [[Rgb888::new(1, 2, 3); W]; H],
            }
        }

        fn count(&self, color: Rgb888) -> usize {
            self.pixels.iter().flatten().filter(|&&p| p == color).count()
        }
    }

    impl OriginDimensions for Frame {
        fn size(&self) -> Size {
            Size::new(W as u32, H as u32)
        }
    }

    impl DrawTarget for Frame {
        type Color = Rgb888;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Infallible>
        where
            I: IntoIterator<Item = Pixel<Rgb888>>,
        {
            for Pixel(point, color) in pixels {
                if (0..W as i32).contains(&point.x) && (0..H as i32).contains(&point.y) {
                    self.pixels[point.y as usize][point.x as usize] = color;
                }
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct Level(u8);

    impl Backlight for Level {
        fn set_level(&mut self, level: u8) {
            self.0 = level;
        }

        fn level(&self) -> u8 {
            self.0
        }
    }

    fn canvas() -> GraphicsCanvas<Frame, Level> {
        GraphicsCanvas::new(Frame::new(), Level::default())
    }

    #[test]
    fn test_metrics_and_dimensions() {
        let canvas = canvas();
        assert_eq!(
            canvas.font_metrics(),
            FontMetrics {
                width: 7,
                height: 14
            }
        );
        assert_eq!(canvas.pixel_dimensions(), (48, 20));
    }

    #[test]
    fn test_fill_covers_panel() {
        let mut canvas = canvas();
        canvas.fill(Color(0x00_00FF)).unwrap();
        assert_eq!(canvas.target().count(Rgb888::new(0, 0, 0xFF)), W * H);
    }

    #[test]
    fn test_text_stays_in_its_cells() {
        let mut canvas = canvas();
        canvas.fill(Color::BLACK).unwrap();
        canvas.draw_text(0, 0, b"AB", Color::WHITE).unwrap();

        let frame = canvas.target();
        assert!(frame.count(Rgb888::WHITE) > 0);
        for (y, row) in frame.pixels.iter().enumerate() {
            for (x, &p) in row.iter().enumerate() {
                if p == Rgb888::WHITE {
                    assert!(x < 14 && y < 14, "glyph pixel at ({}, {})", x, y);
                }
            }
        }
    }

    #[test]
    fn test_unknown_bytes_render_as_question_mark() {
        let mut raw = canvas();
        raw.fill(Color::BLACK).unwrap();
        raw.draw_text(2, 3, &[0xB0, 0x7F], Color::WHITE).unwrap();

        let mut expected = canvas();
        expected.fill(Color::BLACK).unwrap();
        expected.draw_text(2, 3, b"??", Color::WHITE).unwrap();

        assert_eq!(raw.target().pixels, expected.target().pixels);
    }

    #[test]
    fn test_long_text_continues_across_chunks() {
        let text = [b'#'; CHUNK + 2];
        let mut long = canvas();
        long.fill(Color::BLACK).unwrap();
        long.draw_text(0, 0, &text, Color::WHITE).unwrap();

        // 34 glyphs of 7 pixels run off the 48 pixel test frame; only the
        // first six cells are visible and all of them are lit.
        let frame = long.target();
        for cell in 0..6 {
            let lit = (0..14)
                .flat_map(|y| (cell * 7..cell * 7 + 7).map(move |x| (x, y)))
                .any(|(x, y)| frame.pixels[y][x] == Rgb888::WHITE);
            assert!(lit, "cell {} is blank", cell);
        }
    }

    #[test]
    fn test_backlight() {
        let mut canvas = canvas();
        canvas.set_backlight(0xF0).unwrap();
        assert_eq!(canvas.backlight_level(), 0xF0);
    }
}
