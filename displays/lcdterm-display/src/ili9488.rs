//! ILI9488 TFT driver
//!
//! Driver for 480x320 ILI9488 panels on a 4-wire SPI bus (SCK, MOSI, CS,
//! D/C). The controller only accepts 18-bit color over SPI, so every pixel
//! is sent as three bytes with the color in the upper six bits.
//!
//! The panel keeps its own frame memory; nothing is buffered on the MCU.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// Panel size in landscape orientation
pub const WIDTH: u16 = 480;
pub const HEIGHT: u16 = 320;

/// Pixels streamed per SPI write
const PIXEL_CHUNK: usize = 64;

/// Bytes per pixel on the wire (18-bit color)
pub const BYTES_PER_PIXEL: usize = 3;

/// Bytes spent opening a window: CASET and PASET with their corners, then RAMWR
pub const WINDOW_OVERHEAD: usize = 11;

/// Bus bytes of the slowest console refresh
///
/// A refresh that wraps wipes the whole panel, then draws `rows * cols`
/// glyph cells of `glyph` (width, height) pixels, each in its own window.
pub const fn refresh_bytes(rows: usize, cols: usize, glyph: (usize, usize)) -> usize {
    let wipe = WIDTH as usize * HEIGHT as usize * BYTES_PER_PIXEL + WINDOW_OVERHEAD;
    let cell = glyph.0 * glyph.1 * BYTES_PER_PIXEL + WINDOW_OVERHEAD;
    wipe + rows * cols * cell
}

/// Serial bytes that arrive at `baudrate` (8N1) while `bus_bytes` go out at `spi_hz`
pub const fn serial_bytes_during(bus_bytes: usize, spi_hz: u32, baudrate: u32) -> usize {
    let bus_bits = bus_bytes as u64 * 8;
    (bus_bits * (baudrate as u64 / 10)).div_ceil(spi_hz as u64) as usize
}

/// ILI9488 commands
#[allow(dead_code)]
mod cmd {
    pub const SOFT_RESET: u8 = 0x01;
    pub const SLEEP_OUT: u8 = 0x11;
    pub const DISPLAY_ON: u8 = 0x29;
    pub const COLUMN_ADDR: u8 = 0x2A;
    pub const PAGE_ADDR: u8 = 0x2B;
    pub const MEMORY_WRITE: u8 = 0x2C;
    pub const MEMORY_ACCESS: u8 = 0x36;
    pub const PIXEL_FORMAT: u8 = 0x3A;
    pub const INTERFACE_MODE: u8 = 0xB0;
    pub const FRAME_RATE: u8 = 0xB1;
    pub const INVERSION: u8 = 0xB4;
    pub const FUNCTION_CONTROL: u8 = 0xB6;
    pub const POWER_1: u8 = 0xC0;
    pub const POWER_2: u8 = 0xC1;
    pub const VCOM: u8 = 0xC5;
    pub const IMAGE_FUNCTION: u8 = 0xE9;
    pub const ADJUST_3: u8 = 0xF7;
}

/// Memory access control bits
mod madctl {
    /// Row/column exchange (landscape)
    pub const MV: u8 = 0x20;
    /// BGR panel filter
    pub const BGR: u8 = 0x08;
}

/// Panel driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// SPI transfer failed
    Spi,
    /// Control pin could not be driven
    Pin,
}

/// ILI9488 driver
pub struct Ili9488<SPI, DC, CS, RST> {
    spi: SPI,
    dc: DC,
    cs: CS,
    rst: RST,
}

impl<SPI, DC, CS, RST> Ili9488<SPI, DC, CS, RST>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
{
    /// Create a new driver; call [`Self::init`] before drawing
    pub fn new(spi: SPI, dc: DC, cs: CS, rst: RST) -> Self {
        Self { spi, dc, cs, rst }
    }

    /// Reset and configure the panel: landscape, 18-bit color, display on
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), PanelError> {
        self.cs.set_high().map_err(|_| PanelError::Pin)?;
        self.rst.set_low().map_err(|_| PanelError::Pin)?;
        delay.delay_ms(10);
        self.rst.set_high().map_err(|_| PanelError::Pin)?;
        delay.delay_ms(120);

        self.command(cmd::SOFT_RESET, &[])?;
        delay.delay_ms(120);

        let init_cmds: &[(u8, &[u8])] = &[
            (cmd::POWER_1, &[0x17, 0x15]),
            (cmd::POWER_2, &[0x41]),
            (cmd::VCOM, &[0x00, 0x12, 0x80]),
            (cmd::MEMORY_ACCESS, &[madctl::MV | madctl::BGR]),
            (cmd::PIXEL_FORMAT, &[0x66]), // 18 bits per pixel
            (cmd::INTERFACE_MODE, &[0x00]),
            (cmd::FRAME_RATE, &[0xA0]),
            (cmd::INVERSION, &[0x02]),
            (cmd::FUNCTION_CONTROL, &[0x02, 0x02, 0x3B]),
            (cmd::IMAGE_FUNCTION, &[0x00]),
            (cmd::ADJUST_3, &[0xA9, 0x51, 0x2C, 0x82]),
        ];
        for &(c, params) in init_cmds {
            self.command(c, params)?;
        }

        self.command(cmd::SLEEP_OUT, &[])?;
        delay.delay_ms(120);
        self.command(cmd::DISPLAY_ON, &[])?;
        delay.delay_ms(25);

        Ok(())
    }

    /// Send a command with its parameters
    fn command(&mut self, command: u8, params: &[u8]) -> Result<(), PanelError> {
        self.cs.set_low().map_err(|_| PanelError::Pin)?;
        let result = self.command_selected(command, params);
        self.cs.set_high().map_err(|_| PanelError::Pin)?;
        result
    }

    fn command_selected(&mut self, command: u8, params: &[u8]) -> Result<(), PanelError> {
        self.dc.set_low().map_err(|_| PanelError::Pin)?;
        self.spi.write(&[command]).map_err(|_| PanelError::Spi)?;
        if !params.is_empty() {
            self.dc.set_high().map_err(|_| PanelError::Pin)?;
            self.spi.write(params).map_err(|_| PanelError::Spi)?;
        }
        self.spi.flush().map_err(|_| PanelError::Spi)
    }

    /// Write a run of pixels into a window (inclusive corners)
    fn write_window<I>(
        &mut self,
        top_left: Point,
        bottom_right: Point,
        colors: I,
    ) -> Result<(), PanelError>
    where
        I: IntoIterator<Item = Rgb888>,
    {
        let [x0h, x0l] = (top_left.x as u16).to_be_bytes();
        let [x1h, x1l] = (bottom_right.x as u16).to_be_bytes();
        let [y0h, y0l] = (top_left.y as u16).to_be_bytes();
        let [y1h, y1l] = (bottom_right.y as u16).to_be_bytes();

        self.command(cmd::COLUMN_ADDR, &[x0h, x0l, x1h, x1l])?;
        self.command(cmd::PAGE_ADDR, &[y0h, y0l, y1h, y1l])?;

        self.cs.set_low().map_err(|_| PanelError::Pin)?;
        let result = self.stream_pixels(colors);
        self.cs.set_high().map_err(|_| PanelError::Pin)?;
        result
    }

    fn stream_pixels<I>(&mut self, colors: I) -> Result<(), PanelError>
    where
        I: IntoIterator<Item = Rgb888>,
    {
        self.dc.set_low().map_err(|_| PanelError::Pin)?;
        self.spi
            .write(&[cmd::MEMORY_WRITE])
            .map_err(|_| PanelError::Spi)?;
        self.dc.set_high().map_err(|_| PanelError::Pin)?;

        let mut buf = [0u8; PIXEL_CHUNK * 3];
        let mut len = 0;
        for color in colors {
            buf[len..len + 3].copy_from_slice(&[color.r(), color.g(), color.b()]);
            len += 3;
            if len == buf.len() {
                self.spi.write(&buf).map_err(|_| PanelError::Spi)?;
                len = 0;
            }
        }
        if len > 0 {
            self.spi.write(&buf[..len]).map_err(|_| PanelError::Spi)?;
        }
        self.spi.flush().map_err(|_| PanelError::Spi)
    }
}

impl<SPI, DC, CS, RST> OriginDimensions for Ili9488<SPI, DC, CS, RST> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<SPI, DC, CS, RST> DrawTarget for Ili9488<SPI, DC, CS, RST>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
{
    type Color = Rgb888;
    type Error = PanelError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                self.write_window(point, point, core::iter::once(color))?;
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let visible = area.intersection(&self.bounding_box());
        if visible.size != area.size {
            // Partly off-screen: fall back to per-pixel clipping
            let pixels = area
                .points()
                .zip(colors)
                .map(|(point, color)| Pixel(point, color));
            return self.draw_iter(pixels);
        }

        match area.bottom_right() {
            Some(bottom_right) => {
                let count = (area.size.width * area.size.height) as usize;
                self.write_window(area.top_left, bottom_right, colors.into_iter().take(count))
            }
            None => Ok(()),
        }
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        match area.bottom_right() {
            Some(bottom_right) => {
                let count = (area.size.width * area.size.height) as usize;
                self.write_window(
                    area.top_left,
                    bottom_right,
                    core::iter::repeat(color).take(count),
                )
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::{Cell, RefCell};
    use core::convert::Infallible;
    use heapless::Vec;

    /// Bytes seen on the bus, tagged with the D/C level (true = data)
    type Log = RefCell<Vec<(bool, u8), 256>>;

    struct Bus<'a> {
        log: &'a Log,
        dc: &'a Cell<bool>,
    }

    impl embedded_hal::spi::ErrorType for Bus<'_> {
        type Error = Infallible;
    }

    impl SpiBus<u8> for Bus<'_> {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Infallible> {
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Infallible> {
            let mut log = self.log.borrow_mut();
            for &w in words {
                log.push((self.dc.get(), w)).unwrap();
            }
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u8], write: &[u8]) -> Result<(), Infallible> {
            self.write(write)
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Infallible> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Infallible> {
            Ok(())
        }
    }

    struct Pin<'a>(&'a Cell<bool>);

    impl embedded_hal::digital::ErrorType for Pin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for Pin<'_> {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0.set(true);
            Ok(())
        }
    }

    struct Rig {
        log: Log,
        dc: Cell<bool>,
        cs: Cell<bool>,
        rst: Cell<bool>,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                log: RefCell::new(Vec::new()),
                dc: Cell::new(false),
                cs: Cell::new(true),
                rst: Cell::new(true),
            }
        }

        fn panel(&self) -> Ili9488<Bus<'_>, Pin<'_>, Pin<'_>, Pin<'_>> {
            Ili9488::new(
                Bus {
                    log: &self.log,
                    dc: &self.dc,
                },
                Pin(&self.dc),
                Pin(&self.cs),
                Pin(&self.rst),
            )
        }

        fn commands(&self) -> Vec<u8, 32> {
            self.log
                .borrow()
                .iter()
                .filter(|(data, _)| !data)
                .map(|&(_, b)| b)
                .collect()
        }

        fn data(&self) -> Vec<u8, 256> {
            self.log
                .borrow()
                .iter()
                .filter(|(data, _)| *data)
                .map(|&(_, b)| b)
                .collect()
        }
    }

    #[test]
    fn test_fill_solid_sets_window_and_streams() {
        let rig = Rig::new();
        let mut panel = rig.panel();

        panel
            .fill_solid(
                &Rectangle::new(Point::new(10, 300), Size::new(2, 1)),
                Rgb888::new(0xFF, 0x80, 0x00),
            )
            .unwrap();

        assert_eq!(
            rig.commands().as_slice(),
            &[cmd::COLUMN_ADDR, cmd::PAGE_ADDR, cmd::MEMORY_WRITE]
        );
        assert_eq!(
            rig.data().as_slice(),
            &[
                0, 10, 0, 11, // columns 10..=11
                0x01, 0x2C, 0x01, 0x2C, // page 300
                0xFF, 0x80, 0x00, 0xFF, 0x80, 0x00,
            ]
        );
        assert!(rig.cs.get(), "chip select released");
    }

    #[test]
    fn test_fill_solid_clips_to_panel() {
        let rig = Rig::new();
        let mut panel = rig.panel();

        panel
            .fill_solid(
                &Rectangle::new(Point::new(478, 319), Size::new(10, 10)),
                Rgb888::BLACK,
            )
            .unwrap();

        let data = rig.data();
        assert_eq!(&data[..8], &[0x01, 0xDE, 0x01, 0xDF, 0x01, 0x3F, 0x01, 0x3F]);
        assert_eq!(data.len(), 8 + 2 * 3);
    }

    #[test]
    fn test_off_screen_pixels_are_dropped() {
        let rig = Rig::new();
        let mut panel = rig.panel();

        panel
            .draw_iter([Pixel(Point::new(-1, 0), Rgb888::WHITE)])
            .unwrap();
        assert!(rig.log.borrow().is_empty());
    }

    #[test]
    fn test_init_ends_with_display_on() {
        let rig = Rig::new();
        let mut panel = rig.panel();

        struct NoDelay;
        impl DelayNs for NoDelay {
            fn delay_ns(&mut self, _ns: u32) {}
        }

        panel.init(&mut NoDelay).unwrap();
        let commands = rig.commands();
        assert_eq!(commands.first(), Some(&cmd::SOFT_RESET));
        assert_eq!(commands.last(), Some(&cmd::DISPLAY_ON));
        assert!(rig.rst.get());
    }

    #[test]
    fn test_window_overhead_matches_bus() {
        let rig = Rig::new();
        let mut panel = rig.panel();

        panel
            .fill_solid(
                &Rectangle::new(Point::new(0, 0), Size::new(1, 1)),
                Rgb888::WHITE,
            )
            .unwrap();
        assert_eq!(rig.log.borrow().len(), WINDOW_OVERHEAD + BYTES_PER_PIXEL);
    }

    #[test]
    fn test_full_refresh_backlog_at_115200() {
        // 16 lines of 66 characters in a 7x14 font, panel at 40 MHz
        let bytes = refresh_bytes(16, 66, (7, 14));
        assert_eq!(bytes, 460_811 + 16 * 66 * 305);

        let backlog = serial_bytes_during(bytes, 40_000_000, 115_200);
        assert!(backlog > 256, "a 256 byte buffer overruns: {}", backlog);
        assert!(backlog < 4096, "4 KiB holds the backlog: {}", backlog);
    }

    #[test]
    fn test_serial_bytes_round_up() {
        assert_eq!(serial_bytes_during(0, 40_000_000, 115_200), 0);
        assert_eq!(serial_bytes_during(1, 40_000_000, 115_200), 1);
        // 5 MB at 40 MHz is one second: a full second of 9600 baud
        assert_eq!(serial_bytes_during(5_000_000, 40_000_000, 9600), 960);
    }
}
