//! Board wiring
//!
//! | Signal            | GPIO | Peripheral     |
//! |-------------------|------|----------------|
//! | Console TX        | 0    | UART0          |
//! | Console RX        | 1    | UART0          |
//! | Panel D/C         | 8    |                |
//! | Panel CS          | 9    |                |
//! | Panel SCK         | 10   | SPI1           |
//! | Panel MOSI        | 11   | SPI1           |
//! | Panel reset       | 12   |                |
//! | Backlight         | 13   | PWM slice 6 B  |
//! | Transceiver enable| 14   | active low     |
//! | Clear button      | 15   | pull-up        |

use lcdterm_core::Console;
use lcdterm_display::canvas::FONT;
use lcdterm_display::ili9488::{refresh_bytes, serial_bytes_during};

/// Lines that fit the 480x320 panel with a 7x14 font and 5 pixel spacing
pub const FRAME_LINES: usize = 16;

/// Characters per line
pub const LINE_CHARS: usize = lcdterm_core::MAX_LINE_CHAR_COUNT;

/// Console sized for this board
pub type BoardConsole = Console<FRAME_LINES, LINE_CHARS>;

/// Panel SPI clock
pub const SPI_FREQUENCY_HZ: u32 = 40_000_000;

/// Fastest baud rate the receive buffer is sized for
pub const MAX_BAUDRATE: u32 = 115_200;

/// Bytes that can arrive while the main task is busy with the slowest redraw
pub const REFRESH_BACKLOG: usize = serial_bytes_during(
    refresh_bytes(
        FRAME_LINES,
        LINE_CHARS,
        (
            FONT.character_size.width as usize,
            FONT.character_size.height as usize,
        ),
    ),
    SPI_FREQUENCY_HZ,
    MAX_BAUDRATE,
);

/// UART receive ring; must absorb a whole redraw's worth of input
pub const UART_RX_BUF_SIZE: usize = 4096;

/// UART transmit ring for the echo
pub const UART_TX_BUF_SIZE: usize = 1024;

const _: () = assert!(REFRESH_BACKLOG < UART_RX_BUF_SIZE);
