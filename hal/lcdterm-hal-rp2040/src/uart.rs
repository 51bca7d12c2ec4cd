//! Buffered UART transmitter
//!
//! The console writes through the interrupt-driven buffered UART, so the
//! echo of one byte never waits for the previous one to leave the wire.

use embassy_rp::uart::{self, BufferedUartTx};
use embedded_io::Write;
use lcdterm_hal::uart::{DataBits, Parity, StopBits, UartConfig, UartTx};

/// UART line errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartBusError {
    /// Receive FIFO overflowed
    Overrun,
    /// Line held low for longer than a frame
    Break,
    /// Parity check failed
    Parity,
    /// Stop bit missing
    Framing,
}

impl From<uart::Error> for UartBusError {
    #[allow(unreachable_patterns)]
    fn from(err: uart::Error) -> Self {
        match err {
            uart::Error::Overrun => Self::Overrun,
            uart::Error::Break => Self::Break,
            uart::Error::Parity => Self::Parity,
            uart::Error::Framing => Self::Framing,
            _ => Self::Framing,
        }
    }
}

/// Translate line settings into embassy-rp's UART configuration
///
/// Flow control is wired per board, not configured here.
pub fn line_config(config: &UartConfig) -> uart::Config {
    let mut cfg = uart::Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    cfg
}

/// Transmit half of a buffered UART
pub struct SerialTx {
    tx: BufferedUartTx,
}

impl SerialTx {
    pub fn new(tx: BufferedUartTx) -> Self {
        Self { tx }
    }
}

impl UartTx for SerialTx {
    type Error = UartBusError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.write_all(data).map_err(UartBusError::from)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Write::flush(&mut self.tx).map_err(UartBusError::from)
    }
}
