//! lcdterm - Serial Line Display Firmware
//!
//! Shows text received on the console UART as scrolling lines on an ILI9488
//! panel. Every byte is echoed back; a completed line triggers a redraw, and
//! the clear button wipes both the stored lines and the screen.
//!
//! The receive and button tasks only record what happened. This main task
//! owns the panel and performs every redraw.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use lcdterm_core::echo::send_greeting;
use lcdterm_core::traits::TextCanvas;
use lcdterm_core::{ConsoleEvent, Screen};
use lcdterm_display::{GraphicsCanvas, Ili9488};
use lcdterm_hal::uart::FlowControl;
use lcdterm_hal::OutputPin;
use lcdterm_hal_rp2040::{line_config, Button, PinOutput, PwmBacklight, SerialTx};

use crate::board::{
    FRAME_LINES, LINE_CHARS, MAX_BAUDRATE, REFRESH_BACKLOG, SPI_FREQUENCY_HZ, UART_RX_BUF_SIZE,
    UART_TX_BUF_SIZE,
};
use crate::channels::{CONSOLE, PENDING, WAKE};

mod board;
mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; UART_TX_BUF_SIZE]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; UART_RX_BUF_SIZE]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("lcdterm firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // The RS-232 transceiver is enabled by pulling its enable line low
    let mut transceiver = PinOutput::new(Output::new(p.PIN_14, Level::High));
    transceiver.set_low();

    if config.serial.flow_control == FlowControl::RtsCts {
        warn!("RTS/CTS requested but not wired on this board, ignoring");
    }

    if config.serial.baudrate > MAX_BAUDRATE {
        warn!(
            "{} baud is above {}, input may overrun during a full redraw",
            config.serial.baudrate, MAX_BAUDRATE
        );
    }

    let tx_buf = TX_BUF.init([0u8; UART_TX_BUF_SIZE]);
    let rx_buf = RX_BUF.init([0u8; UART_RX_BUF_SIZE]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, line_config(&config.serial));
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    let mut tx = SerialTx::new(tx);

    info!(
        "UART initialized at {} baud, {} byte backlog per full redraw",
        config.serial.baudrate, REFRESH_BACKLOG
    );

    if let Err(e) = send_greeting(&mut tx) {
        warn!("Greeting failed: {:?}", e);
    }

    let button = Button::new(Input::new(p.PIN_15, Pull::Up), config.button.debounce_ms);

    // Panel on SPI1, write only
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = SPI_FREQUENCY_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, spi_config);

    let mut panel = Ili9488::new(
        spi,
        Output::new(p.PIN_8, Level::Low),
        Output::new(p.PIN_9, Level::High),
        Output::new(p.PIN_12, Level::High),
    );
    if let Err(e) = panel.init(&mut Delay) {
        error!("Panel init failed: {:?}", e);
    }

    let backlight = PwmBacklight::new(Pwm::new_output_b(
        p.PWM_SLICE6,
        p.PIN_13,
        PwmConfig::default(),
    ));

    let mut canvas = GraphicsCanvas::new(panel, backlight);
    let screen = Screen::new(&config, &canvas);

    let (width, height) = canvas.pixel_dimensions();
    info!("Width = {}, Height = {}", width, height);
    if !screen.layout().fits(FRAME_LINES, LINE_CHARS, (width, height)) {
        warn!(
            "{} lines of {} characters overflow the panel, check [layout]",
            FRAME_LINES, LINE_CHARS
        );
    }

    match screen.power_on(&mut canvas) {
        Ok(()) => info!("LCD ON"),
        Err(e) => error!("Panel power on failed: {:?}", e),
    }

    spawner.spawn(tasks::serial_rx_task(rx, tx)).unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        WAKE.wait().await;

        while let Some(event) = PENDING.take() {
            let mut console = CONSOLE.lock().await;

            if event == ConsoleEvent::ResetRequested {
                info!("key pressed");
            }

            if let Err(e) = screen.handle(event, &mut *console, &mut canvas) {
                warn!("Redraw failed: {:?}", e);
            }

            let ring = console.ring();
            trace!("[{},{}]", ring.read_cursor(), ring.write_cursor());
        }
    }
}
