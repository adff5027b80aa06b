//! rp5ctl - Raspberry Pi 5 power and AV equipment controller
//!
//! Sends single-byte command codes over SPI to a peripheral
//! microcontroller that power-cycles the Pi and drives attached AV
//! equipment. Command bytes are given as hex tokens on the command line
//! and transmitted in order; the reserved power-toggle byte (0x01) is
//! sent twice per the peripheral's double-click power protocol.

use clap::Parser;
use rp5ctl::cli::Cli;
use rp5ctl::commands;
use rp5ctl_linux_spi::{LinuxSpi, LinuxSpiConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbosity
    match cli.verbose {
        0 => {} // default (info)
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    }

    if cli.tokens.is_empty() {
        log::warn!("No command tokens given; nothing to send");
    }

    // The bus is opened once before any transmission and released on drop
    // on every exit path, including transfer faults.
    let mut spi = LinuxSpi::open(&LinuxSpiConfig::default())?;
    commands::send::run_send(&mut spi, &cli.tokens)?;

    Ok(())
}
