//! rp5ctl-linux-spi - Linux spidev backend
//!
//! Talks to the peripheral microcontroller through the kernel's spidev
//! interface at `/dev/spidevX.Y`, where X is the bus number and Y the chip
//! select.
//!
//! # Example
//!
//! ```no_run
//! use rp5ctl_linux_spi::{LinuxSpi, LinuxSpiConfig};
//! use rp5ctl_core::CommandSink;
//!
//! // Open with the controller's fixed settings (mode 1, 9600 Hz)
//! let mut spi = LinuxSpi::open(&LinuxSpiConfig::default())?;
//! spi.send(0x0a)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # System Requirements
//!
//! - Linux kernel with spidev support enabled (`CONFIG_SPI_SPIDEV`)
//! - Read/write access to the `/dev/spidevX.Y` device
//! - May require adding the user to the `spi` group or a udev rule

pub mod device;
pub mod error;

// Re-exports
pub use device::{LinuxSpi, LinuxSpiConfig};
pub use error::{LinuxSpiError, Result};
