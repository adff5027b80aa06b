//! rp5ctl-core - protocol core for the rp5ctl controller
//!
//! This crate defines the pieces shared by every bus backend:
//!
//! - the [`CommandSink`] trait, the seam between the send loop and a
//!   concrete bus (Linux spidev, or an in-memory recorder for tests),
//! - hex token parsing for command-line arguments,
//! - the wire protocol constants (power-toggle code, settle delay).
//!
//! # Protocol
//!
//! The peripheral accepts one command byte per SPI transfer. Consecutive
//! transfers must be spaced by [`SETTLE_DELAY`] to avoid chattering on the
//! receiving side. The byte [`POWER_TOGGLE`] is reserved: the peripheral's
//! master-side power logic only acts on it when it arrives twice, a
//! [`SETTLE_DELAY`] apart, simulating a double-click of the power button.
//! All other byte values are opaque pass-through commands for the attached
//! AV equipment.

pub mod command;
pub mod error;
pub mod sink;

// Re-exports
pub use command::{parse_token, POWER_TOGGLE, SETTLE_DELAY};
pub use error::{Error, Result};
pub use sink::CommandSink;
