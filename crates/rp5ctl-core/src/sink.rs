//! The `CommandSink` trait

use crate::error::Result;
use std::time::Duration;

/// A destination for single-byte commands.
///
/// The send loop is written against this trait so the same protocol logic
/// drives the real spidev bus and the in-memory recorder used in tests.
/// Implementations own the underlying bus session exclusively and release
/// it on drop.
pub trait CommandSink {
    /// Transfer one command byte to the peripheral.
    fn send(&mut self, cmd: u8) -> Result<()>;

    /// Block for the given settle interval.
    ///
    /// Part of the trait so test sinks can record delays instead of
    /// actually sleeping.
    fn delay(&mut self, interval: Duration);
}
