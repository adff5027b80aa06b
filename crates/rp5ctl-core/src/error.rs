//! Error type shared across bus backends

use thiserror::Error;

/// Core error type
///
/// Backends map their own richer error enums into this at the
/// [`CommandSink`](crate::CommandSink) boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// SPI transfer failed
    #[error("SPI transfer failed")]
    TransferFailed,
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, Error>;
