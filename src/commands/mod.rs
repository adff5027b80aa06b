//! CLI command implementations
//!
//! Commands are written against the `CommandSink` seam from rp5ctl-core,
//! so the same loop drives the real spidev bus and the recording sink
//! used by the integration tests.

pub mod send;
