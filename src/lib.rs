//! Library surface of the rp5ctl CLI
//!
//! Exposed so the integration tests can drive the send loop against the
//! recording sink from rp5ctl-dummy.

pub mod cli;
pub mod commands;
