//! rp5ctl-dummy - In-memory command sink for testing
//!
//! This crate provides a dummy sink that records every bus action in order
//! instead of touching hardware. It's useful for testing and development
//! without a wired-up peripheral, and can inject transfer faults to
//! exercise error paths.

use rp5ctl_core::error::{Error, Result};
use rp5ctl_core::sink::CommandSink;
use std::time::Duration;

/// One recorded bus action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A command byte was transferred
    Send(u8),
    /// The sink was asked to wait
    Delay(Duration),
}

/// Dummy command sink
///
/// Records sends and delays in arrival order for later inspection.
#[derive(Debug, Default)]
pub struct DummySink {
    actions: Vec<Action>,
    /// Fail every send once this many have succeeded
    fail_after: Option<usize>,
    sends: usize,
}

impl DummySink {
    /// Create a new recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink whose sends fail after `n` successful transfers
    pub fn failing_after(n: usize) -> Self {
        Self {
            fail_after: Some(n),
            ..Self::default()
        }
    }

    /// All recorded actions, in order
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// The bytes transferred so far, in order
    pub fn sent_bytes(&self) -> Vec<u8> {
        self.actions
            .iter()
            .filter_map(|a| match a {
                Action::Send(b) => Some(*b),
                Action::Delay(_) => None,
            })
            .collect()
    }

    /// How many delays were requested
    pub fn delay_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, Action::Delay(_)))
            .count()
    }
}

impl CommandSink for DummySink {
    fn send(&mut self, cmd: u8) -> Result<()> {
        if let Some(limit) = self.fail_after {
            if self.sends >= limit {
                log::debug!("dummy: Injecting transfer fault for 0x{:02x}", cmd);
                return Err(Error::TransferFailed);
            }
        }
        self.sends += 1;
        self.actions.push(Action::Send(cmd));
        Ok(())
    }

    fn delay(&mut self, interval: Duration) {
        // Recorded, never slept, so tests stay fast
        self.actions.push(Action::Delay(interval));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut sink = DummySink::new();
        sink.send(0x0a).unwrap();
        sink.delay(Duration::from_millis(500));
        sink.send(0x01).unwrap();

        assert_eq!(
            sink.actions(),
            &[
                Action::Send(0x0a),
                Action::Delay(Duration::from_millis(500)),
                Action::Send(0x01),
            ]
        );
        assert_eq!(sink.sent_bytes(), vec![0x0a, 0x01]);
        assert_eq!(sink.delay_count(), 1);
    }

    #[test]
    fn test_fault_injection() {
        let mut sink = DummySink::failing_after(1);
        assert!(sink.send(0x02).is_ok());
        assert_eq!(sink.send(0x03), Err(Error::TransferFailed));
        // The failed send is not recorded
        assert_eq!(sink.sent_bytes(), vec![0x02]);
    }
}
