//! Send command implementation

use rp5ctl_core::{parse_token, CommandSink, Result, POWER_TOGGLE, SETTLE_DELAY};

/// Transmit each hex token over the bus, in order.
///
/// Tokens that fail to parse are reported and skipped; the loop carries
/// on with the next token. A bus fault is fatal and propagates.
pub fn run_send<S: CommandSink + ?Sized>(sink: &mut S, tokens: &[String]) -> Result<()> {
    // Retained across iterations: a token that fails to parse leaves the
    // previous value in place, and the power-toggle check below reads
    // whatever is current, so a bad token after `1` re-fires the toggle.
    let mut cmd: u8 = 0;

    for token in tokens {
        match parse_token(token) {
            Ok(value) => {
                cmd = value;
                sink.send(cmd)?;
                println!("Sent command 0x{:02x}", cmd);
            }
            Err(_) => {
                eprintln!("Not a hex byte value: {}", token);
            }
        }

        // Chattering prevention, applied after every token
        sink.delay(SETTLE_DELAY);

        if cmd == POWER_TOGGLE {
            // The peripheral only registers a power press when the toggle
            // byte arrives twice, a settle delay apart (master-side
            // double-click). Second transmit goes out before the delay.
            println!("Toggling RPi power");
            sink.send(cmd)?;
            println!("Sent command 0x{:02x}", cmd);
            sink.delay(SETTLE_DELAY);
        }
    }

    Ok(())
}
