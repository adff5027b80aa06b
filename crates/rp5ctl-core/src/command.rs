//! Command byte parsing and protocol constants

use std::num::ParseIntError;
use std::time::Duration;

/// Reserved command byte: toggle the host's power.
///
/// The peripheral only registers this as a power press when it arrives
/// twice with [`SETTLE_DELAY`] in between (master-side double-click).
pub const POWER_TOGGLE: u8 = 0x01;

/// Minimum spacing between consecutive transfers.
///
/// The receiving side chatters on faster transitions; anything above
/// 200 ms is safe, 500 ms keeps a comfortable margin.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Parse a command-line token as a command byte.
///
/// Tokens are base-16 with an optional `0x`/`0X` prefix, so `1`, `a`,
/// `ff` and `0x1f` are all accepted. Values above 0xFF are rejected
/// along with non-hex input.
pub fn parse_token(token: &str) -> Result<u8, ParseIntError> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u8::from_str_radix(digits, 16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_hex() {
        assert_eq!(parse_token("1").unwrap(), 0x01);
        assert_eq!(parse_token("a").unwrap(), 0x0a);
        assert_eq!(parse_token("ff").unwrap(), 0xff);
        assert_eq!(parse_token("00").unwrap(), 0x00);
    }

    #[test]
    fn test_parse_prefixed_hex() {
        assert_eq!(parse_token("0x1").unwrap(), 0x01);
        assert_eq!(parse_token("0X1f").unwrap(), 0x1f);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(parse_token("FF").unwrap(), 0xff);
        assert_eq!(parse_token("Ab").unwrap(), 0xab);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_token("zz").is_err());
        assert!(parse_token("").is_err());
        assert!(parse_token("0x").is_err());
        assert!(parse_token("1 2").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        // More than one byte does not fit a single transfer
        assert!(parse_token("100").is_err());
        assert!(parse_token("1ff").is_err());
    }
}
