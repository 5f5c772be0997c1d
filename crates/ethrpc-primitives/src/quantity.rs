//! Hex quantity conversions.
//!
//! Nodes encode numbers as `0x`-prefixed big-endian hex strings
//! ("quantities"). [`hex_to_u256`] turns them into [`U256`]. [`parse_u64_auto`]
//! picks the base from the prefix the way Go's `strconv.ParseUint(s, 0, 64)`
//! does, which some nodes' transaction counts rely on.

use primitive_types::U256;
use thiserror::Error;

/// Maximum number of significant hex digits in a 256-bit value
const MAX_U256_DIGITS: usize = 64;

/// Quantity parsing error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuantityError {
    /// Nothing left to parse after removing the prefix
    #[error("empty quantity")]
    Empty,
    /// Character that is not a digit of the detected base
    #[error("invalid digit in quantity {0:?}")]
    InvalidDigit(String),
    /// Value does not fit the target integer
    #[error("quantity {0:?} overflows")]
    Overflow(String),
}

/// Convert a hex quantity (`0x`-prefix optional) to a [`U256`].
///
/// `hex_to_u256("0x0")` is zero and `hex_to_u256("0x10")` is 16. Leading
/// zeros are accepted. Anything wider than 256 bits is an overflow.
pub fn hex_to_u256(s: &str) -> Result<U256, QuantityError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    if digits.is_empty() {
        return Err(QuantityError::Empty);
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(QuantityError::InvalidDigit(s.to_string()));
    }

    let significant = digits.trim_start_matches('0');
    if significant.len() > MAX_U256_DIGITS {
        return Err(QuantityError::Overflow(s.to_string()));
    }

    let mut value = U256::zero();
    for c in significant.chars() {
        // checked above
        let digit = c.to_digit(16).unwrap_or_default();
        value = value * U256::from(16u8) + U256::from(digit);
    }
    Ok(value)
}

/// Parse an unsigned 64-bit integer, detecting the base from its prefix.
///
/// `0x`/`0X` is hex, `0b`/`0B` is binary, `0o`/`0O` or a bare leading `0` is
/// octal, and everything else is decimal. Signs are rejected.
pub fn parse_u64_auto(s: &str) -> Result<u64, QuantityError> {
    let (radix, digits) = if let Some(rest) = strip_prefix_ci(s, "0x") {
        (16, rest)
    } else if let Some(rest) = strip_prefix_ci(s, "0b") {
        (2, rest)
    } else if let Some(rest) = strip_prefix_ci(s, "0o") {
        (8, rest)
    } else if s.len() > 1 && s.starts_with('0') {
        (8, &s[1..])
    } else {
        (10, s)
    };

    if digits.is_empty() {
        return Err(QuantityError::Empty);
    }
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(QuantityError::InvalidDigit(s.to_string()));
    }
    u64::from_str_radix(digits, radix).map_err(|_| QuantityError::Overflow(s.to_string()))
}

/// Format a [`U256`] as a minimal `0x`-prefixed lowercase hex quantity.
pub fn u256_to_hex(value: &U256) -> String {
    format!("0x{:x}", value)
}

fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    match s.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(&s[prefix.len()..]),
        _ => None,
    }
}
