//! Parsing of textual senders and nonces.

use alloc::{format, string::ToString};

use alloy_primitives::{hex, Address, U256};

use crate::{constants::ADDRESS_LENGTH, DeriveError, Result};

/// Strips a single `0x` or `0X` prefix, if present.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}

/// Parses a 20-byte address from a hex string.
///
/// Surrounding whitespace and one `0x`/`0X` prefix are ignored. Digits are case-insensitive and
/// mixed-case input is accepted without checksum validation.
pub fn parse_address(input: &str) -> Result<Address> {
    let trimmed = input.trim();
    let digits = strip_hex_prefix(trimmed);

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DeriveError::InvalidAddress(format!("non-hex character in {trimmed:?}")));
    }
    if digits.len() != 2 * ADDRESS_LENGTH {
        return Err(DeriveError::InvalidAddress(format!(
            "expected {} hex characters, got {} ({} bytes)",
            2 * ADDRESS_LENGTH,
            digits.len(),
            digits.len() / 2
        )));
    }

    let mut bytes = [0u8; ADDRESS_LENGTH];
    hex::decode_to_slice(digits, &mut bytes)
        .map_err(|e| DeriveError::InvalidAddress(e.to_string()))?;
    Ok(Address::from(bytes))
}

/// Parses a non-negative nonce.
///
/// Accepts a decimal integer, or a hex integer with a `0x`/`0X` prefix. Signs, fractions and
/// values that do not fit in 256 bits are rejected.
pub fn parse_nonce(input: &str) -> Result<U256> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DeriveError::InvalidNonce("empty nonce".to_string()));
    }
    if trimmed.starts_with('-') {
        return Err(DeriveError::InvalidNonce(format!("nonce must not be negative: {trimmed}")));
    }

    let digits = strip_hex_prefix(trimmed);
    let radix = if digits.len() == trimmed.len() { 10 } else { 16 };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(DeriveError::InvalidNonce(format!("not a non-negative integer: {trimmed}")));
    }

    U256::from_str_radix(digits, radix as u64).map_err(|_| {
        DeriveError::InvalidNonce(format!("nonce does not fit in 256 bits: {trimmed}"))
    })
}
