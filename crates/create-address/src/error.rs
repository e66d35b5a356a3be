//! Error types for address derivation.

use alloc::string::String;

/// Errors returned when no contract address can be derived for an input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeriveError {
    /// The sender is not a 20-byte hex address
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// The nonce is not a non-negative integer that fits in 256 bits
    #[error("Invalid nonce: {0}")]
    InvalidNonce(String),

    /// The length-prefixed payload is inconsistent or could not be decoded
    #[error("Encoding failure: {0}")]
    EncodingFailure(#[from] RlpError),
}

/// Errors produced while decoding a length-prefixed payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RlpError {
    /// The input ended before the item did
    #[error("input too short")]
    InputTooShort,

    /// A string was found where a list was expected
    #[error("unexpected string")]
    UnexpectedString,

    /// A list was found where a string was expected
    #[error("unexpected list")]
    UnexpectedList,

    /// The item is not in its shortest form
    #[error("non-canonical encoding")]
    NonCanonical,

    /// An integer has leading zero bytes
    #[error("leading zero in integer")]
    LeadingZero,

    /// An integer does not fit in 256 bits
    #[error("integer overflow")]
    Overflow,

    /// A string has the wrong length
    #[error("unexpected length: expected {expected}, got {got}")]
    UnexpectedLength {
        /// The expected length
        expected: usize,
        /// The actual length
        got: usize,
    },

    /// Bytes remain after the outermost item
    #[error("{0} trailing bytes")]
    TrailingBytes(usize),
}

/// Result type for address derivation.
pub type Result<T, E = DeriveError> = core::result::Result<T, E>;
