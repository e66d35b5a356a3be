//! Constants for contract address derivation.
//!
//! It groups the constants for the length-prefixed encoding and for each derivation scheme as
//! sub-modules.

/// The length of an account address in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// The length of a Keccak-256 digest in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// Offset into the digest where the derived address starts. The address is the last
/// [`ADDRESS_LENGTH`] bytes of the digest.
pub const ADDRESS_OFFSET: usize = DIGEST_LENGTH - ADDRESS_LENGTH;

/// Constants for the RLP encoding.
pub mod rlp {
    /// Prefix of a byte string whose length fits in the prefix byte.
    pub const EMPTY_STRING_CODE: u8 = 0x80;
    /// Prefix of a list whose payload length fits in the prefix byte.
    pub const EMPTY_LIST_CODE: u8 = 0xc0;
    /// The longest payload that is encoded with a single-byte header.
    pub const MAX_SHORT_LENGTH: usize = 55;
    /// Base of the long string prefix, `0xb7 + length_of_length`.
    pub const LONG_STRING_OFFSET: u8 = EMPTY_STRING_CODE + MAX_SHORT_LENGTH as u8;
    /// Base of the long list prefix, `0xf7 + length_of_length`.
    pub const LONG_LIST_OFFSET: u8 = EMPTY_LIST_CODE + MAX_SHORT_LENGTH as u8;
}

/// Constants for the zkSync Era `CREATE` derivation.
pub mod zksync {
    use alloy_primitives::{b256, B256};

    /// The domain separator hashed in front of the sender and nonce. The value is
    /// `keccak256("zksyncCreate")`.
    pub const CREATE_PREFIX: B256 =
        b256!("0x63bae3a9951d38e8a3fbb7b70909afc1200610fc5bc55ade242f815974674f23");

    /// The width every field of the preimage is left-padded to.
    pub const WORD_LENGTH: usize = 32;
}
