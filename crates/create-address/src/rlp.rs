//! Length-prefixed (RLP) encoding of the `CREATE` preimage.
//!
//! Only byte strings, unsigned integers and lists of already-encoded items are supported. That is
//! everything the `[sender, nonce]` pair needs, and the decoder exists to read such a pair back.
//!
//! Items longer than 55 bytes use the long form, where the prefix carries the length of the
//! big-endian length that follows it:
//!
//! ```text
//! string, len <= 55   0x80 + len                   || bytes
//! string, len >  55   0xb7 + len(len) || len       || bytes
//! list,   len <= 55   0xc0 + len                   || payload
//! list,   len >  55   0xf7 + len(len) || len       || payload
//! ```
//!
//! A single byte in `0x00..=0x7f` is its own encoding.

use alloc::vec::Vec;

use alloy_primitives::{Address, U256};

use crate::{
    constants::{
        rlp::{
            EMPTY_LIST_CODE, EMPTY_STRING_CODE, LONG_LIST_OFFSET, LONG_STRING_OFFSET,
            MAX_SHORT_LENGTH,
        },
        ADDRESS_LENGTH,
    },
    RlpError,
};

/// The header of an encoded item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Whether the item is a list
    pub list: bool,
    /// Length of the payload that follows the header
    pub payload_length: usize,
}

impl Header {
    /// Creates the header of a byte string.
    pub const fn string(payload_length: usize) -> Self {
        Self { list: false, payload_length }
    }

    /// Creates the header of a list.
    pub const fn list(payload_length: usize) -> Self {
        Self { list: true, payload_length }
    }

    /// Returns the number of bytes [`Header::encode`] writes.
    pub const fn length(&self) -> usize {
        if self.payload_length <= MAX_SHORT_LENGTH {
            1
        } else {
            1 + length_of_length(self.payload_length)
        }
    }

    /// Encodes the header into `out`.
    pub fn encode(&self, out: &mut Vec<u8>) {
        let (short_code, long_offset) = if self.list {
            (EMPTY_LIST_CODE, LONG_LIST_OFFSET)
        } else {
            (EMPTY_STRING_CODE, LONG_STRING_OFFSET)
        };

        if self.payload_length <= MAX_SHORT_LENGTH {
            out.push(short_code + self.payload_length as u8);
        } else {
            let be = self.payload_length.to_be_bytes();
            let len_bytes = &be[leading_zeros(&be)..];
            out.push(long_offset + len_bytes.len() as u8);
            out.extend_from_slice(len_bytes);
        }
    }

    /// Decodes a header from the front of `buf` and advances `buf` past it.
    ///
    /// A byte in `0x00..=0x7f` is reported as a one-byte string and is left in `buf`, since it is
    /// its own payload.
    pub fn decode(buf: &mut &[u8]) -> Result<Self, RlpError> {
        let prefix = *buf.first().ok_or(RlpError::InputTooShort)?;
        if prefix < EMPTY_STRING_CODE {
            return Ok(Self::string(1));
        }
        *buf = &buf[1..];

        let header = match prefix {
            EMPTY_STRING_CODE..=LONG_STRING_OFFSET => {
                let payload_length = (prefix - EMPTY_STRING_CODE) as usize;
                // a single low byte must be encoded as itself
                if payload_length == 1 && buf.first().is_some_and(|b| *b < EMPTY_STRING_CODE) {
                    return Err(RlpError::NonCanonical);
                }
                Self::string(payload_length)
            }
            0xb8..=0xbf => Self::string(decode_long_length(buf, prefix - LONG_STRING_OFFSET)?),
            EMPTY_LIST_CODE..=LONG_LIST_OFFSET => {
                Self::list((prefix - EMPTY_LIST_CODE) as usize)
            }
            _ => Self::list(decode_long_length(buf, prefix - LONG_LIST_OFFSET)?),
        };

        if buf.len() < header.payload_length {
            return Err(RlpError::InputTooShort);
        }
        Ok(header)
    }
}

/// Reads the big-endian payload length of a long-form header.
fn decode_long_length(buf: &mut &[u8], len_of_len: u8) -> Result<usize, RlpError> {
    let len_of_len = len_of_len as usize;
    if len_of_len > core::mem::size_of::<usize>() {
        return Err(RlpError::Overflow);
    }
    let len_bytes = take(buf, len_of_len)?;
    if len_bytes[0] == 0 {
        return Err(RlpError::LeadingZero);
    }

    let mut be = [0u8; core::mem::size_of::<usize>()];
    be[core::mem::size_of::<usize>() - len_of_len..].copy_from_slice(len_bytes);
    let payload_length = usize::from_be_bytes(be);
    if payload_length <= MAX_SHORT_LENGTH {
        return Err(RlpError::NonCanonical);
    }
    Ok(payload_length)
}

const fn length_of_length(payload_length: usize) -> usize {
    core::mem::size_of::<usize>() - (payload_length.leading_zeros() as usize / 8)
}

fn leading_zeros(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| **b == 0).count()
}

fn take<'a>(buf: &mut &'a [u8], len: usize) -> Result<&'a [u8], RlpError> {
    if buf.len() < len {
        return Err(RlpError::InputTooShort);
    }
    let (head, rest) = buf.split_at(len);
    *buf = rest;
    Ok(head)
}

/// Returns the minimal big-endian representation of `value`: leading zero bytes are stripped,
/// and zero becomes the empty byte string.
pub fn minimal_be_bytes(value: U256) -> Vec<u8> {
    let word = value.to_be_bytes::<32>();
    word[leading_zeros(&word)..].to_vec()
}

/// Encodes a byte string into `out`.
pub fn encode_bytes(bytes: &[u8], out: &mut Vec<u8>) {
    if let [byte] = bytes {
        if *byte < EMPTY_STRING_CODE {
            out.push(*byte);
            return;
        }
    }
    Header::string(bytes.len()).encode(out);
    out.extend_from_slice(bytes);
}

/// Encodes an unsigned integer into `out` as the byte string of its minimal big-endian form.
pub fn encode_uint(value: U256, out: &mut Vec<u8>) {
    encode_bytes(&minimal_be_bytes(value), out);
}

/// Encodes a list of already-encoded items into `out`.
pub fn encode_list(items: &[&[u8]], out: &mut Vec<u8>) {
    let payload_length = items.iter().map(|item| item.len()).sum();
    Header::list(payload_length).encode(out);
    for item in items {
        out.extend_from_slice(item);
    }
}

/// Encodes the `[sender, nonce]` pair hashed by the EVM `CREATE` derivation.
pub fn encode_create_payload(sender: &Address, nonce: U256) -> Vec<u8> {
    let mut sender_item = Vec::with_capacity(1 + ADDRESS_LENGTH);
    encode_bytes(sender.as_slice(), &mut sender_item);
    let mut nonce_item = Vec::with_capacity(33);
    encode_uint(nonce, &mut nonce_item);

    let payload_length = sender_item.len() + nonce_item.len();
    let mut out = Vec::with_capacity(Header::list(payload_length).length() + payload_length);
    encode_list(&[sender_item.as_slice(), nonce_item.as_slice()], &mut out);
    out
}

/// Decodes a byte string from the front of `buf`.
pub fn decode_bytes<'a>(buf: &mut &'a [u8]) -> Result<&'a [u8], RlpError> {
    let header = Header::decode(buf)?;
    if header.list {
        return Err(RlpError::UnexpectedList);
    }
    take(buf, header.payload_length)
}

/// Decodes an unsigned integer from the front of `buf`. The integer must be in its minimal form.
pub fn decode_uint(buf: &mut &[u8]) -> Result<U256, RlpError> {
    let bytes = decode_bytes(buf)?;
    match bytes {
        [] => Ok(U256::ZERO),
        [0, ..] => Err(RlpError::LeadingZero),
        _ if bytes.len() > 32 => Err(RlpError::Overflow),
        _ => U256::try_from_be_slice(bytes).ok_or(RlpError::Overflow),
    }
}

/// Decodes a `[sender, nonce]` pair produced by [`encode_create_payload`].
pub fn decode_create_payload(payload: &[u8]) -> Result<(Address, U256), RlpError> {
    let mut buf = payload;
    let header = Header::decode(&mut buf)?;
    if !header.list {
        return Err(RlpError::UnexpectedString);
    }
    let mut body = take(&mut buf, header.payload_length)?;
    if !buf.is_empty() {
        return Err(RlpError::TrailingBytes(buf.len()));
    }

    let sender = decode_bytes(&mut body)?;
    if sender.len() != ADDRESS_LENGTH {
        return Err(RlpError::UnexpectedLength { expected: ADDRESS_LENGTH, got: sender.len() });
    }
    let nonce = decode_uint(&mut body)?;
    if !body.is_empty() {
        return Err(RlpError::TrailingBytes(body.len()));
    }

    Ok((Address::from_slice(sender), nonce))
}
