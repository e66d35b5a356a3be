//! Decode module for reading back an RLP `[sender, nonce]` payload

mod cmd;

pub use cmd::*;
