//! Derive module for computing contract addresses
//!
//! This module derives the address of the contract created by a sender at a nonce, or at a range
//! of consecutive nonces.

mod cmd;

pub use cmd::*;
