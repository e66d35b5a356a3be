//! Encode module for inspecting the hashed preimage of a derivation

mod cmd;

pub use cmd::*;
