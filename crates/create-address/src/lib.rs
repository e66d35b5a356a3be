//! Deterministic derivation of the addresses of contracts deployed with `CREATE`.
//!
//! A contract created by `sender` at `nonce` lives at the last 20 bytes of a Keccak-256 digest.
//! The bytes that are hashed depend on the chain:
//!
//! - [`DerivationScheme::Evm`] hashes `rlp([sender, nonce])`. This is the reference scheme.
//! - [`DerivationScheme::ZkSync`] hashes `keccak256("zksyncCreate") || pad32(sender) ||
//!   pad32(nonce)`.
//!
//! ```
//! use create_address::{format_address, AddressDeriver};
//!
//! let address = AddressDeriver::default()
//!     .derive_str("0x0000000000000000000000000000000000008006", "3")
//!     .unwrap();
//! assert_eq!(format_address(&address), "0x39ac642b4792e7c424fba677e7b6f9b2d24a65f9");
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod constants;
pub mod rlp;

mod deriver;
pub use deriver::*;

mod error;
pub use error::*;

mod input;
pub use input::*;

mod scheme;
pub use scheme::*;

pub use alloy_primitives;
