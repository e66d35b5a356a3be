//! Definitions of the contract address derivation schemes.

use alloc::{string::String, vec::Vec};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::{constants::zksync, rlp};

/// A way of turning a sender and a nonce into the bytes that are hashed.
///
/// Every scheme hashes its preimage with Keccak-256 and keeps the last 20 bytes of the digest as
/// the contract address; schemes differ only in the preimage.
pub trait CreateScheme {
    /// Builds the preimage hashed for `sender` and `nonce`.
    fn preimage(&self, sender: &Address, nonce: U256) -> Vec<u8>;
}

/// The Ethereum `CREATE` derivation: `keccak256(rlp([sender, nonce]))[12..]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvmCreate;

impl CreateScheme for EvmCreate {
    fn preimage(&self, sender: &Address, nonce: U256) -> Vec<u8> {
        rlp::encode_create_payload(sender, nonce)
    }
}

/// The zkSync Era `CREATE` derivation:
/// `keccak256(keccak256("zksyncCreate") || pad32(sender) || pad32(nonce))[12..]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZkSyncCreate;

impl CreateScheme for ZkSyncCreate {
    fn preimage(&self, sender: &Address, nonce: U256) -> Vec<u8> {
        let mut out = Vec::with_capacity(3 * zksync::WORD_LENGTH);
        out.extend_from_slice(zksync::CREATE_PREFIX.as_slice());
        out.extend_from_slice(sender.into_word().as_slice());
        out.extend_from_slice(&nonce.to_be_bytes::<32>());
        out
    }
}

/// The derivation scheme used by an [`AddressDeriver`](crate::AddressDeriver).
#[derive(
    Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum DerivationScheme {
    /// [`EvmCreate`], the reference scheme.
    #[default]
    Evm,
    /// [`ZkSyncCreate`].
    ZkSync,
}

/// String identifiers for the derivation schemes.
pub mod name {
    /// The string identifier for [`DerivationScheme::Evm`](super::DerivationScheme::Evm).
    pub const EVM: &str = "evm";
    /// The string identifier for [`DerivationScheme::ZkSync`](super::DerivationScheme::ZkSync).
    pub const ZKSYNC: &str = "zksync";
}

/// Error returned when parsing an unknown scheme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown derivation scheme: {0}")]
pub struct UnknownScheme(pub String);

impl DerivationScheme {
    /// All supported schemes.
    pub const ALL: [Self; 2] = [Self::Evm, Self::ZkSync];
}

impl CreateScheme for DerivationScheme {
    fn preimage(&self, sender: &Address, nonce: U256) -> Vec<u8> {
        match self {
            Self::Evm => EvmCreate.preimage(sender, nonce),
            Self::ZkSync => ZkSyncCreate.preimage(sender, nonce),
        }
    }
}

impl From<DerivationScheme> for &'static str {
    fn from(scheme: DerivationScheme) -> Self {
        match scheme {
            DerivationScheme::Evm => name::EVM,
            DerivationScheme::ZkSync => name::ZKSYNC,
        }
    }
}

impl FromStr for DerivationScheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            name::EVM => Ok(Self::Evm),
            name::ZKSYNC => Ok(Self::ZkSync),
            _ => Err(UnknownScheme(s.into())),
        }
    }
}

impl Display for DerivationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{}", s)
    }
}
