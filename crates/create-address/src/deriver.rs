//! The contract address deriver.

use alloc::string::String;

use alloy_primitives::{hex, keccak256, Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    constants::ADDRESS_OFFSET,
    input::{parse_address, parse_nonce},
    rlp, CreateScheme, DerivationScheme, Result,
};

/// Derives the address of a contract created by a sender at a given nonce.
///
/// The deriver is a pure function of its scheme: deriving the same `(sender, nonce)` twice yields
/// the same address, and derivations share no state, so a deriver may be copied freely across
/// threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressDeriver {
    scheme: DerivationScheme,
}

/// Every intermediate value of a single derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Derivation {
    /// The scheme used
    pub scheme: DerivationScheme,
    /// The creator of the contract
    pub sender: Address,
    /// The creator's nonce
    pub nonce: U256,
    /// The bytes that were hashed
    pub preimage: Bytes,
    /// `keccak256(preimage)`
    pub digest: B256,
    /// The last 20 bytes of `digest`
    pub contract_address: Address,
}

impl AddressDeriver {
    /// Creates a deriver for the given scheme.
    pub const fn new(scheme: DerivationScheme) -> Self {
        Self { scheme }
    }

    /// Returns the scheme of this deriver.
    pub const fn scheme(&self) -> DerivationScheme {
        self.scheme
    }

    /// Derives the contract address for `sender` and `nonce`.
    pub fn derive(&self, sender: Address, nonce: U256) -> Address {
        self.trace(sender, nonce).contract_address
    }

    /// Derives the contract address from a textual sender and nonce.
    ///
    /// Fails with [`DeriveError::InvalidAddress`](crate::DeriveError::InvalidAddress) if the
    /// sender is not a 20-byte hex string, and with
    /// [`DeriveError::InvalidNonce`](crate::DeriveError::InvalidNonce) if the nonce is not a
    /// non-negative integer.
    pub fn derive_str(&self, sender: &str, nonce: &str) -> Result<Address> {
        let sender = parse_address(sender)?;
        let nonce = parse_nonce(nonce)?;
        Ok(self.derive(sender, nonce))
    }

    /// Derives the contract address and returns every intermediate value.
    pub fn trace(&self, sender: Address, nonce: U256) -> Derivation {
        let preimage = self.scheme.preimage(&sender, nonce);
        let digest = keccak256(&preimage);
        let contract_address = Address::from_slice(&digest[ADDRESS_OFFSET..]);
        trace!(
            scheme = %self.scheme,
            %sender,
            %nonce,
            preimage = %hex::encode(&preimage),
            %digest,
            %contract_address,
            "Derived contract address"
        );

        Derivation {
            scheme: self.scheme,
            sender,
            nonce,
            preimage: preimage.into(),
            digest,
            contract_address,
        }
    }

    /// Derives the contract address for every nonce in `first_nonce..first_nonce + count`.
    ///
    /// Nonces past `U256::MAX` are not derived, so fewer than `count` items may be returned.
    pub fn trace_range(
        &self,
        sender: Address,
        first_nonce: U256,
        count: u64,
    ) -> impl Iterator<Item = Derivation> + '_ {
        (0..count)
            .map_while(move |offset| first_nonce.checked_add(U256::from(offset)))
            .map(move |nonce| self.trace(sender, nonce))
    }

    /// Decodes an EVM `CREATE` payload, `rlp([sender, nonce])`, and derives the contract address
    /// of the decoded pair with this deriver's scheme.
    ///
    /// Fails with [`DeriveError::EncodingFailure`](crate::DeriveError::EncodingFailure) if the
    /// payload is not a canonical `[sender, nonce]` pair.
    pub fn trace_payload(&self, payload: &[u8]) -> Result<Derivation> {
        let (sender, nonce) = rlp::decode_create_payload(payload)?;
        Ok(self.trace(sender, nonce))
    }
}

/// Computes the EVM `CREATE` address of `sender` at `nonce`, i.e.
/// `keccak256(rlp([sender, nonce]))[12..]`.
pub fn create_address(sender: Address, nonce: u64) -> Address {
    AddressDeriver::default().derive(sender, U256::from(nonce))
}

/// Renders an address as a lowercase hex string with a `0x` prefix.
pub fn format_address(address: &Address) -> String {
    hex::encode_prefixed(address)
}
