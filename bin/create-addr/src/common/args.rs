//! Argument groups shared by the subcommands.

use alloy_primitives::{Address, U256};
use clap::Parser;
use create_address::{parse_address, parse_nonce, AddressDeriver, DerivationScheme};

use super::Result;

/// Derivation scheme selection
#[derive(Parser, Debug, Clone)]
pub struct SchemeArgs {
    /// Address derivation scheme (`evm` or `zksync`)
    #[arg(
        long = "scheme",
        env = "CREATE_ADDR_SCHEME",
        value_parser,
        default_value_t = DerivationScheme::Evm
    )]
    pub scheme: DerivationScheme,
}

impl SchemeArgs {
    /// Creates the deriver for the selected scheme
    pub fn deriver(&self) -> AddressDeriver {
        AddressDeriver::new(self.scheme)
    }
}

/// Sender and nonce of the contract creation
#[derive(Parser, Debug, Clone)]
pub struct CreateArgs {
    /// Address of the account creating the contract (20-byte hex, `0x` prefix optional)
    #[arg(long = "sender", visible_aliases = ["from"], env = "CREATE_ADDR_SENDER")]
    pub sender: String,

    /// Nonce of the sender at creation time (decimal, or hex with a `0x` prefix)
    #[arg(
        long = "nonce",
        env = "CREATE_ADDR_NONCE",
        default_value = "0",
        allow_hyphen_values = true
    )]
    pub nonce: String,
}

impl CreateArgs {
    /// Parses and validates the sender and nonce
    pub fn resolve(&self) -> Result<(Address, U256)> {
        let sender = parse_address(&self.sender)?;
        let nonce = parse_nonce(&self.nonce)?;
        Ok((sender, nonce))
    }
}

/// Output format selection
#[derive(Parser, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Print every derivation as a JSON object on its own line
    #[arg(long = "json")]
    pub json: bool,
}
