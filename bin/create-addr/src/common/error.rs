use alloy_primitives::hex::FromHexError;
use create_address::DeriveError;

/// Error types for the `create-addr` commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The sender, nonce or payload could not be turned into an address
    #[error(transparent)]
    Derive(#[from] DeriveError),

    /// Failed to read input or write output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid hex string
    #[error("Invalid hex string: {0}")]
    InvalidHex(#[from] FromHexError),

    /// Failed to serialize output
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to set up logging
    #[error("Failed to set up logging: {0}")]
    Logging(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for the `create-addr` commands
pub type Result<T> = std::result::Result<T, CliError>;
