use std::io::Write;

use clap::Parser;
use tracing::{debug, info};

use crate::common::{
    load_hex, write_derivation, write_json_line, CliError, OutputArgs, Result, SchemeArgs,
};

/// Decode an RLP `[sender, nonce]` payload and derive its contract address
#[derive(Parser, Debug)]
pub struct Cmd {
    /// RLP payload as hex string (positional argument)
    #[arg(value_name = "PAYLOAD")]
    pub payload: Option<String>,

    /// File containing the RLP payload. If '-' is specified, the payload is read from stdin
    #[arg(long = "payloadfile", visible_aliases = ["payload-file"])]
    pub payload_file: Option<String>,

    /// Scheme configuration
    #[command(flatten)]
    pub scheme_args: SchemeArgs,

    /// Output configuration
    #[command(flatten)]
    pub output_args: OutputArgs,
}

impl Cmd {
    /// Execute the decode command
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        let payload = load_hex(self.payload.as_deref(), self.payload_file.as_deref())?
            .ok_or_else(|| CliError::InvalidInput("no payload given".to_string()))?;
        debug!(len = payload.len(), "Loaded payload");

        let derivation = self.scheme_args.deriver().trace_payload(&payload)?;
        info!(sender = %derivation.sender, nonce = %derivation.nonce, "Decoded payload");

        if self.output_args.json {
            write_json_line(out, &derivation)
        } else {
            write_derivation(out, &derivation)
        }
    }
}
