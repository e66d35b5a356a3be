use std::io::Write;

use clap::Parser;
use tracing::info;

use crate::common::{
    write_derivation, write_json_line, CreateArgs, OutputArgs, Result, SchemeArgs,
};

/// Show the hashed preimage, digest and contract address of a derivation
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Sender and nonce
    #[command(flatten)]
    pub create_args: CreateArgs,

    /// Scheme configuration
    #[command(flatten)]
    pub scheme_args: SchemeArgs,

    /// Output configuration
    #[command(flatten)]
    pub output_args: OutputArgs,
}

impl Cmd {
    /// Execute the encode command
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        let (sender, nonce) = self.create_args.resolve()?;
        let derivation = self.scheme_args.deriver().trace(sender, nonce);
        info!(preimage_len = derivation.preimage.len(), "Encoded preimage");

        if self.output_args.json {
            write_json_line(out, &derivation)
        } else {
            write_derivation(out, &derivation)
        }
    }
}
