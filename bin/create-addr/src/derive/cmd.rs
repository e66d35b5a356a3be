use std::io::Write;

use clap::Parser;
use tracing::{debug, info};

use crate::common::{
    write_address_line, write_json_line, CreateArgs, OutputArgs, Result, SchemeArgs,
};

/// Derive the contract address for a sender and nonce
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Sender and nonce
    #[command(flatten)]
    pub create_args: CreateArgs,

    /// Number of consecutive nonces to derive, starting at `--nonce`
    #[arg(
        long = "count",
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub count: u64,

    /// Scheme configuration
    #[command(flatten)]
    pub scheme_args: SchemeArgs,

    /// Output configuration
    #[command(flatten)]
    pub output_args: OutputArgs,
}

impl Cmd {
    /// Execute the derive command
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        let (sender, nonce) = self.create_args.resolve()?;
        let deriver = self.scheme_args.deriver();
        info!(
            %sender,
            %nonce,
            count = self.count,
            scheme = %deriver.scheme(),
            "Deriving contract addresses"
        );

        let with_nonce = self.count > 1;
        let mut derived = 0u64;
        for derivation in deriver.trace_range(sender, nonce, self.count) {
            if self.output_args.json {
                write_json_line(out, &derivation)?;
            } else {
                write_address_line(out, &derivation, with_nonce)?;
            }
            derived += 1;
        }

        debug!(derived, "Derivation finished");
        Ok(())
    }
}
