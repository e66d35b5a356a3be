use std::io::Write;

use clap::{Parser, Subcommand};

use crate::common::{LogArgs, Result};

/// Derive deterministic `CREATE` contract addresses
#[derive(Parser, Debug)]
#[command(name = "create-addr", infer_subcommands = true, version)]
pub struct MainCmd {
    /// Logging configuration
    #[command(flatten)]
    pub log_args: LogArgs,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the `create-addr` tool
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Derive the contract address for a sender and nonce
    Derive(crate::derive::Cmd),
    /// Show the hashed preimage and digest of a derivation
    Encode(crate::encode::Cmd),
    /// Decode an RLP `[sender, nonce]` payload and derive its contract address
    Decode(crate::decode::Cmd),
}

impl MainCmd {
    /// Execute the selected subcommand, writing its output to stdout
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.execute(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Execute the selected subcommand, writing its output to `out`
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        match &self.command {
            Command::Derive(cmd) => cmd.execute(out),
            Command::Encode(cmd) => cmd.execute(out),
            Command::Decode(cmd) => cmd.execute(out),
        }
    }
}
