//! Command-line tool for deriving the addresses of contracts deployed with `CREATE`.

use std::process::ExitCode;

use clap::Parser;
use create_addr::MainCmd;
use tracing::error;

fn main() -> ExitCode {
    let cmd = MainCmd::parse();
    if let Err(e) = cmd.log_args.init() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match cmd.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
