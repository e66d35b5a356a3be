//! Library half of the `create-addr` command-line tool.
//!
//! Each subcommand lives in its own module with a `Cmd` argument struct. Commands write their
//! output to any [`std::io::Write`], so they can be exercised without a terminal.

mod cmd;
pub use cmd::*;

pub mod common;
pub mod decode;
pub mod derive;
pub mod encode;
