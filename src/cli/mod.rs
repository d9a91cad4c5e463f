//! CLI module for videodb
//!
//! Single command: connect, show the query menu, run the chosen
//! aggregation, print the results.

mod args;
mod commands;
mod errors;

pub use args::Cli;
pub use commands::{run, run_session};
pub use errors::{CliError, CliErrorCode, CliResult};
