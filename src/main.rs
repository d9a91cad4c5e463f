//! videodb CLI entry point
//!
//! All logic is delegated to the CLI module. Errors are printed to stderr
//! and the process exits non-zero.

use videodb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
