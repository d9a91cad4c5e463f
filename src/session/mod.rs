//! Interactive session
//!
//! Drives one run of the demo:
//! - Connect and show the menu
//! - Read a selection until it is a valid query id
//! - Run the matching pipeline and print each result as a JSON line
//! - Print the document count
//!
//! Rejected selections are recovered locally. Everything else is fatal.

mod config;
mod driver;
mod errors;
mod input;

pub use config::{SessionConfig, DEFAULT_COLLECTION, DEFAULT_DATABASE};
pub use driver::{Session, SessionReport, SessionState};
pub use errors::{SelectionError, SessionError, SessionResult};
pub use input::{parse_selection, read_line};
