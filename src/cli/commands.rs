//! CLI command implementation
//!
//! Boot order:
//! 1. Parse arguments (environment fallbacks included)
//! 2. Install logging (stderr)
//! 3. Validate configuration
//! 4. Run one interactive session on stdin/stdout

use std::io;

use tracing::info;

use crate::engine::{Connector, MongoConnector};
use crate::session::{Session, SessionConfig};

use super::args::Cli;
use super::errors::CliResult;

/// Entry point used by `main`
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    crate::observability::init_logging();
    run_session(&cli.session_config(), &MongoConnector)
}

/// Run one session against stdin/stdout with the given connector
pub fn run_session<C: Connector>(config: &SessionConfig, connector: &C) -> CliResult<()> {
    config.validate()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    let report = session.run(connector, config)?;
    info!(query = %report.query, documents = report.documents, "session complete");
    Ok(())
}
