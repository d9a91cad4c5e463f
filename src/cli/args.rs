//! CLI argument definitions using clap
//!
//! No subcommands. Every option can come from the environment, so the
//! demo runs with no flags:
//! - MONGODB_URI=mongodb://localhost:27017 videodb

use clap::Parser;

use crate::session::{SessionConfig, DEFAULT_COLLECTION, DEFAULT_DATABASE};

/// Run one of the VideoDB sample aggregations interactively
#[derive(Parser, Debug)]
#[command(name = "videodb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    pub uri: String,

    /// Database holding the sample data
    #[arg(long, env = "VIDEODB_DATABASE", default_value = DEFAULT_DATABASE)]
    pub database: String,

    /// Collection the queries run against
    #[arg(long, env = "VIDEODB_COLLECTION", default_value = DEFAULT_COLLECTION)]
    pub collection: String,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Session configuration from the parsed arguments
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            uri: self.uri.clone(),
            database: self.database.clone(),
            collection: self.collection.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let cli = Cli::try_parse_from(["videodb", "--uri", "mongodb://localhost"]).unwrap();
        let config = cli.session_config();
        assert_eq!(config.uri, "mongodb://localhost");
        assert_eq!(config.database, "VideoDB");
        assert_eq!(config.collection, "Videos");
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "videodb",
            "--uri",
            "mongodb://db",
            "--database",
            "Other",
            "--collection",
            "Clips",
        ])
        .unwrap();
        assert_eq!(cli.database, "Other");
        assert_eq!(cli.collection, "Clips");
    }
}
