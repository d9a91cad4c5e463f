//! Session configuration

use serde::{Deserialize, Serialize};

use super::errors::{SessionError, SessionResult};

/// Database the sample data lives in
pub const DEFAULT_DATABASE: &str = "VideoDB";

/// Collection the pipelines run against
pub const DEFAULT_COLLECTION: &str = "Videos";

/// Where to connect and which collection to query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Connection string, passed to the driver untouched
    pub uri: String,

    #[serde(default = "default_database")]
    pub database: String,

    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

impl SessionConfig {
    /// Config for the sample collection at `uri`
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: default_database(),
            collection: default_collection(),
        }
    }

    /// Validate names; the URI is left to the driver
    pub fn validate(&self) -> SessionResult<()> {
        if self.database.trim().is_empty() {
            return Err(SessionError::Config("database name must not be empty".into()));
        }
        if self.collection.trim().is_empty() {
            return Err(SessionError::Config("collection name must not be empty".into()));
        }
        Ok(())
    }
}
