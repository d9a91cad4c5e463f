//! Session error types
//!
//! `SelectionError` is recovered inside the input loop.
//! Every `SessionError` aborts the session.

use std::io;

use thiserror::Error;

use crate::catalog::CatalogError;

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Fatal session errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// Invalid session configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Could not reach the database server
    #[error("Failed to connect to the database server: {0}")]
    Connection(String),

    /// Server rejected the aggregation
    #[error("Query execution failed: {0}")]
    Query(String),

    /// Result cursor failed after it was opened
    #[error("Result stream interrupted: {0}")]
    Stream(String),

    /// Catalog lookup failed for a validated id
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// stdin reached end of input before a valid selection
    #[error("Input closed before a query was selected")]
    InputClosed,

    /// stdin/stdout failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Rejected menu selection, reported to the user and re-prompted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Input is not an integer
    #[error("Query must be a number but was '{0}'")]
    InvalidInput(String),

    /// Integer outside the supported range
    #[error("Query must be between 3 and 9 but was {0}")]
    OutOfRange(i32),
}
