//! Boundary to the external query engine
//!
//! The session only talks to the database through [`Connector`] and
//! [`QueryEngine`], so scenarios can run against an in-memory engine.
//! [`MongoConnector`] is the production implementation.

mod document;
mod mongo;

pub use document::ResultDocument;
pub use mongo::{MongoConnector, MongoCursor, MongoEngine};

use tracing::debug;

use crate::catalog::Pipeline;
use crate::session::{SessionConfig, SessionResult};

/// Executes aggregation pipelines against one collection
pub trait QueryEngine {
    /// Lazy, finite, forward-only result stream
    type Cursor: Iterator<Item = SessionResult<ResultDocument>>;

    /// Submit a pipeline; fails with `SessionError::Query` if rejected
    fn aggregate(&self, pipeline: Pipeline) -> SessionResult<Self::Cursor>;
}

/// Opens an engine for the configured collection
pub trait Connector {
    type Engine: QueryEngine;

    /// Fails with `SessionError::Connection`
    fn connect(&self, config: &SessionConfig) -> SessionResult<Self::Engine>;
}

/// Owning handle on an open engine
///
/// The engine is released exactly once, when the handle is dropped.
pub struct Connection<E> {
    engine: E,
    target: String,
}

impl<E: QueryEngine> Connection<E> {
    /// Connect using `connector`
    pub fn open<C>(connector: &C, config: &SessionConfig) -> SessionResult<Self>
    where
        C: Connector<Engine = E>,
    {
        let engine = connector.connect(config)?;
        Ok(Self {
            engine,
            target: format!("{}.{}", config.database, config.collection),
        })
    }

    /// The open engine
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl<E> Drop for Connection<E> {
    fn drop(&mut self) {
        debug!(target_collection = %self.target, "connection released");
    }
}
