//! MongoDB-backed engine (synchronous driver API)

use mongodb::bson::{doc, Document};
use mongodb::sync::{Client, Collection, Cursor};
use tracing::debug;

use crate::catalog::Pipeline;
use crate::session::{SessionConfig, SessionError, SessionResult};

use super::{Connector, QueryEngine, ResultDocument};

/// Connects with the official driver
///
/// The driver connects lazily, so a `ping` is issued to surface
/// connection failures before the menu is shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoConnector;

impl Connector for MongoConnector {
    type Engine = MongoEngine;

    fn connect(&self, config: &SessionConfig) -> SessionResult<MongoEngine> {
        let client = Client::with_uri_str(&config.uri)
            .map_err(|e| SessionError::Connection(e.to_string()))?;

        let database = client.database(&config.database);
        database
            .run_command(doc! { "ping": 1 }, None)
            .map_err(|e| SessionError::Connection(e.to_string()))?;
        debug!(database = %config.database, "ping acknowledged");

        Ok(MongoEngine {
            collection: database.collection::<Document>(&config.collection),
        })
    }
}

/// One collection on an open client
pub struct MongoEngine {
    collection: Collection<Document>,
}

impl QueryEngine for MongoEngine {
    type Cursor = MongoCursor;

    fn aggregate(&self, pipeline: Pipeline) -> SessionResult<MongoCursor> {
        let cursor = self
            .collection
            .aggregate(pipeline, None)
            .map_err(|e| SessionError::Query(e.to_string()))?;
        Ok(MongoCursor(cursor))
    }
}

/// Server-side cursor over aggregation results
pub struct MongoCursor(Cursor<Document>);

impl Iterator for MongoCursor {
    type Item = SessionResult<ResultDocument>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|result| {
            result
                .map(ResultDocument::from)
                .map_err(|e| SessionError::Stream(e.to_string()))
        })
    }
}
