//! Query catalog
//!
//! Read-only mapping from a query number (3-9) to its question text and
//! aggregation pipeline. The mapping is built once and never mutated.
//!
//! # Queries
//!
//! | id | pipeline                                                         |
//! |----|------------------------------------------------------------------|
//! | 3  | group by category, count                                         |
//! | 4  | flag in-stock videos, group by category, sum flag                |
//! | 5  | unwind actors, group by actor collecting distinct categories     |
//! | 6  | 5, then more than one category                                   |
//! | 7  | 5, then no "Comedy"                                              |
//! | 8  | 5, then both "Comedy" and "Action & Adventure"                   |
//! | 9  | unwind actors, group by (actor, category), count > 1             |

mod errors;
mod pipeline;
mod query;

use std::collections::BTreeMap;
use std::sync::OnceLock;

pub use errors::{CatalogError, CatalogResult};
pub use pipeline::{Pipeline, Stage};
pub use query::QueryId;

/// The fixed set of pipelines, keyed by query id
#[derive(Debug, Clone)]
pub struct Catalog {
    pipelines: BTreeMap<QueryId, Pipeline>,
}

impl Catalog {
    /// Build every pipeline
    pub fn new() -> Self {
        let pipelines = QueryId::all()
            .map(|id| (id, pipeline::build(id)))
            .collect();
        Self { pipelines }
    }

    /// Process-wide catalog, built on first use
    pub fn global() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Catalog::new)
    }

    /// Pipeline for a validated id
    pub fn pipeline(&self, id: QueryId) -> CatalogResult<&Pipeline> {
        self.pipelines
            .get(&id)
            .ok_or(CatalogError::InvalidQuery(id.get() as i64))
    }

    /// Iterate `(id, question)` pairs in menu order
    pub fn questions(&self) -> impl Iterator<Item = (QueryId, &'static str)> + '_ {
        self.pipelines.keys().map(|id| (*id, id.question()))
    }

    /// Number of queries in the catalog
    pub fn len(&self) -> usize {
        self.pipelines.len()
    }

    /// Returns true if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up the pipeline for a raw query number
///
/// Fails with [`CatalogError::InvalidQuery`] outside 3-9.
pub fn get_pipeline(number: i64) -> CatalogResult<Pipeline> {
    let id = QueryId::new(number)?;
    Catalog::global().pipeline(id).cloned()
}
