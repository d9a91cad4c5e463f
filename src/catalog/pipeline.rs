//! Pipeline value type and the fixed stage definitions
//!
//! Stage order and field names are significant to the server, so every
//! pipeline here is written out literally.

use mongodb::bson::{doc, Document};
use serde::Serialize;

use super::query::QueryId;

/// One aggregation stage, e.g. `{ "$group": { ... } }`
pub type Stage = Document;

/// An ordered, immutable sequence of aggregation stages
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Pipeline(Vec<Stage>);

impl Pipeline {
    fn new(stages: Vec<Stage>) -> Self {
        Self(stages)
    }

    /// Stages in execution order
    pub fn stages(&self) -> &[Stage] {
        &self.0
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the pipeline has no stages
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Operator names of each stage (`$unwind`, `$group`, ...)
    pub fn operators(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter_map(|stage| stage.keys().next().map(String::as_str))
            .collect()
    }

    /// Consume into raw stages for submission to the server
    pub fn into_stages(self) -> Vec<Stage> {
        self.0
    }
}

impl IntoIterator for Pipeline {
    type Item = Stage;
    type IntoIter = std::vec::IntoIter<Stage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Build the pipeline answering `id`
pub(crate) fn build(id: QueryId) -> Pipeline {
    let stages = match id.get() {
        3 => vec![doc! {
            "$group": { "_id": "$category", "count": { "$count": {} } }
        }],
        4 => vec![
            doc! {
                "$addFields": {
                    "stockNonEmpty": { "$cond": [ { "$gt": ["$stock_count", 0] }, 1, 0 ] }
                }
            },
            doc! {
                "$group": { "_id": "$category", "count": { "$sum": "$stockNonEmpty" } }
            },
        ],
        5 => actor_categories(),
        6 => with_match(doc! {
            "$expr": { "$gt": [ { "$size": "$categories" }, 1_i64 ] }
        }),
        7 => with_match(doc! {
            "categories": { "$nin": ["Comedy"] }
        }),
        8 => with_match(doc! {
            "$and": [
                { "categories": { "$in": ["Comedy"] } },
                { "categories": { "$in": ["Action & Adventure"] } }
            ]
        }),
        // 9
        _ => vec![
            doc! { "$unwind": { "path": "$actors" } },
            doc! {
                "$group": {
                    "_id": { "actors": "$actors", "category": "$category" },
                    "count": { "$count": {} }
                }
            },
            doc! { "$match": { "$expr": { "$gt": ["$count", 1_i64] } } },
        ],
    };
    Pipeline::new(stages)
}

/// One row per actor with the distinct list of categories they appear in
fn actor_categories() -> Vec<Stage> {
    vec![
        doc! { "$unwind": { "path": "$actors" } },
        doc! {
            "$group": {
                "_id": "$actors",
                "categories": { "$addToSet": { "category": "$category" } }
            }
        },
        doc! { "$addFields": { "categories": "$categories.category" } },
    ]
}

fn with_match(filter: Document) -> Vec<Stage> {
    let mut stages = actor_categories();
    stages.push(doc! { "$match": filter });
    stages
}
