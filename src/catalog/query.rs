//! Query identifiers and their menu questions

use std::fmt;

use super::errors::{CatalogError, CatalogResult};

/// Questions shown in the menu, indexed from `QueryId::MIN`
const QUESTIONS: [&str; 7] = [
    "List the number of videos for each video category.",
    "List the number of videos for each video category where the inventory is non-zero.",
    "For each actor, list the video categories that actor has appeared in.",
    "Which actors have appeared in movies in different video categories?",
    "Which actors have not appeared in a comedy?",
    "Which actors have appeared in both a comedy and an action adventure movie?",
    "Which actors have appeared in the same category of movie more than once?",
];

/// A validated query number in `MIN..=MAX`
///
/// Can only be constructed through [`QueryId::new`] or `TryFrom`, so an
/// out-of-range id never reaches the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryId(u8);

impl QueryId {
    pub const MIN: u8 = 3;
    pub const MAX: u8 = 9;

    /// Validate a raw query number
    pub fn new(number: i64) -> CatalogResult<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&number) {
            Ok(QueryId(number as u8))
        } else {
            Err(CatalogError::InvalidQuery(number))
        }
    }

    /// All supported ids in menu order
    pub fn all() -> impl Iterator<Item = QueryId> {
        (Self::MIN..=Self::MAX).map(QueryId)
    }

    /// The raw query number
    pub fn get(self) -> u8 {
        self.0
    }

    /// Human-readable question answered by this query
    pub fn question(self) -> &'static str {
        QUESTIONS[(self.0 - Self::MIN) as usize]
    }
}

impl TryFrom<i64> for QueryId {
    type Error = CatalogError;

    fn try_from(number: i64) -> CatalogResult<Self> {
        QueryId::new(number)
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
