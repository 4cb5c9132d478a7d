//! Query error model.

use thiserror::Error;

/// Result type used by query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Query-level error.
///
/// Empty results (no name match, no supplier match) are not errors; they are
/// represented as `None` or an empty collection. Only queries that have no
/// meaningful answer at all end up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The store holds no records, so no statistic can be computed.
    #[error("no products loaded")]
    EmptyStore,
}

impl QueryError {
    pub fn empty_store() -> Self {
        Self::EmptyStore
    }
}
