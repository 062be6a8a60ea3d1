//! Error types for the query engine.

use thiserror::Error;

/// Errors reported by a query call or by caller-side state policies.
///
/// Every error is local to the call that produced it: nothing is mutated and
/// the same inputs will fail the same way again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The sort field is not declared in the record schema.
    #[error("unknown sort field '{field}'")]
    UnknownField { field: String },

    /// Page size must be a positive integer.
    #[error("invalid page size {page_size}: must be at least 1")]
    InvalidPageSize { page_size: usize },

    /// Page index is 1-based.
    #[error("invalid page index {page_index}: pages are numbered from 1")]
    InvalidPageIndex { page_index: usize },

    /// The accessor returned a value that contradicts the schema.
    #[error("type mismatch on field '{field}': schema declares {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// The requested page size is not one of the configured choices.
    #[error("page size {page_size} is not allowed (choose one of {allowed:?})")]
    PageSizeNotAllowed {
        page_size: usize,
        allowed: Vec<usize>,
    },

    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
