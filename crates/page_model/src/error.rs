//! Error types for page model operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageModelError {
    /// A block lacks a field required by its declared type's schema
    #[error("block {block_index}: missing required field `{field}`")]
    MissingField { block_index: usize, field: String },

    /// Two blocks in the same page share an id
    #[error("duplicate block id: {0}")]
    DuplicateId(String),

    /// Two blocks in the same page share an order value
    #[error("duplicate block order: {0}")]
    DuplicateOrder(usize),

    /// A block's order does not equal its position in the block list
    #[error("block at index {index} has order {order}, expected {index}")]
    OrderOutOfSequence { index: usize, order: usize },

    /// Page slug is not a valid URL path segment
    #[error("invalid slug: {0}")]
    InvalidSlug(String),

    /// Error serializing or deserializing a page document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for page model operations
pub type Result<T> = std::result::Result<T, PageModelError>;
