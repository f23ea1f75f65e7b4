//! Error types for the storage layer.

use quotes_core::QuoteId;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Quote not found.
    #[error("quote not found: {0}")]
    QuoteNotFound(QuoteId),

    /// A quote cannot be stored under an empty id.
    #[error("quote id must not be empty")]
    EmptyId,

    /// The key passed to `put` differs from the quote's own id.
    #[error("key mismatch: stored under {key} but quote id is {quote_id}")]
    KeyMismatch { key: QuoteId, quote_id: QuoteId },
}
