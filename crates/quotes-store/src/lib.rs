//! quotes-store: in-memory storage for the quotes service.
//!
//! This crate provides:
//! - `QuoteStore`, an insertion-ordered map from `QuoteId` to `Quote`
//! - `IdGenerator` and its UUID and sequential implementations
//!
//! Nothing is persisted; the store lives as long as the process.
//!
//! # Usage
//!
//! ```
//! use quotes_core::NewQuote;
//! use quotes_store::QuoteStore;
//!
//! let store = QuoteStore::new();
//! let quote = store.insert(NewQuote::new("Stay hungry", None)).unwrap();
//! assert_eq!(store.list(), vec![quote.clone()]);
//! assert!(store.delete(&quote.id));
//! ```

pub mod error;
pub mod id;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use id::{IdGenerator, SequentialGenerator, UuidGenerator};
pub use store::QuoteStore;

// Re-export quotes-core for downstream crates
pub use quotes_core;
