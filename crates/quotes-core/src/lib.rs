//! quotes-core: domain types for the quotes service.
//!
//! This crate provides:
//! - `Quote`, `NewQuote`, and `QuotePatch` for the quote lifecycle
//! - `QuoteId` and `UserId` identifier newtypes
//! - `User`, the authenticated principal resolved per request
//! - Deterministic `UserId` derivation from usernames

pub mod identity;
pub mod types;

pub use identity::derive_user_id;
pub use types::{NewQuote, Quote, QuoteId, QuotePatch, User, UserId};
