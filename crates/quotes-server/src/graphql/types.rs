//! GraphQL object types.

use async_graphql::{ID, MaybeUndefined, SimpleObject};
use quotes_core::Quote;

/// A phrase with an optional attributed speaker.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Quote")]
pub struct QuoteObject {
    pub id: ID,
    pub phrase: String,
    pub quotee: Option<String>,
}

impl From<Quote> for QuoteObject {
    fn from(quote: Quote) -> Self {
        Self {
            id: ID(quote.id.into_inner()),
            phrase: quote.phrase,
            quotee: quote.quotee,
        }
    }
}

/// Result of `deleteQuote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SimpleObject)]
pub struct DeleteResponse {
    /// Whether a quote existed under the id.
    pub ok: bool,
}

/// Result of `login`.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Authentication {
    /// Bearer token for the `Authorization` header.
    pub token: String,
}

/// Map a nullable argument onto patch semantics: omitted keeps, null clears.
pub(crate) fn patch_field(value: MaybeUndefined<String>) -> Option<Option<String>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(v) => Some(Some(v)),
    }
}
