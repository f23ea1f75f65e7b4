//! Schema assembly.

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};
use quotes_store::QuoteStore;

use super::mutation::MutationRoot;
use super::query::QueryRoot;
use crate::auth::Authenticator;

/// The executable quotes schema.
pub type QuoteSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around an injected store and authenticator.
///
/// The per-request `RequestContext` is not schema data; it is attached to
/// each request before execution.
pub fn build_schema(store: Arc<QuoteStore>, authenticator: Arc<dyn Authenticator>) -> QuoteSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .data(authenticator)
        .finish()
}
