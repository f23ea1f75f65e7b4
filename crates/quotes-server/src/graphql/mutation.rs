//! Mutation root.
//!
//! Every quote mutation carries the `Capability::Authenticated` guard.
//! `login` is the one ungated mutation since it is how a caller gets a token.

use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, ID, MaybeUndefined, Object, Result};
use quotes_core::{NewQuote, QuoteId, QuotePatch};
use quotes_store::QuoteStore;

use super::guard::Capability;
use super::types::{Authentication, DeleteResponse, QuoteObject, patch_field};
use crate::auth::Authenticator;
use crate::error::ApiError;

#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Store a new quote under a freshly generated id.
    #[graphql(guard = "Capability::Authenticated")]
    async fn add_quote(
        &self,
        ctx: &Context<'_>,
        phrase: String,
        quotee: Option<String>,
    ) -> Result<Option<QuoteObject>> {
        let store = ctx.data::<Arc<QuoteStore>>()?;

        let quote = store
            .insert(NewQuote::new(phrase, quotee))
            .map_err(|e| ApiError::from(e).extend())?;

        tracing::info!(quote_id = %quote.id, "Quote added");
        Ok(Some(quote.into()))
    }

    /// Overwrite the supplied fields of an existing quote.
    ///
    /// An omitted `quotee` is kept; an explicit `null` clears it. `phrase`
    /// is non-nullable on `Quote`, so a `null` phrase is treated as omitted.
    #[graphql(guard = "Capability::Authenticated")]
    async fn edit_quote(
        &self,
        ctx: &Context<'_>,
        id: ID,
        phrase: Option<String>,
        quotee: MaybeUndefined<String>,
    ) -> Result<Option<QuoteObject>> {
        let store = ctx.data::<Arc<QuoteStore>>()?;
        let id = QuoteId::new(id.0);

        let patch = QuotePatch {
            phrase,
            quotee: patch_field(quotee),
        };

        let quote = store
            .update(&id, patch)
            .map_err(|e| ApiError::from(e).extend())?;

        tracing::info!(quote_id = %quote.id, "Quote edited");
        Ok(Some(quote.into()))
    }

    /// Remove a quote. Deleting an unknown id is not an error.
    #[graphql(guard = "Capability::Authenticated")]
    async fn delete_quote(&self, ctx: &Context<'_>, id: ID) -> Result<Option<DeleteResponse>> {
        let store = ctx.data::<Arc<QuoteStore>>()?;
        let id = QuoteId::new(id.0);

        let ok = store.delete(&id);

        tracing::info!(quote_id = %id, existed = ok, "Quote deleted");
        Ok(Some(DeleteResponse { ok }))
    }

    /// Exchange credentials for a bearer token.
    async fn login(
        &self,
        ctx: &Context<'_>,
        username: String,
        password: String,
    ) -> Result<Option<Authentication>> {
        let authenticator = ctx.data::<Arc<dyn Authenticator>>()?;

        let token = authenticator
            .issue_token(&username, &password)
            .await
            .map_err(|e| ApiError::from(e).extend())?;

        Ok(Some(Authentication { token }))
    }
}
