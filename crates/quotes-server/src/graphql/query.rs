//! Query root. Reads are public.

use std::sync::Arc;

use async_graphql::{Context, Object, Result};
use quotes_store::QuoteStore;

use super::types::QuoteObject;

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Every stored quote, in the order it was added.
    async fn quotes(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<QuoteObject>>>> {
        let store = ctx.data::<Arc<QuoteStore>>()?;
        let quotes = store
            .list()
            .into_iter()
            .map(|q| Some(QuoteObject::from(q)))
            .collect();
        Ok(Some(quotes))
    }
}
