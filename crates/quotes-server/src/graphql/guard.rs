//! Authorization guard for mutation fields.
//!
//! Attach with `#[graphql(guard = "Capability::Authenticated")]`. The guard
//! runs before the resolver body, so a rejected call never touches the store
//! and never learns whether an id exists.

use async_graphql::{Context, ErrorExtensions, Guard, Result};

use crate::context::RequestContext;
use crate::error::ApiError;

/// What a caller must have to run a guarded field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Any resolved user.
    Authenticated,
}

impl Capability {
    /// Whether `ctx` grants this capability.
    pub fn is_granted(self, ctx: &RequestContext) -> bool {
        match self {
            Self::Authenticated => ctx.is_authenticated(),
        }
    }
}

impl Guard for Capability {
    async fn check(&self, ctx: &Context<'_>) -> Result<()> {
        let granted = ctx
            .data_opt::<RequestContext>()
            .is_some_and(|request| self.is_granted(request));

        if granted {
            Ok(())
        } else {
            tracing::debug!(capability = ?self, "Rejected unauthenticated mutation");
            Err(ApiError::Unauthenticated.extend())
        }
    }
}
