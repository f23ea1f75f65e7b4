//! Per-request context: the user resolved from the `Authorization` header.
//!
//! Building a context never fails. A missing header, a header without the
//! bearer marker, a rejected token, or an unknown user all produce an
//! anonymous context.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use quotes_core::User;

use crate::auth::Authenticator;
use crate::state::AppState;

/// Marker preceding the token in the `Authorization` header.
pub const BEARER_MARKER: &str = "Bearer ";

/// Context attached to every resolver call of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// The authenticated user, if any.
    pub user: Option<User>,
}

impl RequestContext {
    /// A context with no user.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A context for the given user.
    pub fn for_user(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Returns true if a user was resolved.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Resolve the raw `Authorization` header value into a context.
    pub async fn build(authenticator: &dyn Authenticator, authorization: Option<&str>) -> Self {
        let Some(token) = extract_bearer_token(authorization.unwrap_or_default()) else {
            return Self::anonymous();
        };

        let user = match authenticator.resolve_user_id(token).await {
            Some(user_id) => authenticator.resolve_user(user_id).await,
            None => None,
        };

        if user.is_none() {
            tracing::debug!("Bearer token did not resolve to a user; continuing anonymously");
        }

        Self { user }
    }
}

/// Return what follows the first `"Bearer "` in `header`, if present.
pub fn extract_bearer_token(header: &str) -> Option<&str> {
    header.split_once(BEARER_MARKER).map(|(_, token)| token)
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let authorization = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        Ok(Self::build(state.authenticator().as_ref(), authorization).await)
    }
}
