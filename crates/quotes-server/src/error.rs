//! Resolver error types and their GraphQL representation.

use async_graphql::ErrorExtensions;
use quotes_core::QuoteId;
use quotes_store::StoreError;

use crate::auth::AuthError;

/// Error returned from resolvers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Mutation attempted without a resolved user.
    #[error("You must be logged in to perform this action")]
    Unauthenticated,

    /// Edit targeted an id with no quote behind it.
    #[error("Quote doesn't exist")]
    QuoteNotFound(QuoteId),

    /// Login failed; the authenticator's message is passed through untouched.
    #[error("{0}")]
    Credentials(#[from] AuthError),

    /// Store error.
    #[error("storage error: {0}")]
    Store(StoreError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::QuoteNotFound(id) => Self::QuoteNotFound(id),
            other => Self::Store(other),
        }
    }
}

impl ApiError {
    /// Get the `extensions.code` value for this error, if it carries one.
    ///
    /// Not-found and credential errors are deliberately generic.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Unauthenticated => Some("UNAUTHENTICATED"),
            Self::QuoteNotFound(_) => None,
            Self::Credentials(_) => None,
            Self::Store(_) | Self::Internal(_) => Some("INTERNAL_SERVER_ERROR"),
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        let err = async_graphql::Error::new(self.to_string());
        match self.code() {
            Some(code) => err.extend_with(|_, e| e.set("code", code)),
            None => err,
        }
    }
}

/// Result type for resolvers before GraphQL conversion.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_has_code() {
        let err = ApiError::Unauthenticated.extend();
        assert_eq!(err.message, "You must be logged in to perform this action");
        let ext = err.extensions.expect("extensions");
        assert_eq!(
            ext.get("code"),
            Some(&async_graphql::Value::from("UNAUTHENTICATED"))
        );
    }

    #[test]
    fn test_not_found_has_no_code() {
        let err = ApiError::QuoteNotFound(QuoteId::new("missing-id")).extend();
        assert_eq!(err.message, "Quote doesn't exist");
        assert!(err.extensions.is_none());
    }

    #[test]
    fn test_credentials_message_verbatim() {
        let err = ApiError::from(AuthError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid username or password");
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_store_not_found_maps_to_quote_not_found() {
        let err = ApiError::from(StoreError::QuoteNotFound(QuoteId::new("x")));
        assert!(matches!(err, ApiError::QuoteNotFound(_)));

        let err = ApiError::from(StoreError::EmptyId);
        assert_eq!(err.code(), Some("INTERNAL_SERVER_ERROR"));
    }
}
