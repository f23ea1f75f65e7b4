//! quotes-server: GraphQL API over an in-memory quote collection.
//!
//! This crate provides:
//! - The GraphQL schema (`quotes` query; `addQuote`, `editQuote`,
//!   `deleteQuote`, and `login` mutations)
//! - Bearer-token authentication behind the `Authenticator` trait
//! - Per-request context resolution from the `Authorization` header
//! - The axum router with request IDs, CORS, and HTTP tracing
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use quotes_server::{AppState, JwtAuthenticator, ServerConfig, build_app};
//! use quotes_store::QuoteStore;
//!
//! let config = ServerConfig::from_env()?;
//! let authenticator = Arc::new(JwtAuthenticator::from_config(&config)?);
//! let state = AppState::new(Arc::new(QuoteStore::new()), authenticator, config);
//! let app = build_app(state)?;
//! ```

pub mod auth;
pub mod config;
pub mod context;
pub mod error;
pub mod graphql;
pub mod middleware;
pub mod routes;
pub mod seed;
pub mod state;

use axum::Router;
use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use middleware::request_id::{make_span, propagate_request_id_layer, set_request_id_layer};

// Re-exports for convenience
pub use auth::{AuthError, Authenticator, JwtAuthenticator, UserDirectory};
pub use config::{ConfigError, ServerConfig};
pub use context::RequestContext;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use quotes_core;
pub use quotes_store;

/// Build the router with the full middleware stack.
pub fn build_app(state: AppState) -> Result<Router, ConfigError> {
    let cors = build_cors_layer(&state.config().cors_allowed_origins)?;

    Ok(routes::build_router(state)
        .layer(cors)
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http().make_span_with(make_span))
        .layer(set_request_id_layer()))
}

/// Build CORS layer from configuration.
fn build_cors_layer(allowed_origins: &str) -> Result<CorsLayer, ConfigError> {
    if allowed_origins == "*" {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    // Parse comma-separated origins
    let origins = allowed_origins
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<HeaderValue>()
                .map_err(|e| ConfigError::InvalidValue {
                    name: "CORS_ALLOWED_ORIGINS".to_string(),
                    reason: e.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}
