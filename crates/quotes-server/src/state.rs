//! Application state shared across handlers.

use std::sync::Arc;

use quotes_store::QuoteStore;

use crate::auth::Authenticator;
use crate::config::ServerConfig;
use crate::graphql::{QuoteSchema, build_schema};

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Executable GraphQL schema.
    schema: QuoteSchema,
    /// Quote store, also held by the schema.
    store: Arc<QuoteStore>,
    /// Token and credential operations.
    authenticator: Arc<dyn Authenticator>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        store: Arc<QuoteStore>,
        authenticator: Arc<dyn Authenticator>,
        config: ServerConfig,
    ) -> Self {
        let schema = build_schema(store.clone(), authenticator.clone());
        Self {
            schema,
            store,
            authenticator,
            config: Arc::new(config),
        }
    }

    /// Get a reference to the GraphQL schema.
    pub fn schema(&self) -> &QuoteSchema {
        &self.schema
    }

    /// Get a reference to the quote store.
    pub fn store(&self) -> &Arc<QuoteStore> {
        &self.store
    }

    /// Get a reference to the authenticator.
    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
