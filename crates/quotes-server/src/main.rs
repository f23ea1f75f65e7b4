//! Entry point for the quotes-server binary.

use std::sync::Arc;

use quotes_server::{
    AppState, JwtAuthenticator, build_app,
    config::{LogFormat, ServerConfig},
    seed::sample_quotes,
};
use quotes_store::QuoteStore;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before reading configuration
    let dotenv = dotenvy::dotenv();

    let config = ServerConfig::from_env()?;

    init_tracing(&config.log_level, config.log_format);

    if let Ok(path) = dotenv {
        tracing::info!("Loaded .env from {:?}", path);
    }

    tracing::info!("Starting quotes-server");
    tracing::info!(
        "Configuration: port={}, log_level={}, users={}",
        config.port,
        config.log_level,
        config.users.len()
    );

    let store = Arc::new(QuoteStore::new());
    if config.seed_quotes {
        let seeded = store.seed(sample_quotes())?;
        tracing::info!("Seeded {} sample quotes", seeded.len());
    }

    let authenticator = Arc::new(JwtAuthenticator::from_config(&config)?);

    let addr = config.socket_addr();
    let state = AppState::new(store, authenticator, config);
    let app = build_app(state)?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server ready at http://{}/", listener.local_addr()?);

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initialize the tracing subscriber.
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
