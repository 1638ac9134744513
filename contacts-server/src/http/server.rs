//! Axum server setup
//!
//! Server skeleton with:
//! - Session layer (flash messages, session-backed store)
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use super::routes;
use super::templates::Templates;
use crate::store::DatabaseStore;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:5003)
    pub bind_addr: SocketAddr,

    /// Mark the session cookie `Secure` (default: false)
    ///
    /// Enable when served over HTTPS.
    pub secure_cookies: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5003)),
            secure_cookies: false,
        }
    }
}

/// Which store backs the requests.
#[derive(Debug, Clone)]
pub enum Backend {
    /// Shared PostgreSQL database
    Database(DatabaseStore),
    /// Each visitor's own session
    Session,
}

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub backend: Backend,
    pub templates: Templates,
}

impl AppState {
    pub fn new(backend: Backend) -> Result<Self, ServerError> {
        Ok(Self {
            backend,
            templates: Templates::load()?,
        })
    }
}

/// Build the full application router.
pub fn build_router(state: AppState, secure_cookies: bool) -> Router {
    let sessions = SessionManagerLayer::new(MemoryStore::default()).with_secure(secure_cookies);

    Router::new()
        .merge(routes::categories::router())
        .merge(routes::contacts::router())
        .layer(sessions)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let store = DatabaseStore::connect(&database_url).await?;
/// run_server(Backend::Database(store), ServerConfig::default()).await?;
/// ```
pub async fn run_server(backend: Backend, config: ServerConfig) -> Result<(), ServerError> {
    match &backend {
        Backend::Database(_) => tracing::info!("Using database store"),
        Backend::Session => tracing::info!("Using session store"),
    }

    let state = AppState::new(backend)?;
    let app = build_router(state, config.secure_cookies);

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 5003);
        assert!(!config.secure_cookies);
    }

    #[test]
    fn state_loads_templates() {
        let state = AppState::new(Backend::Session).expect("templates load");
        assert!(matches!(state.backend, Backend::Session));
    }
}
