//! HTTP server command
//!
//! Picks the store, prepares it, and runs the web app until shutdown.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use contacts_server::{run_server, Backend, DatabaseStore, ServerConfig};

/// Default database when none is configured
const DEFAULT_DATABASE_URL: &str = "postgres://localhost/contacts";

/// How the app is being run
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Verbose logging, port 5003
    Development,
    /// Quieter logging, port 5000, `Secure` session cookie unless overridden
    Production,
}

impl RunMode {
    pub fn is_development(self) -> bool {
        self == Self::Development
    }

    fn default_bind(self) -> SocketAddr {
        let port = match self {
            Self::Development => 5003,
            Self::Production => 5000,
        };
        SocketAddr::from(([127, 0, 0, 1], port))
    }
}

/// Where categories and contacts are kept
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Shared PostgreSQL database
    Database,
    /// Per-visitor session (lost on restart)
    Session,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Run mode. Production marks the session cookie `Secure`, which
    /// browsers only send back over HTTPS; pass `--secure-cookies false`
    /// when serving plain HTTP without a TLS-terminating proxy.
    #[arg(long, value_enum, env = "CONTACTS_ENV", default_value = "development")]
    pub mode: RunMode,

    /// Address to bind to (default: 127.0.0.1:5003, or :5000 in production)
    #[arg(long, short = 'b', env = "CONTACTS_BIND")]
    pub bind: Option<SocketAddr>,

    /// Storage backend
    #[arg(long, value_enum, env = "CONTACTS_STORE", default_value = "database")]
    pub store: StoreKind,

    /// Mark the session cookie `Secure` (default: on in production)
    #[arg(long, env = "CONTACTS_SECURE_COOKIES")]
    pub secure_cookies: Option<bool>,

    /// PostgreSQL connection URL (database store only)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

impl ServeArgs {
    fn use_secure_cookies(&self) -> bool {
        self.secure_cookies.unwrap_or(self.mode == RunMode::Production)
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let backend = match args.store {
        StoreKind::Database => {
            tracing::info!("Connecting to database");
            let store = DatabaseStore::connect(&args.database_url)
                .await
                .context("Failed to prepare database. Check --database-url / DATABASE_URL")?;
            Backend::Database(store)
        }
        StoreKind::Session => Backend::Session,
    };

    let config = ServerConfig {
        bind_addr: args.bind.unwrap_or_else(|| args.mode.default_bind()),
        secure_cookies: args.use_secure_cookies(),
    };

    tracing::info!(mode = ?args.mode, "Starting contacts server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(backend, config).await.context("Server error")?;

    Ok(())
}
