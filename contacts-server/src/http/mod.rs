//! HTTP boundary
//!
//! Axum server with:
//! - Path guards that 404 before any handler logic
//! - Session-carried flash messages
//! - Server-rendered minijinja pages
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod flash;
pub mod routes;
pub mod server;
pub mod templates;

pub use error::AppError;
pub use server::{build_router, run_server, AppState, Backend, ServerConfig, ServerError};
pub use templates::Templates;
