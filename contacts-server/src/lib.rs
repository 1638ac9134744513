//! contacts-server: server-rendered address book
//!
//! Users group contacts into categories and manage both through HTML forms.
//! Storage is pluggable: a PostgreSQL store or a per-session in-memory store,
//! both behind the same [`store::ContactStore`] contract.

pub mod handlers;
pub mod http;
pub mod models;
pub mod store;

pub use http::{run_server, AppState, Backend, ServerConfig};
pub use store::{ContactStore, DatabaseStore, SessionStore, StoreError, StoreResult};
