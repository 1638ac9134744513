//! Persistence layer - one contract, two backends
//!
//! - [`DatabaseStore`]: PostgreSQL, one connection per operation
//! - [`SessionStore`]: the visitor's own scratch copy kept in their session
//!
//! Handlers only ever see `&dyn ContactStore`, so either backend (or a test
//! double) can sit behind them.

pub mod database;
pub mod schema;
pub mod session;

use async_trait::async_trait;

use crate::models::{Category, Contact, ContactDetails, RecordId};

pub use database::DatabaseStore;
pub use session::SessionStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage failure. Never used for "record absent" on reads; those return `None`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: RecordId },
}

/// CRUD operations over categories and their contacts.
///
/// Reads return categories with `contacts` eagerly populated. Every
/// mutation is a single atomic store operation.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// All categories in creation order.
    async fn get_all_categories(&self) -> StoreResult<Vec<Category>>;

    /// `Ok(None)` when no category has this id.
    async fn find_category_by_id(&self, category_id: &RecordId) -> StoreResult<Option<Category>>;

    async fn create_new_category(&self, title: &str) -> StoreResult<()>;

    async fn update_category_by_id(&self, category_id: &RecordId, title: &str) -> StoreResult<()>;

    /// Deletes the category and every contact in it.
    async fn delete_category_by_id(&self, category_id: &RecordId) -> StoreResult<()>;

    async fn create_new_contact(
        &self,
        category_id: &RecordId,
        details: &ContactDetails,
    ) -> StoreResult<()>;

    async fn edit_contact(
        &self,
        category_id: &RecordId,
        contact_id: &RecordId,
        details: &ContactDetails,
    ) -> StoreResult<()>;

    async fn delete_contact_from_category(
        &self,
        category_id: &RecordId,
        contact_id: &RecordId,
    ) -> StoreResult<()>;

    /// Empties the category; the category itself stays.
    async fn delete_all_contacts(&self, category_id: &RecordId) -> StoreResult<()>;
}

/// Locate a contact within an already-loaded category.
pub fn find_contact_by_id<'a>(contact_id: &RecordId, contacts: &'a [Contact]) -> Option<&'a Contact> {
    contacts.iter().find(|contact| &contact.id == contact_id)
}
