//! Custom Axum extractors
//!
//! [`Storage`] builds the store for the current request from the app's
//! configured backend. [`CategoryScope`] and [`ContactScope`] resolve path
//! ids to entities and reject with 404 before the route body runs.

use std::sync::Arc;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::Deserialize;
use tower_sessions::Session;

use super::error::AppError;
use super::server::{AppState, Backend};
use crate::models::{Category, Contact, RecordId};
use crate::store::{find_contact_by_id, ContactStore, SessionStore};

/// Per-request store handle
pub struct Storage(pub Box<dyn ContactStore>);

impl FromRequestParts<Arc<AppState>> for Storage {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let store: Box<dyn ContactStore> = match &state.backend {
            Backend::Database(store) => Box::new(store.clone()),
            Backend::Session => {
                let session = Session::from_request_parts(parts, state)
                    .await
                    .map_err(|(_, message)| AppError::Internal {
                        message: message.to_owned(),
                    })?;
                Box::new(SessionStore::new(session))
            }
        };
        Ok(Self(store))
    }
}

#[derive(Deserialize)]
struct CategoryPath {
    category_id: String,
}

#[derive(Deserialize)]
struct ContactPath {
    category_id: String,
    contact_id: String,
}

/// A route under `/categories/{category_id}` with the category loaded
pub struct CategoryScope {
    pub store: Box<dyn ContactStore>,
    pub category: Category,
}

impl FromRequestParts<Arc<AppState>> for CategoryScope {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let Path(path): Path<CategoryPath> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::not_found("category", "?"))?;

        let Storage(store) = Storage::from_request_parts(parts, state).await?;
        let category = load_category(store.as_ref(), path.category_id).await?;

        Ok(Self { store, category })
    }
}

/// A route under `/categories/{category_id}/contacts/{contact_id}` with
/// both entities loaded
pub struct ContactScope {
    pub store: Box<dyn ContactStore>,
    pub category: Category,
    pub contact: Contact,
}

impl FromRequestParts<Arc<AppState>> for ContactScope {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let Path(path): Path<ContactPath> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::not_found("contact", "?"))?;

        let Storage(store) = Storage::from_request_parts(parts, state).await?;
        let category = load_category(store.as_ref(), path.category_id).await?;

        let contact_id = RecordId::new(path.contact_id);
        let contact = find_contact_by_id(&contact_id, &category.contacts)
            .cloned()
            .ok_or_else(|| AppError::not_found("contact", &contact_id))?;

        Ok(Self {
            store,
            category,
            contact,
        })
    }
}

async fn load_category(store: &dyn ContactStore, id: String) -> Result<Category, AppError> {
    let id = RecordId::new(id);
    store
        .find_category_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("category", &id))
}
