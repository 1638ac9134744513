//! Contact endpoints, nested under a category

use std::sync::Arc;

use axum::{
    extract::State,
    response::Response,
    routing::{get, post},
    Form, Router,
};
use tower_sessions::Session;

use super::respond;
use crate::handlers::contacts as handlers;
use crate::http::error::AppError;
use crate::http::extractors::{CategoryScope, ContactScope};
use crate::http::server::AppState;
use crate::models::ContactForm;

/// POST /categories/{category_id}/contacts - add a contact
async fn create_contact(
    State(state): State<Arc<AppState>>,
    session: Session,
    scope: CategoryScope,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let outcome = handlers::create_contact(scope.store.as_ref(), scope.category, form).await?;
    respond(&state, &session, outcome).await
}

/// POST /categories/{category_id}/contacts/delete - empty the category
async fn delete_all_contacts(
    State(state): State<Arc<AppState>>,
    session: Session,
    scope: CategoryScope,
) -> Result<Response, AppError> {
    let outcome = handlers::delete_all_contacts(scope.store.as_ref(), scope.category).await?;
    respond(&state, &session, outcome).await
}

/// GET /categories/{category_id}/contacts/{contact_id}/info
async fn contact_info(
    State(state): State<Arc<AppState>>,
    session: Session,
    scope: ContactScope,
) -> Result<Response, AppError> {
    let outcome = handlers::contact_info(scope.category, scope.contact);
    respond(&state, &session, outcome).await
}

/// POST /categories/{category_id}/contacts/{contact_id}/edit - edit form
async fn edit_contact(
    State(state): State<Arc<AppState>>,
    session: Session,
    scope: ContactScope,
) -> Result<Response, AppError> {
    let outcome = handlers::edit_contact_form(scope.category, scope.contact);
    respond(&state, &session, outcome).await
}

/// POST /categories/{category_id}/contacts/{contact_id} - save edits
async fn update_contact(
    State(state): State<Arc<AppState>>,
    session: Session,
    scope: ContactScope,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let ContactScope {
        store,
        category,
        contact,
    } = scope;
    let outcome = handlers::update_contact(store.as_ref(), category, contact, form).await?;
    respond(&state, &session, outcome).await
}

/// POST /categories/{category_id}/contacts/{contact_id}/delete
async fn delete_contact(
    State(state): State<Arc<AppState>>,
    session: Session,
    scope: ContactScope,
) -> Result<Response, AppError> {
    let ContactScope {
        store,
        category,
        contact,
    } = scope;
    let outcome = handlers::delete_contact(store.as_ref(), category, contact).await?;
    respond(&state, &session, outcome).await
}

/// Contact routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories/{category_id}/contacts", post(create_contact))
        .route(
            "/categories/{category_id}/contacts/delete",
            post(delete_all_contacts),
        )
        .route(
            "/categories/{category_id}/contacts/{contact_id}",
            post(update_contact),
        )
        .route(
            "/categories/{category_id}/contacts/{contact_id}/info",
            get(contact_info),
        )
        .route(
            "/categories/{category_id}/contacts/{contact_id}/edit",
            post(edit_contact),
        )
        .route(
            "/categories/{category_id}/contacts/{contact_id}/delete",
            post(delete_contact),
        )
}
