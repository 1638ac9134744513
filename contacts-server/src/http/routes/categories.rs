//! Category endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    response::Response,
    routing::{get, post},
    Form, Router,
};
use tower_sessions::Session;

use super::respond;
use crate::handlers::categories as handlers;
use crate::http::error::AppError;
use crate::http::extractors::{CategoryScope, Storage};
use crate::http::server::AppState;
use crate::models::CategoryForm;

/// GET / - redirect to the category list
async fn index(State(state): State<Arc<AppState>>, session: Session) -> Result<Response, AppError> {
    respond(&state, &session, handlers::index()).await
}

/// GET /categories - list all categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
    session: Session,
    Storage(store): Storage,
) -> Result<Response, AppError> {
    let outcome = handlers::list_categories(store.as_ref()).await?;
    respond(&state, &session, outcome).await
}

/// POST /categories - create a category
async fn create_category(
    State(state): State<Arc<AppState>>,
    session: Session,
    Storage(store): Storage,
    Form(form): Form<CategoryForm>,
) -> Result<Response, AppError> {
    let outcome = handlers::create_category(store.as_ref(), form).await?;
    respond(&state, &session, outcome).await
}

/// GET /categories/new - empty category form
async fn new_category(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Response, AppError> {
    respond(&state, &session, handlers::new_category_form()).await
}

/// GET /categories/{category_id} - category detail
async fn show_category(
    State(state): State<Arc<AppState>>,
    session: Session,
    scope: CategoryScope,
) -> Result<Response, AppError> {
    respond(&state, &session, handlers::show_category(scope.category)).await
}

/// POST /categories/{category_id}/edit - edit form
async fn edit_category(
    State(state): State<Arc<AppState>>,
    session: Session,
    scope: CategoryScope,
) -> Result<Response, AppError> {
    respond(&state, &session, handlers::edit_category_form(scope.category)).await
}

/// POST /categories/{category_id} - rename
async fn update_category(
    State(state): State<Arc<AppState>>,
    session: Session,
    scope: CategoryScope,
    Form(form): Form<CategoryForm>,
) -> Result<Response, AppError> {
    let outcome = handlers::update_category(scope.store.as_ref(), scope.category, form).await?;
    respond(&state, &session, outcome).await
}

/// POST /categories/{category_id}/delete - delete with its contacts
async fn delete_category(
    State(state): State<Arc<AppState>>,
    session: Session,
    scope: CategoryScope,
) -> Result<Response, AppError> {
    let outcome = handlers::delete_category(scope.store.as_ref(), scope.category).await?;
    respond(&state, &session, outcome).await
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/new", get(new_category))
        .route(
            "/categories/{category_id}",
            get(show_category).post(update_category),
        )
        .route("/categories/{category_id}/edit", post(edit_category))
        .route("/categories/{category_id}/delete", post(delete_category))
}
