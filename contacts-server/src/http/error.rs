//! HTTP error type with IntoResponse
//!
//! Validation failures are not errors here; handlers turn them into
//! re-rendered forms. What remains is "not found" and everything that
//! should never happen (500, logged, generic body).

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Unknown category or contact id (404)
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    /// Store failure (500, logged)
    #[error("store error: {0}")]
    Store(StoreError),

    /// Template lookup or rendering failure (500, logged)
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Session read/write failure (500, logged)
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Internal error (500)
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound { resource, id } => {
                tracing::debug!(resource = *resource, id = %id, "not found");
                let title = match *resource {
                    "contact" => "Contact not found",
                    _ => "Category not found",
                };
                (
                    StatusCode::NOT_FOUND,
                    Html(format!(
                        "<!doctype html><title>Not Found</title><h1>Not Found</h1><p>{title}</p>"
                    )),
                )
                    .into_response()
            }
            _ => {
                // Log the actual error, return generic page
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(
                        "<!doctype html><title>Internal Server Error</title>\
                         <h1>Internal Server Error</h1>"
                            .to_owned(),
                    ),
                )
                    .into_response()
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { resource, id } => Self::not_found(resource, id),
            _ => Self::Store(e),
        }
    }
}
