//! Route handlers organized by resource
//!
//! Each route extracts what it needs, calls the matching function in
//! [`crate::handlers`], and turns the [`Outcome`] into a response.

pub mod categories;
pub mod contacts;

use axum::response::{Html, IntoResponse, Redirect, Response};
use tower_sessions::Session;

use super::error::AppError;
use super::flash;
use super::server::AppState;
use crate::handlers::Outcome;

/// Redirects queue their flash for the next page; renders show queued
/// flashes plus their own.
async fn respond(state: &AppState, session: &Session, outcome: Outcome) -> Result<Response, AppError> {
    match outcome {
        Outcome::Redirect { to, flash } => {
            if let Some(flash) = flash {
                flash::push(session, flash).await?;
            }
            Ok(Redirect::to(&to).into_response())
        }
        Outcome::Render { view, flash } => {
            let mut flashes = flash::take(session).await?;
            flashes.extend(flash);
            let body = state.templates.render(&view, &flashes)?;
            Ok(Html(body).into_response())
        }
    }
}
