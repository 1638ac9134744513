//! Flash messages carried across a redirect in the session

use tower_sessions::Session;

use crate::handlers::Flash;

const FLASH_KEY: &str = "_flashes";

/// Queue a message for the next rendered page.
pub async fn push(session: &Session, flash: Flash) -> Result<(), tower_sessions::session::Error> {
    let mut pending = session
        .get::<Vec<Flash>>(FLASH_KEY)
        .await?
        .unwrap_or_default();
    pending.push(flash);
    session.insert(FLASH_KEY, pending).await
}

/// Drain every queued message.
pub async fn take(session: &Session) -> Result<Vec<Flash>, tower_sessions::session::Error> {
    Ok(session
        .remove::<Vec<Flash>>(FLASH_KEY)
        .await?
        .unwrap_or_default())
}
