//! Relational schema bootstrap
//!
//! Both tables are created with `IF NOT EXISTS`, independently of each
//! other, so running this against a fresh, partial, or complete database
//! always ends with the full schema.

use sqlx::PgConnection;

/// Create `categories` and `contacts` if they are missing.
pub async fn ensure_schema(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring contacts schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contacts (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            phone TEXT,
            email TEXT,
            category_id INTEGER NOT NULL REFERENCES categories (id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_contacts_category ON contacts(category_id)")
        .execute(&mut *conn)
        .await?;

    tracing::info!("Contacts schema ready");
    Ok(())
}
