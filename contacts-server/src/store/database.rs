//! PostgreSQL-backed store
//!
//! No pool: each operation opens its own connection, runs its statement(s)
//! and closes it again. Integrity (unique titles, cascading deletes) is
//! enforced by the schema, not by this code.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Connection, FromRow, PgConnection};

use super::{schema, ContactStore, StoreError, StoreResult};
use crate::models::{Category, Contact, ContactDetails, RecordId};

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i32,
    title: String,
}

#[derive(Debug, FromRow)]
struct ContactRow {
    id: i32,
    name: String,
    phone: Option<String>,
    email: Option<String>,
    category_id: i32,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            phone: row.phone.unwrap_or_default(),
            email: row.email.unwrap_or_default(),
            category_id: row.category_id.into(),
        }
    }
}

impl CategoryRow {
    fn with_contacts(self, contacts: Vec<Contact>) -> Category {
        Category {
            id: self.id.into(),
            title: self.title,
            contacts,
        }
    }
}

/// Relational store. Cheap to clone; holds only the connection URL.
#[derive(Debug, Clone)]
pub struct DatabaseStore {
    database_url: Arc<str>,
}

impl DatabaseStore {
    /// Build a store without touching the database.
    pub fn new(database_url: &str) -> Self {
        Self {
            database_url: Arc::from(database_url),
        }
    }

    /// Verify connectivity and make sure both tables exist.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let store = Self::new(database_url);
        let mut conn = store.open().await?;
        schema::ensure_schema(&mut conn).await?;
        conn.close().await?;
        Ok(store)
    }

    async fn open(&self) -> StoreResult<PgConnection> {
        Ok(PgConnection::connect(&self.database_url).await?)
    }
}

#[async_trait]
impl ContactStore for DatabaseStore {
    async fn get_all_categories(&self) -> StoreResult<Vec<Category>> {
        let mut conn = self.open().await?;

        let query = "SELECT id, title FROM categories ORDER BY id";
        tracing::info!(query, "Executing query");
        let categories: Vec<CategoryRow> = sqlx::query_as(query).fetch_all(&mut conn).await?;

        let query = "SELECT id, name, phone, email, category_id FROM contacts ORDER BY id";
        tracing::info!(query, "Executing query");
        let contacts: Vec<ContactRow> = sqlx::query_as(query).fetch_all(&mut conn).await?;

        conn.close().await?;

        let mut by_category: HashMap<i32, Vec<Contact>> = HashMap::new();
        for row in contacts {
            by_category.entry(row.category_id).or_default().push(row.into());
        }

        Ok(categories
            .into_iter()
            .map(|row| {
                let contacts = by_category.remove(&row.id).unwrap_or_default();
                row.with_contacts(contacts)
            })
            .collect())
    }

    async fn find_category_by_id(&self, category_id: &RecordId) -> StoreResult<Option<Category>> {
        let Some(id) = category_id.as_serial() else {
            return Ok(None);
        };

        let mut conn = self.open().await?;

        let query = "SELECT id, title FROM categories WHERE id = $1";
        tracing::info!(query, category_id = id, "Executing query");
        let category: Option<CategoryRow> = sqlx::query_as(query)
            .bind(id)
            .fetch_optional(&mut conn)
            .await?;

        let Some(category) = category else {
            conn.close().await?;
            return Ok(None);
        };

        let query =
            "SELECT id, name, phone, email, category_id FROM contacts WHERE category_id = $1 ORDER BY id";
        tracing::info!(query, category_id = id, "Executing query");
        let contacts: Vec<ContactRow> = sqlx::query_as(query)
            .bind(id)
            .fetch_all(&mut conn)
            .await?;

        conn.close().await?;

        Ok(Some(category.with_contacts(
            contacts.into_iter().map(Contact::from).collect(),
        )))
    }

    async fn create_new_category(&self, title: &str) -> StoreResult<()> {
        let mut conn = self.open().await?;

        let query = "INSERT INTO categories (title) VALUES ($1)";
        tracing::info!(query, title, "Executing query");
        sqlx::query(query).bind(title).execute(&mut conn).await?;

        conn.close().await?;
        Ok(())
    }

    async fn update_category_by_id(&self, category_id: &RecordId, title: &str) -> StoreResult<()> {
        let Some(id) = category_id.as_serial() else {
            return Ok(());
        };

        let mut conn = self.open().await?;

        let query = "UPDATE categories SET title = $1 WHERE id = $2";
        tracing::info!(query, title, category_id = id, "Executing query");
        sqlx::query(query).bind(title).bind(id).execute(&mut conn).await?;

        conn.close().await?;
        Ok(())
    }

    async fn delete_category_by_id(&self, category_id: &RecordId) -> StoreResult<()> {
        let Some(id) = category_id.as_serial() else {
            return Ok(());
        };

        let mut conn = self.open().await?;

        // contacts go with it via ON DELETE CASCADE
        let query = "DELETE FROM categories WHERE id = $1";
        tracing::info!(query, category_id = id, "Executing query");
        sqlx::query(query).bind(id).execute(&mut conn).await?;

        conn.close().await?;
        Ok(())
    }

    async fn create_new_contact(
        &self,
        category_id: &RecordId,
        details: &ContactDetails,
    ) -> StoreResult<()> {
        let Some(id) = category_id.as_serial() else {
            return Err(StoreError::NotFound {
                resource: "category",
                id: category_id.clone(),
            });
        };

        let mut conn = self.open().await?;

        let query = "INSERT INTO contacts (name, phone, email, category_id) VALUES ($1, $2, $3, $4)";
        tracing::info!(
            query,
            name = %details.name,
            phone = %details.phone,
            email = %details.email,
            category_id = id,
            "Executing query"
        );
        sqlx::query(query)
            .bind(&details.name)
            .bind(&details.phone)
            .bind(&details.email)
            .bind(id)
            .execute(&mut conn)
            .await?;

        conn.close().await?;
        Ok(())
    }

    async fn edit_contact(
        &self,
        category_id: &RecordId,
        contact_id: &RecordId,
        details: &ContactDetails,
    ) -> StoreResult<()> {
        let (Some(category), Some(contact)) = (category_id.as_serial(), contact_id.as_serial())
        else {
            return Ok(());
        };

        let mut conn = self.open().await?;

        let query =
            "UPDATE contacts SET name = $1, phone = $2, email = $3 WHERE category_id = $4 AND id = $5";
        tracing::info!(
            query,
            name = %details.name,
            phone = %details.phone,
            email = %details.email,
            category_id = category,
            contact_id = contact,
            "Executing query"
        );
        sqlx::query(query)
            .bind(&details.name)
            .bind(&details.phone)
            .bind(&details.email)
            .bind(category)
            .bind(contact)
            .execute(&mut conn)
            .await?;

        conn.close().await?;
        Ok(())
    }

    async fn delete_contact_from_category(
        &self,
        category_id: &RecordId,
        contact_id: &RecordId,
    ) -> StoreResult<()> {
        let (Some(category), Some(contact)) = (category_id.as_serial(), contact_id.as_serial())
        else {
            return Ok(());
        };

        let mut conn = self.open().await?;

        let query = "DELETE FROM contacts WHERE category_id = $1 AND id = $2";
        tracing::info!(query, category_id = category, contact_id = contact, "Executing query");
        sqlx::query(query)
            .bind(category)
            .bind(contact)
            .execute(&mut conn)
            .await?;

        conn.close().await?;
        Ok(())
    }

    async fn delete_all_contacts(&self, category_id: &RecordId) -> StoreResult<()> {
        let Some(id) = category_id.as_serial() else {
            return Ok(());
        };

        let mut conn = self.open().await?;

        let query = "DELETE FROM contacts WHERE category_id = $1";
        tracing::info!(query, category_id = id, "Executing query");
        sqlx::query(query).bind(id).execute(&mut conn).await?;

        conn.close().await?;
        Ok(())
    }
}
