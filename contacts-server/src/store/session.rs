//! Session-scoped store
//!
//! The visitor's categories live as one document in their session under
//! [`CATEGORIES_KEY`]. Every mutation loads the document, edits it in place
//! and writes it back. Lookups are linear scans.

use async_trait::async_trait;
use tower_sessions::Session;

use super::{ContactStore, StoreError, StoreResult};
use crate::models::{Category, Contact, ContactDetails, RecordId};

/// Session key holding `Vec<Category>`.
pub const CATEGORIES_KEY: &str = "categories";

/// In-session store for a single visitor.
#[derive(Debug, Clone)]
pub struct SessionStore {
    session: Session,
}

impl SessionStore {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    async fn load(&self) -> StoreResult<Vec<Category>> {
        Ok(self
            .session
            .get::<Vec<Category>>(CATEGORIES_KEY)
            .await?
            .unwrap_or_default())
    }

    async fn save(&self, categories: Vec<Category>) -> StoreResult<()> {
        self.session.insert(CATEGORIES_KEY, categories).await?;
        Ok(())
    }

    /// Load, apply `edit` to the named category, save.
    async fn modify<F>(&self, category_id: &RecordId, edit: F) -> StoreResult<()>
    where
        F: FnOnce(&mut Category) + Send,
    {
        let mut categories = self.load().await?;
        let category = categories
            .iter_mut()
            .find(|category| &category.id == category_id)
            .ok_or_else(|| StoreError::NotFound {
                resource: "category",
                id: category_id.clone(),
            })?;

        edit(category);
        self.save(categories).await
    }
}

#[async_trait]
impl ContactStore for SessionStore {
    async fn get_all_categories(&self) -> StoreResult<Vec<Category>> {
        self.load().await
    }

    async fn find_category_by_id(&self, category_id: &RecordId) -> StoreResult<Option<Category>> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .find(|category| &category.id == category_id))
    }

    async fn create_new_category(&self, title: &str) -> StoreResult<()> {
        let mut categories = self.load().await?;
        categories.push(Category::new(RecordId::random(), title));
        self.save(categories).await
    }

    async fn update_category_by_id(&self, category_id: &RecordId, title: &str) -> StoreResult<()> {
        let mut categories = self.load().await?;
        if let Some(category) = categories.iter_mut().find(|c| &c.id == category_id) {
            category.title = title.to_owned();
            self.save(categories).await?;
        }
        Ok(())
    }

    async fn delete_category_by_id(&self, category_id: &RecordId) -> StoreResult<()> {
        let mut categories = self.load().await?;
        categories.retain(|category| &category.id != category_id);
        self.save(categories).await
    }

    async fn create_new_contact(
        &self,
        category_id: &RecordId,
        details: &ContactDetails,
    ) -> StoreResult<()> {
        let contact = Contact {
            id: RecordId::random(),
            name: details.name.clone(),
            phone: details.phone.clone(),
            email: details.email.clone(),
            category_id: category_id.clone(),
        };
        self.modify(category_id, move |category| category.contacts.push(contact))
            .await
    }

    async fn edit_contact(
        &self,
        category_id: &RecordId,
        contact_id: &RecordId,
        details: &ContactDetails,
    ) -> StoreResult<()> {
        self.modify(category_id, |category| {
            for contact in category.contacts.iter_mut().filter(|c| &c.id == contact_id) {
                contact.name = details.name.clone();
                contact.phone = details.phone.clone();
                contact.email = details.email.clone();
            }
        })
        .await
    }

    async fn delete_contact_from_category(
        &self,
        category_id: &RecordId,
        contact_id: &RecordId,
    ) -> StoreResult<()> {
        self.modify(category_id, |category| {
            category.contacts.retain(|contact| &contact.id != contact_id)
        })
        .await
    }

    async fn delete_all_contacts(&self, category_id: &RecordId) -> StoreResult<()> {
        self.modify(category_id, |category| category.contacts.clear())
            .await
    }
}
