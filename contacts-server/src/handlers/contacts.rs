//! Contact pages and mutations, always scoped to a category

use super::{category_path, Outcome, View};
use super::{CONTACTS_CLEARED, CONTACT_ADDED, CONTACT_DELETED, CONTACT_EDITED};
use crate::models::{validate_contact_name, Category, Contact, ContactForm};
use crate::store::{ContactStore, StoreResult};

/// POST /categories/{id}/contacts
pub async fn create_contact(
    store: &dyn ContactStore,
    category: Category,
    form: ContactForm,
) -> StoreResult<Outcome> {
    let form = form.trimmed();

    if let Err(error) = validate_contact_name(&form.name) {
        tracing::debug!(name = %form.name, %error, "contact rejected");
        return Ok(Outcome::rejected(View::Category { category, form }, error));
    }

    store
        .create_new_contact(&category.id, &form.into_details())
        .await?;
    Ok(Outcome::redirect(category_path(&category.id), CONTACT_ADDED))
}

/// GET /categories/{id}/contacts/{cid}/info
pub fn contact_info(category: Category, contact: Contact) -> Outcome {
    Outcome::render(View::ContactInfo { category, contact })
}

/// POST /categories/{id}/contacts/{cid}/edit
pub fn edit_contact_form(category: Category, contact: Contact) -> Outcome {
    let form = ContactForm::new(&contact.name, &contact.phone, &contact.email);
    Outcome::render(View::EditContact {
        category,
        contact,
        form,
    })
}

/// POST /categories/{id}/contacts/{cid}
pub async fn update_contact(
    store: &dyn ContactStore,
    category: Category,
    contact: Contact,
    form: ContactForm,
) -> StoreResult<Outcome> {
    let form = form.trimmed();

    if let Err(error) = validate_contact_name(&form.name) {
        tracing::debug!(name = %form.name, %error, "contact update rejected");
        return Ok(Outcome::rejected(
            View::EditContact {
                category,
                contact,
                form,
            },
            error,
        ));
    }

    store
        .edit_contact(&category.id, &contact.id, &form.into_details())
        .await?;
    Ok(Outcome::redirect(category_path(&category.id), CONTACT_EDITED))
}

/// POST /categories/{id}/contacts/{cid}/delete
pub async fn delete_contact(
    store: &dyn ContactStore,
    category: Category,
    contact: Contact,
) -> StoreResult<Outcome> {
    store
        .delete_contact_from_category(&category.id, &contact.id)
        .await?;
    Ok(Outcome::redirect(category_path(&category.id), CONTACT_DELETED))
}

/// POST /categories/{id}/contacts/delete
pub async fn delete_all_contacts(
    store: &dyn ContactStore,
    category: Category,
) -> StoreResult<Outcome> {
    store.delete_all_contacts(&category.id).await?;
    Ok(Outcome::redirect(category_path(&category.id), CONTACTS_CLEARED))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::session::tests::session_store;
    use crate::store::SessionStore;

    async fn setup() -> (SessionStore, Category) {
        let store = session_store();
        store.create_new_category("Friends").await.unwrap();
        let category = store.get_all_categories().await.unwrap().remove(0);
        (store, category)
    }

    async fn reload(store: &SessionStore, category: &Category) -> Category {
        store
            .find_category_by_id(&category.id)
            .await
            .unwrap()
            .expect("category vanished")
    }

    #[tokio::test]
    async fn create_stores_trimmed_fields() {
        let (store, category) = setup().await;
        let form = ContactForm::new("  Jane Doe ", " 555-0100 ", " jane@example.com");

        let outcome = create_contact(&store, category.clone(), form).await.unwrap();
        assert_eq!(
            outcome,
            Outcome::redirect(format!("/categories/{}", category.id), "The contact was added.")
        );

        let loaded = reload(&store, &category).await;
        assert_eq!(loaded.contacts.len(), 1);
        let contact = &loaded.contacts[0];
        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.phone, "555-0100");
        assert_eq!(contact.email, "jane@example.com");
    }

    #[tokio::test]
    async fn name_with_digits_rejected() {
        let (store, category) = setup().await;
        let form = ContactForm::new("John123", "555", "john@example.com");

        let outcome = create_contact(&store, category.clone(), form).await.unwrap();
        assert!(!outcome.is_success());
        assert_eq!(
            outcome.message(),
            Some("Name must only contain alphabetic characters and spaces.")
        );
        let Outcome::Render { view: View::Category { form, .. }, .. } = outcome else {
            panic!("expected category page");
        };
        assert_eq!(form.name, "John123");
        assert_eq!(form.email, "john@example.com");

        assert!(reload(&store, &category).await.contacts.is_empty());
    }

    #[tokio::test]
    async fn empty_name_rejected() {
        let (store, category) = setup().await;
        let outcome = create_contact(&store, category, ContactForm::new("  ", "", ""))
            .await
            .unwrap();
        assert_eq!(outcome.message(), Some("Name must be between 1 and 100 characters"));
    }

    #[tokio::test]
    async fn phone_and_email_are_free_form() {
        let (store, category) = setup().await;
        let form = ContactForm::new("Jane", "call me maybe", "not an email");
        let outcome = create_contact(&store, category, form).await.unwrap();
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn edit_form_prefills_contact() {
        let (store, category) = setup().await;
        create_contact(&store, category.clone(), ContactForm::new("Jane", "1", "j@x"))
            .await
            .unwrap();
        let category = reload(&store, &category).await;
        let contact = category.contacts[0].clone();

        let outcome = edit_contact_form(category, contact);
        let Outcome::Render { view: View::EditContact { form, .. }, flash: None } = outcome else {
            panic!("expected edit form");
        };
        assert_eq!(form, ContactForm::new("Jane", "1", "j@x"));
    }

    #[tokio::test]
    async fn update_edits_in_place() {
        let (store, category) = setup().await;
        create_contact(&store, category.clone(), ContactForm::new("Jane", "", ""))
            .await
            .unwrap();
        let category = reload(&store, &category).await;
        let contact = category.contacts[0].clone();

        let outcome = update_contact(
            &store,
            category.clone(),
            contact.clone(),
            ContactForm::new("Janet Doe", "555", "janet@example.com"),
        )
        .await
        .unwrap();
        assert_eq!(outcome.message(), Some("The contact was edited."));

        let loaded = reload(&store, &category).await;
        assert_eq!(loaded.contacts.len(), 1);
        assert_eq!(loaded.contacts[0].id, contact.id);
        assert_eq!(loaded.contacts[0].name, "Janet Doe");
        assert_eq!(loaded.contacts[0].email, "janet@example.com");
    }

    #[tokio::test]
    async fn rejected_update_echoes_input_and_keeps_contact() {
        let (store, category) = setup().await;
        create_contact(&store, category.clone(), ContactForm::new("Jane", "", ""))
            .await
            .unwrap();
        let category = reload(&store, &category).await;
        let contact = category.contacts[0].clone();

        let outcome = update_contact(
            &store,
            category.clone(),
            contact,
            ContactForm::new("J4ne", "555", ""),
        )
        .await
        .unwrap();
        let Outcome::Render { view: View::EditContact { form, contact, .. }, .. } = outcome else {
            panic!("expected edit form");
        };
        assert_eq!(form.name, "J4ne");
        assert_eq!(form.phone, "555");
        assert_eq!(contact.name, "Jane");
        assert_eq!(reload(&store, &category).await.contacts[0].name, "Jane");
    }

    #[tokio::test]
    async fn delete_one_and_all() {
        let (store, category) = setup().await;
        for name in ["Jane", "John", "Jim"] {
            create_contact(&store, category.clone(), ContactForm::new(name, "", ""))
                .await
                .unwrap();
        }
        let loaded = reload(&store, &category).await;
        let jane = loaded.contacts[0].clone();

        let outcome = delete_contact(&store, loaded, jane.clone()).await.unwrap();
        assert_eq!(outcome.message(), Some("The contact has been deleted."));
        let loaded = reload(&store, &category).await;
        assert_eq!(loaded.contacts.len(), 2);
        assert!(crate::store::find_contact_by_id(&jane.id, &loaded.contacts).is_none());

        let outcome = delete_all_contacts(&store, loaded).await.unwrap();
        assert_eq!(outcome.message(), Some("All contacts have been deleted."));
        let loaded = reload(&store, &category).await;
        assert_eq!(loaded.title, "Friends");
        assert!(loaded.contacts.is_empty());
    }

    #[test]
    fn contact_info_renders_both_entities() {
        let category = Category::new("1".into(), "Friends");
        let contact = Contact {
            id: "9".into(),
            name: "Jane".into(),
            phone: String::new(),
            email: String::new(),
            category_id: "1".into(),
        };
        let outcome = contact_info(category, contact);
        assert!(matches!(
            outcome,
            Outcome::Render { view: View::ContactInfo { .. }, flash: None }
        ));
    }
}
