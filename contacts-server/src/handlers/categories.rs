//! Category pages and mutations

use super::{categories_path, category_path, Outcome, View};
use super::{CATEGORY_CREATED, CATEGORY_DELETED, CATEGORY_UPDATED};
use crate::models::{validate_category_title, Category, CategoryForm, ContactForm};
use crate::store::{ContactStore, StoreResult};

/// GET /
pub fn index() -> Outcome {
    Outcome::Redirect {
        to: categories_path(),
        flash: None,
    }
}

/// GET /categories
pub async fn list_categories(store: &dyn ContactStore) -> StoreResult<Outcome> {
    let categories = store.get_all_categories().await?;
    Ok(Outcome::render(View::Categories { categories }))
}

/// GET /categories/new
pub fn new_category_form() -> Outcome {
    Outcome::render(View::NewCategory {
        title: String::new(),
    })
}

/// POST /categories
pub async fn create_category(store: &dyn ContactStore, form: CategoryForm) -> StoreResult<Outcome> {
    let title = form.title();

    let existing = store.get_all_categories().await?;
    if let Err(error) = validate_category_title(title, &existing) {
        tracing::debug!(title, %error, "category rejected");
        return Ok(Outcome::rejected(
            View::NewCategory {
                title: title.to_owned(),
            },
            error,
        ));
    }

    store.create_new_category(title).await?;
    Ok(Outcome::redirect(categories_path(), CATEGORY_CREATED))
}

/// GET /categories/{id}
pub fn show_category(category: Category) -> Outcome {
    Outcome::render(View::Category {
        category,
        form: ContactForm::default(),
    })
}

/// POST /categories/{id}/edit
pub fn edit_category_form(category: Category) -> Outcome {
    let title = category.title.clone();
    Outcome::render(View::EditCategory { category, title })
}

/// POST /categories/{id}
///
/// Validated against every category, this one included, so resubmitting
/// the current title is reported as a duplicate.
pub async fn update_category(
    store: &dyn ContactStore,
    category: Category,
    form: CategoryForm,
) -> StoreResult<Outcome> {
    let title = form.title();

    let existing = store.get_all_categories().await?;
    if let Err(error) = validate_category_title(title, &existing) {
        tracing::debug!(title, %error, "category update rejected");
        return Ok(Outcome::rejected(
            View::EditCategory {
                category,
                title: title.to_owned(),
            },
            error,
        ));
    }

    store.update_category_by_id(&category.id, title).await?;
    Ok(Outcome::redirect(category_path(&category.id), CATEGORY_UPDATED))
}

/// POST /categories/{id}/delete
pub async fn delete_category(store: &dyn ContactStore, category: Category) -> StoreResult<Outcome> {
    store.delete_category_by_id(&category.id).await?;
    Ok(Outcome::redirect(categories_path(), CATEGORY_DELETED))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{Flash, FlashKind};
    use crate::store::session::tests::session_store;

    async fn only_category(store: &dyn ContactStore) -> Category {
        let mut all = store.get_all_categories().await.unwrap();
        assert_eq!(all.len(), 1);
        all.remove(0)
    }

    #[test]
    fn index_redirects_without_message() {
        assert_eq!(
            index(),
            Outcome::Redirect {
                to: "/categories".into(),
                flash: None
            }
        );
    }

    #[tokio::test]
    async fn create_then_duplicate() {
        let store = session_store();

        let outcome = create_category(&store, CategoryForm::new("Friends")).await.unwrap();
        assert!(outcome.is_success());
        assert_eq!(outcome.message(), Some("The category has been created."));
        assert!(matches!(&outcome, Outcome::Redirect { to, .. } if to == "/categories"));

        let outcome = create_category(&store, CategoryForm::new("Friends")).await.unwrap();
        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), Some("The title must be unique."));
        assert_eq!(
            outcome,
            Outcome::Render {
                view: View::NewCategory {
                    title: "Friends".into()
                },
                flash: Some(Flash {
                    kind: FlashKind::Error,
                    message: "The title must be unique.".into()
                }),
            }
        );

        let all = store.get_all_categories().await.unwrap();
        assert_eq!(all.iter().filter(|c| c.title == "Friends").count(), 1);
    }

    #[tokio::test]
    async fn title_is_trimmed_before_storing() {
        let store = session_store();
        create_category(&store, CategoryForm::new("  Work  ")).await.unwrap();
        assert_eq!(only_category(&store).await.title, "Work");
    }

    #[tokio::test]
    async fn blank_title_rejected() {
        let store = session_store();
        let outcome = create_category(&store, CategoryForm::new("   ")).await.unwrap();
        assert_eq!(
            outcome.message(),
            Some("The title must be between 1 and 100 characters")
        );
        assert!(store.get_all_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_renders_all_categories() {
        let store = session_store();
        create_category(&store, CategoryForm::new("A")).await.unwrap();
        create_category(&store, CategoryForm::new("B")).await.unwrap();

        let Outcome::Render { view: View::Categories { categories }, flash: None } =
            list_categories(&store).await.unwrap()
        else {
            panic!("expected category list");
        };
        let titles: Vec<_> = categories.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
    }

    #[tokio::test]
    async fn update_redirects_to_detail() {
        let store = session_store();
        create_category(&store, CategoryForm::new("Friends")).await.unwrap();
        let category = only_category(&store).await;
        let id = category.id.clone();

        let outcome = update_category(&store, category, CategoryForm::new("Pals"))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::redirect(format!("/categories/{id}"), CATEGORY_UPDATED));
        assert_eq!(only_category(&store).await.title, "Pals");
    }

    #[tokio::test]
    async fn update_to_same_title_is_duplicate() {
        let store = session_store();
        create_category(&store, CategoryForm::new("Friends")).await.unwrap();
        let category = only_category(&store).await;

        let outcome = update_category(&store, category, CategoryForm::new("Friends"))
            .await
            .unwrap();
        assert_eq!(outcome.message(), Some("The title must be unique."));
    }

    #[tokio::test]
    async fn rejected_update_echoes_submitted_title() {
        let store = session_store();
        create_category(&store, CategoryForm::new("Friends")).await.unwrap();
        let category = only_category(&store).await;
        let long = "x".repeat(101);

        let outcome = update_category(&store, category, CategoryForm::new(long.clone()))
            .await
            .unwrap();
        let Outcome::Render { view: View::EditCategory { title, category }, .. } = outcome else {
            panic!("expected edit form");
        };
        assert_eq!(title, long);
        assert_eq!(category.title, "Friends");
        assert_eq!(only_category(&store).await.title, "Friends");
    }

    #[tokio::test]
    async fn edit_form_prefills_current_title() {
        let category = Category::new("1".into(), "Friends");
        let outcome = edit_category_form(category);
        assert!(matches!(
            outcome,
            Outcome::Render { view: View::EditCategory { ref title, .. }, .. } if title == "Friends"
        ));
    }

    #[tokio::test]
    async fn delete_returns_to_list() {
        let store = session_store();
        create_category(&store, CategoryForm::new("Friends")).await.unwrap();
        let category = only_category(&store).await;

        let outcome = delete_category(&store, category).await.unwrap();
        assert_eq!(outcome, Outcome::redirect("/categories", CATEGORY_DELETED));
        assert!(store.get_all_categories().await.unwrap().is_empty());
    }
}
