//! Server-side HTML rendering
//!
//! Templates are compiled into the binary. Names end in `.html`, so
//! minijinja autoescapes every interpolated value.

use std::sync::Arc;

use minijinja::Environment;
use serde::Serialize;

use crate::handlers::{Flash, View};

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../templates/layout.html")),
    ("categories.html", include_str!("../../templates/categories.html")),
    ("new_category.html", include_str!("../../templates/new_category.html")),
    ("category.html", include_str!("../../templates/category.html")),
    ("edit_category.html", include_str!("../../templates/edit_category.html")),
    ("contact_info.html", include_str!("../../templates/contact_info.html")),
    ("edit_contact.html", include_str!("../../templates/edit_contact.html")),
];

/// Root context every page sees.
#[derive(Serialize)]
struct PageContext<'a> {
    view: &'a View,
    flashes: &'a [Flash],
}

/// Loaded template environment. Cheap to clone.
#[derive(Clone)]
pub struct Templates {
    env: Arc<Environment<'static>>,
}

impl Templates {
    /// Parse all page templates. Fails on a syntax error in any of them.
    pub fn load() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env: Arc::new(env) })
    }

    pub fn render(&self, view: &View, flashes: &[Flash]) -> Result<String, minijinja::Error> {
        let template = self.env.get_template(view.template())?;
        template.render(PageContext { view, flashes })
    }
}

impl std::fmt::Debug for Templates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Templates")
            .field("count", &TEMPLATES.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Contact, ContactForm, RecordId};

    fn category() -> Category {
        let mut category = Category::new(RecordId::from(1), "Friends");
        category.contacts.push(contact());
        category
    }

    fn contact() -> Contact {
        Contact {
            id: RecordId::from(7),
            name: "Jane Doe".into(),
            phone: "555-0100".into(),
            email: "jane@example.com".into(),
            category_id: RecordId::from(1),
        }
    }

    fn render(view: View) -> String {
        Templates::load()
            .expect("templates parse")
            .render(&view, &[])
            .expect("template renders")
    }

    #[test]
    fn category_list_links_each_category() {
        let html = render(View::Categories {
            categories: vec![category()],
        });
        assert!(html.contains(r#"href="/categories/1""#));
        assert!(html.contains("Friends"));
    }

    #[test]
    fn empty_list_has_placeholder() {
        let html = render(View::Categories { categories: vec![] });
        assert!(html.contains("No categories yet."));
    }

    #[test]
    fn category_detail_lists_contacts_and_echoes_form() {
        let html = render(View::Category {
            category: category(),
            form: ContactForm::new("John123", "", ""),
        });
        assert!(html.contains("/categories/1/contacts/7/info"));
        assert!(html.contains(r#"value="John123""#));
        assert!(html.contains(r#"action="/categories/1/contacts/delete""#));
    }

    #[test]
    fn edit_forms_prefill_values() {
        let html = render(View::EditCategory {
            category: category(),
            title: "Pals".into(),
        });
        assert!(html.contains(r#"value="Pals""#));
        assert!(html.contains(r#"action="/categories/1""#));

        let html = render(View::EditContact {
            category: category(),
            contact: contact(),
            form: ContactForm::new("Janet", "1", "j@x"),
        });
        assert!(html.contains(r#"value="Janet""#));
        assert!(html.contains(r#"action="/categories/1/contacts/7""#));
    }

    #[test]
    fn contact_info_shows_fields() {
        let html = render(View::ContactInfo {
            category: category(),
            contact: contact(),
        });
        assert!(html.contains("555-0100"));
        assert!(html.contains("jane@example.com"));
    }

    #[test]
    fn flashes_rendered_with_kind() {
        let html = Templates::load()
            .unwrap()
            .render(
                &View::NewCategory {
                    title: String::new(),
                },
                &[Flash::error("The title must be unique.")],
            )
            .unwrap();
        assert!(html.contains(r#"class="flash error""#));
        assert!(html.contains("The title must be unique."));
    }

    #[test]
    fn user_input_is_escaped() {
        let html = render(View::NewCategory {
            title: "<script>".into(),
        });
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
