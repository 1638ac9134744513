//! Domain models and form input validation
//!
//! Validation never panics: invalid input comes back as a
//! [`ValidationError`] whose `Display` is the message shown to the user.

pub mod category;
pub mod contact;
pub mod forms;
pub mod id;
pub mod validation;

pub use category::Category;
pub use contact::{Contact, ContactDetails};
pub use forms::{CategoryForm, ContactForm};
pub use id::RecordId;
pub use validation::{validate_category_title, validate_contact_name, ValidationError};
