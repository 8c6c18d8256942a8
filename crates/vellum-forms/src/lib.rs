//! Form builder with a read-only display mode
//!
//! A [`FormBuilder`] renders the fields of one form bound to one object. The
//! same template code serves both editing and display: construct the builder
//! with `readonly` set and every field helper renders a static fragment
//! holding the field's current value instead of an editable widget.
//!
//! ## Field helpers
//!
//! - Text-like inputs (`text_field`, `email_field`, `date_field`, ...) and
//!   `check_box` show the value in a `<p>`
//! - `text_area` shows the value as formatted paragraphs
//! - Selection and collection helpers show the raw value; choices and
//!   collections are ignored
//! - `file_field` shows only an explicit `readonly_value`
//! - `hidden_field` renders nothing
//! - `fields_for` passes the flag down to the nested form
//!
//! Any helper can take a `readonly_value` option that replaces the displayed
//! value. Helpers can also be called by name with JSON arguments through
//! [`FormBuilder::render_helper`].
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use vellum_forms::{BuilderOptions, FieldOptions, FormBuilder};
//!
//! let fruit = json!({"name": "Apple", "notes": "Crisp\n\nSweet"});
//! let form = FormBuilder::new("fruit", &fruit, BuilderOptions::new().readonly(true));
//!
//! let name = form
//!     .text_field("name", &FieldOptions::new().readonly_value("Granny Smith"))
//!     .unwrap();
//! assert_eq!(name.as_str(), r#"<p class="form-control-plaintext">Granny Smith</p>"#);
//!
//! let notes = form.text_area("notes", &FieldOptions::new()).unwrap();
//! assert_eq!(
//!     notes.as_str(),
//!     "<p class=\"form-control-plaintext\">Crisp</p>\n\n<p class=\"form-control-plaintext\">Sweet</p>"
//! );
//! ```

pub mod builder;
pub mod dispatch;
pub mod error;
pub mod field_kind;
pub mod object;
pub mod options;
mod readonly;
pub mod widgets;

pub use builder::FormBuilder;
pub use error::{FormError, FormResult};
pub use field_kind::{DisplayStrategy, FieldDescriptor, FieldKind, Signature, ValueSource};
pub use object::{FormObject, to_form_object};
pub use options::{BuilderOptions, CssFramework, FieldOptions};
pub use widgets::{Choice, ChoiceGroup, Widget};
