//! # Vellum
//!
//! Server-rendered form helpers with a read-only display mode, and page
//! navigation helpers.
//!
//! One form template serves both editing and display: a form builder
//! constructed with `readonly` renders each field as a static fragment
//! showing its value instead of an editable widget. Breadcrumb helpers render
//! navigation trails for the same pages.
//!
//! ## Feature Flags
//!
//! - `forms` - [`FormBuilder`] and the field helpers
//! - `templates` - escaping, tag builders, `simple_format` and breadcrumbs
//! - `tera` - registers the breadcrumb helpers and `simple_format` with Tera
//! - `full` (default) - all of the above
//!
//! ## Quick Example
//!
//! ```
//! use vellum::prelude::*;
//! use serde_json::json;
//!
//! let fruit = json!({"name": "Apple", "colour": "green"});
//! let form = FormBuilder::new("fruit", &fruit, BuilderOptions::new().readonly(true));
//!
//! let mut page = render_list(&[
//!     render_entry("Fruits", "/fruits", false),
//!     render_entry("Apple", "/fruits/1", true),
//! ]);
//! page.push(&form.text_field("name", &FieldOptions::new()).unwrap());
//! page.push(&form.hidden_field("colour", &FieldOptions::new()).unwrap());
//!
//! assert!(page.as_str().ends_with(r#"<p class="form-control-plaintext">Apple</p>"#));
//! ```

#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "templates")]
pub mod template;

// Re-export form builder
#[cfg(feature = "forms")]
pub use vellum_forms::{
	BuilderOptions, CssFramework, FieldKind, FieldOptions, FormBuilder, FormError, FormObject,
	FormResult,
};

// Re-export breadcrumbs and fragments
#[cfg(feature = "templates")]
pub use vellum_template::{Breadcrumb, SafeString, render_entry, render_list, render_trail};

#[cfg(feature = "tera")]
pub use vellum_template::register_helpers;

/// Common imports
pub mod prelude {
	#[cfg(feature = "forms")]
	pub use crate::{
		BuilderOptions, CssFramework, FieldOptions, FormBuilder, FormError, FormObject, FormResult,
	};

	#[cfg(feature = "templates")]
	pub use crate::{Breadcrumb, SafeString, render_entry, render_list, render_trail};
}
