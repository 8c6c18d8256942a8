//! Form builder with a read-only display mode.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use vellum::forms::{BuilderOptions, FieldOptions, FormBuilder};
//!
//! let fruit = json!({"name": "Apple"});
//! let form = FormBuilder::new("fruit", &fruit, BuilderOptions::new().readonly(true));
//! assert_eq!(
//!     form.text_field("name", &FieldOptions::new()).unwrap().as_str(),
//!     r#"<p class="form-control-plaintext">Apple</p>"#
//! );
//! ```

pub use vellum_forms::*;
