//! Markup primitives and page navigation helpers.
//!
//! # Examples
//!
//! ```
//! use vellum::template::{render_entry, render_list};
//!
//! let trail = render_list(&[render_entry("Fruits", "#fruits", true)]);
//! assert_eq!(
//!     trail.as_str(),
//!     r##"<ol class="breadcrumb bg-body-tertiary p-2"><li class="breadcrumb-item active"><a href="#fruits">Fruits</a></li></ol>"##
//! );
//! ```

pub use vellum_template::*;
