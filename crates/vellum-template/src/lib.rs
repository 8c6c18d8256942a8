//! Markup primitives for server-rendered pages
//!
//! This crate provides the building blocks the form helpers and page
//! templates share:
//! - HTML escaping and the [`SafeString`] fragment type
//! - Tag builders with ordered, escaped attributes
//! - [`simple_format`] for turning plain text into paragraphs
//! - Breadcrumb trail rendering
//! - Tera registration of the above (feature `tera`)

pub mod breadcrumbs;
pub mod escaping;
pub mod tags;
#[cfg(feature = "tera")]
pub mod tera_helpers;
pub mod text;

pub use breadcrumbs::{Breadcrumb, render_entry, render_list, render_trail};
pub use escaping::{SafeString, escape_attr, escape_html};
pub use tags::{HtmlAttrs, content_tag, content_tag_safe, tag};
#[cfg(feature = "tera")]
pub use tera_helpers::register_helpers;
pub use text::simple_format;
