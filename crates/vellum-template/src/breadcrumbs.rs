//! Breadcrumb navigation helpers
//!
//! A breadcrumb trail is an ordered list of links; the entry for the current
//! page carries the `active` marker class.
//!
//! ```
//! use vellum_template::breadcrumbs::{render_entry, render_list};
//!
//! let trail = render_list(&[
//!     render_entry("Home", "/", false),
//!     render_entry("Fruits", "/fruits", true),
//! ]);
//! assert_eq!(
//!     trail.as_str(),
//!     concat!(
//!         r#"<ol class="breadcrumb bg-body-tertiary p-2">"#,
//!         r#"<li class="breadcrumb-item"><a href="/">Home</a></li>"#,
//!         r#"<li class="breadcrumb-item active"><a href="/fruits">Fruits</a></li>"#,
//!         "</ol>",
//!     )
//! );
//! ```

use crate::escaping::SafeString;
use crate::tags::{HtmlAttrs, content_tag, content_tag_safe};
use serde::{Deserialize, Serialize};

/// Classes on the containing `<ol>`
pub const LIST_CLASS: &str = "breadcrumb bg-body-tertiary p-2";
/// Class on every `<li>` entry
pub const ITEM_CLASS: &str = "breadcrumb-item";
/// Marker class on the entry for the current page
pub const ACTIVE_CLASS: &str = "active";

/// A single breadcrumb entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
	pub label: String,
	pub href: String,
	#[serde(default)]
	pub active: bool,
}

impl Breadcrumb {
	/// Create an inactive entry
	///
	/// # Examples
	///
	/// ```
	/// use vellum_template::Breadcrumb;
	///
	/// let crumb = Breadcrumb::new("Fruits", "#fruits");
	/// assert!(!crumb.active);
	/// assert_eq!(
	///     crumb.render().as_str(),
	///     r##"<li class="breadcrumb-item"><a href="#fruits">Fruits</a></li>"##
	/// );
	/// ```
	pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			href: href.into(),
			active: false,
		}
	}

	/// Mark this entry as the current page
	pub fn active(mut self, active: bool) -> Self {
		self.active = active;
		self
	}

	pub fn render(&self) -> SafeString {
		render_entry(&self.label, &self.href, self.active)
	}
}

/// Render one entry as `<li>` wrapping a link
pub fn render_entry(label: &str, href: &str, active: bool) -> SafeString {
	let mut item_attrs = HtmlAttrs::new().class(ITEM_CLASS);
	if active {
		item_attrs = item_attrs.class(ACTIVE_CLASS);
	}
	let link = content_tag("a", label, &HtmlAttrs::new().attr("href", href));
	content_tag_safe("li", &link, &item_attrs)
}

/// Wrap pre-rendered entries, in order, in the containing `<ol>`
pub fn render_list(entries: &[SafeString]) -> SafeString {
	let inner = SafeString::concat(entries.iter().cloned());
	content_tag_safe("ol", &inner, &HtmlAttrs::new().class(LIST_CLASS))
}

/// Render a whole trail from entry values
pub fn render_trail(crumbs: &[Breadcrumb]) -> SafeString {
	let entries: Vec<SafeString> = crumbs.iter().map(Breadcrumb::render).collect();
	render_list(&entries)
}
