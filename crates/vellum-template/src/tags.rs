//! Tag builders
//!
//! Small helpers for producing element markup with escaped attributes and
//! content. Attributes keep their insertion order so output is stable.

use crate::escaping::{SafeString, escape_attr, escape_html};

/// Ordered HTML attribute set
///
/// Setting an attribute that already exists replaces its value in place.
/// Boolean attributes (`checked`, `selected`, `multiple`) carry no value and
/// render bare.
///
/// # Examples
///
/// ```
/// use vellum_template::HtmlAttrs;
///
/// let attrs = HtmlAttrs::new()
///     .attr("type", "checkbox")
///     .class("form-check-input")
///     .flag("checked");
/// assert_eq!(attrs.render(), r#" type="checkbox" class="form-check-input" checked"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlAttrs {
	attrs: Vec<(String, Option<String>)>,
}

impl HtmlAttrs {
	pub fn new() -> Self {
		Self { attrs: Vec::new() }
	}

	/// Set an attribute
	pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.set(key, value);
		self
	}

	/// Set an attribute only when a value is present
	pub fn attr_opt(mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
		if let Some(value) = value {
			self.set(key, value);
		}
		self
	}

	/// Add a boolean attribute
	pub fn flag(mut self, key: impl Into<String>) -> Self {
		self.put(key.into(), None);
		self
	}

	/// Append a CSS class, merging with any existing `class` attribute
	pub fn class(mut self, value: impl Into<String>) -> Self {
		let class_value = value.into();
		if class_value.is_empty() {
			return self;
		}
		match self.attrs.iter_mut().find(|(k, _)| k == "class") {
			Some((_, Some(existing))) if !existing.is_empty() => {
				existing.push(' ');
				existing.push_str(&class_value);
			}
			Some((_, slot)) => *slot = Some(class_value),
			None => self.attrs.push(("class".to_string(), Some(class_value))),
		}
		self
	}

	/// Set an attribute in place
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.put(key.into(), Some(value.into()));
	}

	fn put(&mut self, key: String, value: Option<String>) {
		match self.attrs.iter_mut().find(|(k, _)| *k == key) {
			Some((_, slot)) => *slot = value,
			None => self.attrs.push((key, value)),
		}
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(k, _)| k == key)
			.and_then(|(_, v)| v.as_deref())
	}

	pub fn contains(&self, key: &str) -> bool {
		self.attrs.iter().any(|(k, _)| k == key)
	}

	pub fn is_empty(&self) -> bool {
		self.attrs.is_empty()
	}

	/// Attributes in insertion order; boolean attributes have no value
	pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
		self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
	}

	/// Render as a string with a leading space per attribute
	pub fn render(&self) -> String {
		let mut out = String::new();
		for (key, value) in &self.attrs {
			out.push(' ');
			out.push_str(key);
			if let Some(value) = value {
				out.push_str("=\"");
				out.push_str(&escape_attr(value));
				out.push('"');
			}
		}
		out
	}
}

/// Render a void element such as `<input />`
///
/// # Examples
///
/// ```
/// use vellum_template::{HtmlAttrs, tag};
///
/// let html = tag("input", &HtmlAttrs::new().attr("type", "hidden").attr("value", "1"));
/// assert_eq!(html.as_str(), r#"<input type="hidden" value="1" />"#);
/// ```
pub fn tag(name: &str, attrs: &HtmlAttrs) -> SafeString {
	SafeString::new(format!("<{}{} />", name, attrs.render()))
}

/// Render an element around escaped text
///
/// # Examples
///
/// ```
/// use vellum_template::{HtmlAttrs, content_tag};
///
/// let html = content_tag("p", "Fish & chips", &HtmlAttrs::new().class("lead"));
/// assert_eq!(html.as_str(), r#"<p class="lead">Fish &amp; chips</p>"#);
/// ```
pub fn content_tag(name: &str, text: &str, attrs: &HtmlAttrs) -> SafeString {
	SafeString::new(format!(
		"<{name}{}>{}</{name}>",
		attrs.render(),
		escape_html(text)
	))
}

/// Render an element around an existing fragment
pub fn content_tag_safe(name: &str, inner: &SafeString, attrs: &HtmlAttrs) -> SafeString {
	SafeString::new(format!("<{name}{}>{}</{name}>", attrs.render(), inner))
}
