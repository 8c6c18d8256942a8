//! Builder and per-field options
//!
//! Both option sets can be assembled in code or deserialized from a JSON
//! mapping, so templates can pass them straight through.

use crate::object::display_text;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;
use vellum_template::HtmlAttrs;

/// CSS framework the display fragments are styled for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CssFramework {
	/// Bootstrap 5 (`form-control-plaintext`)
	#[default]
	Bootstrap5,
	/// Tailwind CSS
	Tailwind,
	/// No CSS framework (plain HTML)
	None,
}

impl CssFramework {
	/// Class carried by read-only display fragments
	pub fn plaintext_class(self) -> Option<&'static str> {
		match self {
			CssFramework::Bootstrap5 => Some("form-control-plaintext"),
			CssFramework::Tailwind => Some("py-2"),
			CssFramework::None => None,
		}
	}
}

/// Options fixed when a form builder is constructed
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vellum_forms::BuilderOptions;
///
/// let options = BuilderOptions::from_value(json!({"readonly": true})).unwrap();
/// assert_eq!(options.readonly, Some(true));
///
/// let defaults = BuilderOptions::from_value(json!({})).unwrap();
/// assert_eq!(defaults.readonly, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuilderOptions {
	/// Render display fragments instead of widgets. Absent means off, or for
	/// a nested form, the parent's setting.
	pub readonly: Option<bool>,
	/// Absent means Bootstrap 5, or for a nested form, the parent's framework
	pub css_framework: Option<CssFramework>,
	/// Prefix for generated element ids
	pub namespace: Option<String>,
}

impl BuilderOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_value(value: Value) -> serde_json::Result<Self> {
		serde_json::from_value(value)
	}

	pub fn readonly(mut self, readonly: bool) -> Self {
		self.readonly = Some(readonly);
		self
	}

	pub fn css_framework(mut self, css_framework: CssFramework) -> Self {
		self.css_framework = Some(css_framework);
		self
	}

	pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = Some(namespace.into());
		self
	}
}

// Keeps an explicit `null` as `Some(Value::Null)`; `#[serde(default)]` covers
// the absent case.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
	D: Deserializer<'de>,
{
	Value::deserialize(deserializer).map(Some)
}

/// Options for a single field call
///
/// `readonly_value` overrides the displayed value in read-only mode. Every
/// unrecognised key becomes an HTML attribute of the editable widget.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vellum_forms::FieldOptions;
///
/// let options = FieldOptions::from_value(json!({
///     "readonly_value": "Hidden by policy",
///     "placeholder": "Title",
/// })).unwrap();
/// assert_eq!(options.readonly_value, Some(json!("Hidden by policy")));
/// assert_eq!(options.html_attrs().get("placeholder"), Some("Title"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FieldOptions {
	#[serde(default, deserialize_with = "present")]
	pub readonly_value: Option<Value>,
	/// Select family: lead with an empty option
	#[serde(default)]
	pub include_blank: bool,
	/// Select family: lead with a prompt option
	#[serde(default)]
	pub prompt: Option<String>,
	#[serde(flatten)]
	pub html: BTreeMap<String, Value>,
}

impl FieldOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_value(value: Value) -> serde_json::Result<Self> {
		serde_json::from_value(value)
	}

	pub fn readonly_value(mut self, value: impl Into<Value>) -> Self {
		self.readonly_value = Some(value.into());
		self
	}

	pub fn include_blank(mut self, include_blank: bool) -> Self {
		self.include_blank = include_blank;
		self
	}

	pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
		self.prompt = Some(prompt.into());
		self
	}

	pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.html.insert(key.into(), value.into());
		self
	}

	/// HTML attributes for the editable widget, sorted by key
	///
	/// `true` renders as a bare boolean attribute; `false` and `null` are
	/// dropped.
	pub fn html_attrs(&self) -> HtmlAttrs {
		let mut attrs = HtmlAttrs::new();
		for (key, value) in &self.html {
			attrs = match value {
				Value::Bool(true) => attrs.flag(key.as_str()),
				Value::Bool(false) | Value::Null => attrs,
				other => attrs.attr(key.as_str(), display_text(other)),
			};
		}
		attrs
	}
}
