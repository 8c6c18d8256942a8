//! Read-only substitution
//!
//! One routine serves every field kind: resolve the value to show, then wrap
//! it the way the kind's [`DisplayStrategy`] asks for.

use crate::error::{FormError, FormResult};
use crate::field_kind::{DisplayStrategy, FieldKind, ValueSource};
use crate::object::{FormObject, display_text};
use crate::options::CssFramework;
use serde_json::Value;
use vellum_template::{HtmlAttrs, SafeString, content_tag, simple_format};

/// What a single read-only field renders from
pub(crate) struct Substitution<'a> {
	pub kind: FieldKind,
	pub object_name: &'a str,
	pub object: &'a dyn FormObject,
	pub method: &'a str,
	pub readonly_value: Option<&'a Value>,
	pub css_framework: CssFramework,
}

impl Substitution<'_> {
	fn resolve_value(&self) -> FormResult<Value> {
		if let Some(value) = self.readonly_value {
			return Ok(value.clone());
		}
		match self.kind.descriptor().value_source {
			ValueSource::OverrideOnly => Ok(Value::Null),
			ValueSource::Attribute => self
				.object
				.read_attribute(self.method)
				.ok_or_else(|| FormError::attribute_not_found(self.object_name, self.method)),
		}
	}

	pub fn render(&self) -> FormResult<SafeString> {
		let display = self.kind.descriptor().display;
		if display == DisplayStrategy::Suppressed {
			tracing::trace!(helper = %self.kind, attribute = self.method, "suppressed");
			return Ok(SafeString::empty());
		}

		let value = self.resolve_value()?;
		tracing::trace!(
			helper = %self.kind,
			attribute = self.method,
			overridden = self.readonly_value.is_some(),
			"substituted display fragment"
		);

		let attrs = match self.css_framework.plaintext_class() {
			Some(class) => HtmlAttrs::new().class(class),
			None => HtmlAttrs::new(),
		};
		let text = display_text(&value);
		Ok(match display {
			DisplayStrategy::SimpleFormat => simple_format(&text, &attrs),
			_ => content_tag("p", &text, &attrs),
		})
	}
}
