//! Objects a form is bound to
//!
//! A form builder reads the current value of each field from its bound
//! object by attribute name. Any JSON-shaped record can serve as one.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Attribute lookup on a bound object
///
/// `None` means the object has no such attribute, which is different from an
/// attribute holding `null`.
pub trait FormObject {
	fn read_attribute(&self, name: &str) -> Option<Value>;
}

impl FormObject for Value {
	fn read_attribute(&self, name: &str) -> Option<Value> {
		self.as_object().and_then(|map| map.get(name)).cloned()
	}
}

impl FormObject for Map<String, Value> {
	fn read_attribute(&self, name: &str) -> Option<Value> {
		self.get(name).cloned()
	}
}

impl FormObject for HashMap<String, Value> {
	fn read_attribute(&self, name: &str) -> Option<Value> {
		self.get(name).cloned()
	}
}

impl FormObject for BTreeMap<String, Value> {
	fn read_attribute(&self, name: &str) -> Option<Value> {
		self.get(name).cloned()
	}
}

impl<T: FormObject + ?Sized> FormObject for &T {
	fn read_attribute(&self, name: &str) -> Option<Value> {
		(**self).read_attribute(name)
	}
}

/// Convert any serializable record into a bound object
///
/// # Examples
///
/// ```
/// use serde::Serialize;
/// use vellum_forms::{FormObject, to_form_object};
///
/// #[derive(Serialize)]
/// struct Fruit { name: String, ripe: bool }
///
/// let object = to_form_object(&Fruit { name: "Apple".into(), ripe: true }).unwrap();
/// assert_eq!(object.read_attribute("name"), Some(serde_json::json!("Apple")));
/// assert_eq!(object.read_attribute("colour"), None);
/// ```
pub fn to_form_object<T: Serialize + ?Sized>(record: &T) -> serde_json::Result<Value> {
	serde_json::to_value(record)
}

/// Text shown for a value in a read-only fragment
///
/// `null` is empty, strings are verbatim, arrays are joined with `", "` and
/// objects fall back to compact JSON.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vellum_forms::object::display_text;
///
/// assert_eq!(display_text(&json!(null)), "");
/// assert_eq!(display_text(&json!("Apple")), "Apple");
/// assert_eq!(display_text(&json!(42)), "42");
/// assert_eq!(display_text(&json!(["red", "green"])), "red, green");
/// ```
pub fn display_text(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => n.to_string(),
		Value::Array(items) => items
			.iter()
			.map(display_text)
			.collect::<Vec<_>>()
			.join(", "),
		Value::Object(_) => value.to_string(),
	}
}

/// Text used when a value is compared against option values or written into
/// an input's `value` attribute. `None` for `null`.
pub(crate) fn input_text(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		other => Some(display_text(other)),
	}
}
