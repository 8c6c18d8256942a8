//! Tera registration for page templates
//!
//! Registers the breadcrumb helpers as template functions and
//! `simple_format` as a filter. All of them return markup, so templates mark
//! the output with `| safe`:
//!
//! ```tera
//! {{ breadcrumb(label="Fruits", href="/fruits", active=true) | safe }}
//! {{ breadcrumbs(entries=trail) | safe }}
//! {{ description | simple_format(class="lead") | safe }}
//! ```

use crate::breadcrumbs::{Breadcrumb, render_entry, render_list};
use crate::escaping::SafeString;
use crate::tags::HtmlAttrs;
use crate::text::simple_format;
use std::collections::HashMap;
use tera::{Result as TeraResult, Tera, Value};

/// Register every helper on a Tera instance
pub fn register_helpers(tera: &mut Tera) {
	tera.register_function("breadcrumb", breadcrumb);
	tera.register_function("breadcrumbs", breadcrumbs);
	tera.register_filter("simple_format", simple_format_filter);
}

fn string_arg<'a>(args: &'a HashMap<String, Value>, name: &str, helper: &str) -> TeraResult<&'a str> {
	args.get(name).and_then(Value::as_str).ok_or_else(|| {
		tera::Error::msg(format!("{helper} requires a string `{name}` argument"))
	})
}

/// `breadcrumb(label, href, active=false)`
pub fn breadcrumb(args: &HashMap<String, Value>) -> TeraResult<Value> {
	let label = string_arg(args, "label", "breadcrumb")?;
	let href = string_arg(args, "href", "breadcrumb")?;
	let active = match args.get("active") {
		None | Some(Value::Null) => false,
		Some(Value::Bool(active)) => *active,
		Some(other) => {
			return Err(tera::Error::msg(format!(
				"breadcrumb `active` must be a boolean, got {other}"
			)));
		}
	};
	Ok(Value::String(render_entry(label, href, active).into_string()))
}

/// `breadcrumbs(entries)`
///
/// Entries may be pre-rendered fragments (strings) or objects with `label`,
/// `href` and an optional `active`.
pub fn breadcrumbs(args: &HashMap<String, Value>) -> TeraResult<Value> {
	let entries = match args.get("entries") {
		None | Some(Value::Null) => Vec::new(),
		Some(Value::Array(items)) => items
			.iter()
			.map(entry_fragment)
			.collect::<TeraResult<Vec<_>>>()?,
		Some(other) => {
			return Err(tera::Error::msg(format!(
				"breadcrumbs `entries` must be an array, got {other}"
			)));
		}
	};
	Ok(Value::String(render_list(&entries).into_string()))
}

fn entry_fragment(item: &Value) -> TeraResult<SafeString> {
	match item {
		Value::String(fragment) => Ok(SafeString::new(fragment.clone())),
		Value::Object(_) => {
			let crumb: Breadcrumb = serde_json::from_value(item.clone())
				.map_err(|e| tera::Error::msg(format!("invalid breadcrumb entry: {e}")))?;
			Ok(crumb.render())
		}
		other => Err(tera::Error::msg(format!(
			"breadcrumb entry must be a string or an object, got {other}"
		))),
	}
}

/// `value | simple_format(class="...")`
pub fn simple_format_filter(value: &Value, args: &HashMap<String, Value>) -> TeraResult<Value> {
	let text = match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		other => other.to_string(),
	};
	let attrs = HtmlAttrs::new().class(args.get("class").and_then(Value::as_str).unwrap_or(""));
	Ok(Value::String(simple_format(&text, &attrs).into_string()))
}
