//! Calling field helpers by name
//!
//! Template code does not know the builder's Rust signatures; it names a
//! helper and passes positional JSON arguments. [`FormBuilder::render_helper`]
//! checks the argument count against the helper's [`Signature`], decodes each
//! argument and calls the typed helper.
//!
//! In read-only mode only the method name and the options mapping are
//! decoded. The remaining positional arguments are counted but neither
//! decoded nor validated.

use crate::builder::FormBuilder;
use crate::error::{FormError, FormResult};
use crate::field_kind::{FieldKind, Signature};
use crate::object::display_text;
use crate::options::FieldOptions;
use crate::widgets::Choice;
use serde_json::Value;
use std::str::FromStr;
use vellum_template::SafeString;

const LABEL: &str = "label";

fn json_type(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

/// Positional arguments of one helper call
struct Args<'a> {
	helper: &'a str,
	values: &'a [Value],
}

impl<'a> Args<'a> {
	fn check_arity(&self, expected: std::ops::RangeInclusive<usize>) -> FormResult<()> {
		if expected.contains(&self.values.len()) {
			Ok(())
		} else {
			Err(FormError::shape(
				self.helper,
				self.values.len(),
				format!("{}..={}", expected.start(), expected.end()),
			))
		}
	}

	fn get(&self, index: usize) -> Option<&'a Value> {
		self.values.get(index).filter(|value| !value.is_null())
	}

	fn mismatch(&self, index: usize, value: &Value, expected: &str) -> FormError {
		FormError::shape(
			self.helper,
			format!("{} at position {}", json_type(value), index),
			expected,
		)
	}

	fn string(&self, index: usize) -> FormResult<&'a str> {
		match self.values.get(index) {
			Some(Value::String(s)) => Ok(s.as_str()),
			Some(other) => Err(self.mismatch(index, other, "string")),
			None => Err(FormError::shape(
				self.helper,
				self.values.len(),
				format!("a string at position {index}"),
			)),
		}
	}

	// Strings, numbers and booleans are all accepted as option values.
	fn scalar(&self, index: usize) -> FormResult<Option<String>> {
		match self.get(index) {
			None => Ok(None),
			Some(value @ (Value::String(_) | Value::Number(_) | Value::Bool(_))) => {
				Ok(Some(display_text(value)))
			}
			Some(other) => Err(self.mismatch(index, other, "string, number or boolean")),
		}
	}

	fn array(&self, index: usize) -> FormResult<&'a [Value]> {
		match self.values.get(index) {
			Some(Value::Array(items)) => Ok(items.as_slice()),
			Some(other) => Err(self.mismatch(index, other, "array")),
			None => Err(FormError::shape(
				self.helper,
				self.values.len(),
				format!("an array at position {index}"),
			)),
		}
	}

	fn options(&self, index: usize) -> FormResult<FieldOptions> {
		match self.get(index) {
			None => Ok(FieldOptions::new()),
			Some(value @ Value::Object(_)) => {
				FieldOptions::from_value(value.clone()).map_err(|source| FormError::InvalidOptions {
					helper: self.helper.to_string(),
					source,
				})
			}
			Some(other) => Err(self.mismatch(index, other, "options mapping")),
		}
	}

	fn string_list(&self, index: usize) -> FormResult<Vec<String>> {
		let Some(value) = self.get(index) else {
			return Ok(Vec::new());
		};
		let Value::Array(items) = value else {
			return Err(self.mismatch(index, value, "array of strings"));
		};
		items
			.iter()
			.map(|item| match item {
				Value::String(s) => Ok(s.clone()),
				other => Err(self.mismatch(index, other, "array of strings")),
			})
			.collect()
	}

	/// Choices as `"value"`, `["value", "label"]` or `{"value": .., "label": ..}`
	fn choices(&self, index: usize) -> FormResult<Vec<Choice>> {
		self.array(index)?
			.iter()
			.map(|item| match item {
				Value::String(s) => Ok((s.clone(), s.clone())),
				Value::Array(pair) if pair.len() == 2 => {
					Ok((display_text(&pair[0]), display_text(&pair[1])))
				}
				Value::Object(map) => match (map.get("value"), map.get("label")) {
					(Some(value), Some(label)) => Ok((display_text(value), display_text(label))),
					_ => Err(self.mismatch(index, item, "choice with `value` and `label`")),
				},
				other => Err(self.mismatch(index, other, "choice")),
			})
			.collect()
	}
}

impl FormBuilder<'_> {
	/// Render a field helper by name with positional JSON arguments
	///
	/// The first argument is always the method name. `label` is accepted as
	/// well as every [`FieldKind`].
	///
	/// # Errors
	///
	/// [`FormError::UnknownHelper`] for an unrecognised name,
	/// [`FormError::ArgumentShapeMismatch`] when the argument count or an
	/// argument's type is wrong, [`FormError::InvalidOptions`] for an options
	/// mapping that does not deserialize, and [`FormError::AttributeNotFound`]
	/// from the helper itself.
	///
	/// # Examples
	///
	/// ```
	/// use serde_json::json;
	/// use vellum_forms::{BuilderOptions, FormBuilder, FormError};
	///
	/// let post = json!({"title": "Hello"});
	/// let form = FormBuilder::new("post", &post, BuilderOptions::new().readonly(true));
	///
	/// let html = form.render_helper("text_field", &[json!("title")]).unwrap();
	/// assert_eq!(html.as_str(), r#"<p class="form-control-plaintext">Hello</p>"#);
	///
	/// let err = form.render_helper("radio_button", &[json!("title")]).unwrap_err();
	/// assert!(matches!(err, FormError::ArgumentShapeMismatch { .. }));
	/// ```
	pub fn render_helper(&self, name: &str, args: &[Value]) -> FormResult<SafeString> {
		self.dispatch(name, args).inspect_err(|err| {
			if !matches!(err, FormError::AttributeNotFound { .. }) {
				tracing::warn!(helper = name, error = %err, "rejected form helper call");
			}
		})
	}

	fn dispatch(&self, name: &str, values: &[Value]) -> FormResult<SafeString> {
		let args = Args {
			helper: name,
			values,
		};

		if name == LABEL {
			args.check_arity(1..=3)?;
			let text = args.scalar(1)?;
			return Ok(self.label(args.string(0)?, text.as_deref(), &args.options(2)?));
		}

		let kind = FieldKind::from_str(name).map_err(|_| FormError::UnknownHelper(name.to_string()))?;
		let signature = kind.descriptor().signature;
		args.check_arity(signature.arity())?;
		let method = args.string(0)?;

		if self.is_readonly() {
			let options = args.options(signature.options_index())?;
			return self.display(kind, method, &options);
		}

		match signature {
			Signature::Standard => {
				let options = args.options(1)?;
				match kind {
					FieldKind::TextArea => self.text_area(method, &options),
					FieldKind::FileField => self.file_field(method, &options),
					FieldKind::HiddenField => self.hidden_field(method, &options),
					_ => self.input(kind, method, &options),
				}
			}
			Signature::CheckBox => {
				let checked = args.scalar(2)?.unwrap_or_else(|| "1".to_string());
				// An explicit `null` drops the hidden input; absence keeps "0".
				let unchecked = if values.len() > 3 {
					args.scalar(3)?
				} else {
					Some("0".to_string())
				};
				self.check_box(method, &args.options(1)?, &checked, unchecked.as_deref())
			}
			Signature::Select => self.select(
				method,
				&args.choices(1)?,
				&args.options(2)?,
				&args.options(3)?,
			),
			Signature::TimeZoneSelect => self.time_zone_select(
				method,
				&args.string_list(1)?,
				&args.options(2)?,
				&args.options(3)?,
			),
			Signature::WeekdaySelect => {
				self.weekday_select(method, &args.options(1)?, &args.options(2)?)
			}
			Signature::Collection => {
				let collection = args.array(1)?;
				let value_method = args.string(2)?;
				let text_method = args.string(3)?;
				let options = args.options(4)?;
				let html_options = args.options(5)?;
				match kind {
					FieldKind::CollectionCheckBoxes => self.collection_check_boxes(
						method,
						collection,
						value_method,
						text_method,
						&options,
						&html_options,
					),
					FieldKind::CollectionRadioButtons => self.collection_radio_buttons(
						method,
						collection,
						value_method,
						text_method,
						&options,
						&html_options,
					),
					_ => self.collection_select(
						method,
						collection,
						value_method,
						text_method,
						&options,
						&html_options,
					),
				}
			}
			Signature::GroupedCollection => self.grouped_collection_select(
				method,
				args.array(1)?,
				args.string(2)?,
				args.string(3)?,
				args.string(4)?,
				args.string(5)?,
				&args.options(6)?,
				&args.options(7)?,
			),
			Signature::RadioButton => {
				let tag_value = args
					.scalar(1)?
					.ok_or_else(|| args.mismatch(1, &Value::Null, "string, number or boolean"))?;
				self.radio_button(method, &tag_value, &args.options(2)?)
			}
		}
	}
}
