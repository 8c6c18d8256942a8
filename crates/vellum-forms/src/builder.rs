//! Form builder
//!
//! A [`FormBuilder`] is bound to one object and renders one field per call.
//! With `readonly` set at construction, every field helper renders a static
//! display fragment showing the field's value instead of an editable widget;
//! otherwise the editable widget is rendered unchanged.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use vellum_forms::{BuilderOptions, FieldOptions, FormBuilder};
//!
//! let post = json!({"title": "Hello", "secret": "s3cr3t"});
//!
//! let form = FormBuilder::new("post", &post, BuilderOptions::new());
//! assert_eq!(
//!     form.text_field("title", &FieldOptions::new()).unwrap().as_str(),
//!     r#"<input type="text" name="post[title]" value="Hello" id="post_title" />"#
//! );
//!
//! let form = FormBuilder::new("post", &post, BuilderOptions::new().readonly(true));
//! assert_eq!(
//!     form.text_field("title", &FieldOptions::new()).unwrap().as_str(),
//!     r#"<p class="form-control-plaintext">Hello</p>"#
//! );
//! assert!(form.hidden_field("secret", &FieldOptions::new()).unwrap().is_empty());
//! ```

use crate::error::{FormError, FormResult};
use crate::field_kind::FieldKind;
use crate::object::{FormObject, display_text, input_text};
use crate::options::{BuilderOptions, CssFramework, FieldOptions};
use crate::readonly::Substitution;
use crate::widgets::{
	CheckboxInput, CheckboxSelectMultiple, Choice, ChoiceGroup, FileInput, HiddenInput, Input,
	RadioButton, RadioSelect, Select, Textarea, Widget, merge, sanitized_id,
};
use serde_json::Value;
use vellum_template::{HtmlAttrs, SafeString, content_tag};

const WEEKDAYS: [&str; 7] = [
	"Sunday",
	"Monday",
	"Tuesday",
	"Wednesday",
	"Thursday",
	"Friday",
	"Saturday",
];

/// Generates the `<input>`-backed helpers, one per text-like kind
macro_rules! input_helpers {
	($($name:ident => $kind:ident),* $(,)?) => {
		$(
			pub fn $name(&self, method: &str, options: &FieldOptions) -> FormResult<SafeString> {
				self.input(FieldKind::$kind, method, options)
			}
		)*
	};
}

/// Builds the fields of one form bound to one object
pub struct FormBuilder<'a> {
	object_name: String,
	object: &'a dyn FormObject,
	options: BuilderOptions,
	readonly: bool,
	css_framework: CssFramework,
}

impl<'a> FormBuilder<'a> {
	/// Create a builder; the `readonly` option is read once here and fixed
	/// for the builder's lifetime
	pub fn new(
		object_name: impl Into<String>,
		object: &'a dyn FormObject,
		options: BuilderOptions,
	) -> Self {
		let object_name = object_name.into();
		let readonly = options.readonly.unwrap_or(false);
		let css_framework = options.css_framework.unwrap_or_default();
		tracing::debug!(object_name = %object_name, readonly, "form builder created");

		Self {
			object_name,
			object,
			options,
			readonly,
			css_framework,
		}
	}

	pub fn object_name(&self) -> &str {
		&self.object_name
	}

	pub fn object(&self) -> &'a dyn FormObject {
		self.object
	}

	pub fn options(&self) -> &BuilderOptions {
		&self.options
	}

	pub fn is_readonly(&self) -> bool {
		self.readonly
	}

	/// Submitted parameter name, `object[method]`
	pub fn field_name(&self, method: &str) -> String {
		format!("{}[{}]", self.object_name, method)
	}

	/// Element id, `object_method`, prefixed with the namespace if any
	pub fn field_id(&self, method: &str) -> String {
		let id = sanitized_id(&self.field_name(method));
		match &self.options.namespace {
			Some(namespace) => format!("{}_{}", namespace, id),
			None => id,
		}
	}

	// Values the editable widget is rendered with. A missing attribute is not
	// an error here; the widget renders empty.
	fn current_values(&self, method: &str) -> Vec<String> {
		match self.object.read_attribute(method) {
			None | Some(Value::Null) => Vec::new(),
			Some(Value::Array(items)) => items.iter().filter_map(input_text).collect(),
			Some(other) => input_text(&other).into_iter().collect(),
		}
	}

	fn widget_attrs(&self, method: &str, options: &FieldOptions) -> HtmlAttrs {
		merge(
			HtmlAttrs::new().attr("id", self.field_id(method)),
			&options.html_attrs(),
		)
	}

	/// Display fragment for one field, as rendered in read-only mode
	pub(crate) fn display(
		&self,
		kind: FieldKind,
		method: &str,
		options: &FieldOptions,
	) -> FormResult<SafeString> {
		Substitution {
			kind,
			object_name: &self.object_name,
			object: self.object,
			method,
			readonly_value: options.readonly_value.as_ref(),
			css_framework: self.css_framework,
		}
		.render()
	}

	// The single branch point between the two modes.
	fn decorate<F>(
		&self,
		kind: FieldKind,
		method: &str,
		options: &FieldOptions,
		editable: F,
	) -> FormResult<SafeString>
	where
		F: FnOnce() -> FormResult<SafeString>,
	{
		if self.readonly {
			self.display(kind, method, options)
		} else {
			editable()
		}
	}

	pub(crate) fn input(
		&self,
		kind: FieldKind,
		method: &str,
		options: &FieldOptions,
	) -> FormResult<SafeString> {
		self.decorate(kind, method, options, || {
			let input_type = kind.input_type().unwrap_or("text");
			// Passwords are never echoed back into the page.
			let values = if kind == FieldKind::PasswordField {
				Vec::new()
			} else {
				self.current_values(method)
			};
			Ok(Input::new(input_type).render(
				&self.field_name(method),
				&values,
				&self.widget_attrs(method, options),
			))
		})
	}

	input_helpers! {
		text_field => TextField,
		password_field => PasswordField,
		email_field => EmailField,
		number_field => NumberField,
		range_field => RangeField,
		search_field => SearchField,
		telephone_field => TelephoneField,
		phone_field => TelephoneField,
		url_field => UrlField,
		color_field => ColorField,
		date_field => DateField,
		time_field => TimeField,
		datetime_field => DatetimeField,
		datetime_local_field => DatetimeField,
		month_field => MonthField,
		week_field => WeekField,
	}

	/// Checkbox preceded by a hidden input carrying `unchecked_value`
	///
	/// `None` for `unchecked_value` leaves the hidden input out.
	pub fn check_box(
		&self,
		method: &str,
		options: &FieldOptions,
		checked_value: &str,
		unchecked_value: Option<&str>,
	) -> FormResult<SafeString> {
		self.decorate(FieldKind::CheckBox, method, options, || {
			Ok(
				CheckboxInput::new(checked_value, unchecked_value.map(str::to_string)).render(
					&self.field_name(method),
					&self.current_values(method),
					&self.widget_attrs(method, options),
				),
			)
		})
	}

	/// Multiline text; rendered as paragraphs when read-only
	pub fn text_area(&self, method: &str, options: &FieldOptions) -> FormResult<SafeString> {
		self.decorate(FieldKind::TextArea, method, options, || {
			Ok(Textarea.render(
				&self.field_name(method),
				&self.current_values(method),
				&self.widget_attrs(method, options),
			))
		})
	}

	fn select_widget(options: &FieldOptions, html_options: &FieldOptions) -> Select {
		Select::new()
			.multiple(html_options.html.get("multiple") == Some(&Value::Bool(true)))
			.include_blank(options.include_blank)
			.prompt(options.prompt.clone())
	}

	fn select_name(&self, method: &str, select: &FieldOptions) -> String {
		if select.html.get("multiple") == Some(&Value::Bool(true)) {
			format!("{}[]", self.field_name(method))
		} else {
			self.field_name(method)
		}
	}

	/// Dropdown over `choices`, given as `(value, label)` pairs
	///
	/// In read-only mode the choices are not consulted; the fragment shows
	/// the attribute's raw value.
	pub fn select(
		&self,
		method: &str,
		choices: &[Choice],
		options: &FieldOptions,
		html_options: &FieldOptions,
	) -> FormResult<SafeString> {
		self.decorate(FieldKind::Select, method, options, || {
			Ok(Self::select_widget(options, html_options).render_with_choices(
				&self.select_name(method, html_options),
				&self.current_values(method),
				&self.widget_attrs(method, html_options),
				choices,
			))
		})
	}

	/// Dropdown over every IANA time zone, `priority_zones` first
	pub fn time_zone_select(
		&self,
		method: &str,
		priority_zones: &[String],
		options: &FieldOptions,
		html_options: &FieldOptions,
	) -> FormResult<SafeString> {
		self.decorate(FieldKind::TimeZoneSelect, method, options, || {
			let priority: Vec<Choice> = priority_zones
				.iter()
				.map(|zone| (zone.clone(), zone.clone()))
				.collect();
			let zones: Vec<Choice> = chrono_tz::TZ_VARIANTS
				.iter()
				.map(|tz| tz.name())
				.filter(|name| !priority_zones.iter().any(|p| p == name))
				.map(|name| (name.to_string(), name.to_string()))
				.collect();

			Ok(Self::select_widget(options, html_options).render_prioritized(
				&self.field_name(method),
				&self.current_values(method),
				&self.widget_attrs(method, html_options),
				&priority,
				&zones,
			))
		})
	}

	/// Dropdown over the days of the week, Sunday first
	pub fn weekday_select(
		&self,
		method: &str,
		options: &FieldOptions,
		html_options: &FieldOptions,
	) -> FormResult<SafeString> {
		self.decorate(FieldKind::WeekdaySelect, method, options, || {
			let days: Vec<Choice> = WEEKDAYS
				.iter()
				.map(|day| (day.to_string(), day.to_string()))
				.collect();
			Ok(Self::select_widget(options, html_options).render_with_choices(
				&self.field_name(method),
				&self.current_values(method),
				&self.widget_attrs(method, html_options),
				&days,
			))
		})
	}

	fn collection_choices(
		collection: &[Value],
		value_method: &str,
		text_method: &str,
	) -> FormResult<Vec<Choice>> {
		collection
			.iter()
			.map(|item| -> FormResult<Choice> {
				let value = item
					.read_attribute(value_method)
					.ok_or_else(|| FormError::attribute_not_found("collection item", value_method))?;
				let text = item
					.read_attribute(text_method)
					.ok_or_else(|| FormError::attribute_not_found("collection item", text_method))?;
				Ok((display_text(&value), display_text(&text)))
			})
			.collect()
	}

	/// Dropdown whose options are read from `collection`
	pub fn collection_select(
		&self,
		method: &str,
		collection: &[Value],
		value_method: &str,
		text_method: &str,
		options: &FieldOptions,
		html_options: &FieldOptions,
	) -> FormResult<SafeString> {
		self.decorate(FieldKind::CollectionSelect, method, options, || {
			let choices = Self::collection_choices(collection, value_method, text_method)?;
			Ok(Self::select_widget(options, html_options).render_with_choices(
				&self.select_name(method, html_options),
				&self.current_values(method),
				&self.widget_attrs(method, html_options),
				&choices,
			))
		})
	}

	/// One labelled checkbox per item of `collection`
	pub fn collection_check_boxes(
		&self,
		method: &str,
		collection: &[Value],
		value_method: &str,
		text_method: &str,
		options: &FieldOptions,
		html_options: &FieldOptions,
	) -> FormResult<SafeString> {
		self.decorate(FieldKind::CollectionCheckBoxes, method, options, || {
			let choices = Self::collection_choices(collection, value_method, text_method)?;
			Ok(CheckboxSelectMultiple.render_with_choices(
				&format!("{}[]", self.field_name(method)),
				&self.current_values(method),
				&self.widget_attrs(method, html_options),
				&choices,
			))
		})
	}

	/// One labelled radio button per item of `collection`
	pub fn collection_radio_buttons(
		&self,
		method: &str,
		collection: &[Value],
		value_method: &str,
		text_method: &str,
		options: &FieldOptions,
		html_options: &FieldOptions,
	) -> FormResult<SafeString> {
		self.decorate(FieldKind::CollectionRadioButtons, method, options, || {
			let choices = Self::collection_choices(collection, value_method, text_method)?;
			Ok(RadioSelect.render_with_choices(
				&self.field_name(method),
				&self.current_values(method),
				&self.widget_attrs(method, html_options),
				&choices,
			))
		})
	}

	/// Dropdown with one `<optgroup>` per item of `collection`
	///
	/// Each group's label is read with `group_label_method` and its members
	/// with `group_method`; members supply option values and labels through
	/// `option_key_method` and `option_value_method`.
	#[allow(clippy::too_many_arguments)]
	pub fn grouped_collection_select(
		&self,
		method: &str,
		collection: &[Value],
		group_method: &str,
		group_label_method: &str,
		option_key_method: &str,
		option_value_method: &str,
		options: &FieldOptions,
		html_options: &FieldOptions,
	) -> FormResult<SafeString> {
		self.decorate(FieldKind::GroupedCollectionSelect, method, options, || {
			let groups = collection
				.iter()
				.map(|group| -> FormResult<ChoiceGroup> {
					let label = group
						.read_attribute(group_label_method)
						.ok_or_else(|| FormError::attribute_not_found("group", group_label_method))?;
					let members = match group.read_attribute(group_method) {
						Some(Value::Array(members)) => members,
						Some(_) => {
							return Err(FormError::shape(
								FieldKind::GroupedCollectionSelect.name(),
								format!("non-array `{group_method}`"),
								"array of group members",
							));
						}
						None => return Err(FormError::attribute_not_found("group", group_method)),
					};
					let choices =
						Self::collection_choices(&members, option_key_method, option_value_method)?;
					Ok((display_text(&label), choices))
				})
				.collect::<FormResult<Vec<ChoiceGroup>>>()?;

			Ok(Self::select_widget(options, html_options).render_grouped(
				&self.select_name(method, html_options),
				&self.current_values(method),
				&self.widget_attrs(method, html_options),
				&groups,
			))
		})
	}

	/// A single radio button, checked when the attribute equals `tag_value`
	pub fn radio_button(
		&self,
		method: &str,
		tag_value: &str,
		options: &FieldOptions,
	) -> FormResult<SafeString> {
		self.decorate(FieldKind::RadioButton, method, options, || {
			let mut attrs = self.widget_attrs(method, options);
			if options.html.get("id").is_none() {
				attrs.set(
					"id",
					format!("{}_{}", self.field_id(method), sanitized_id(tag_value)),
				);
			}
			Ok(RadioButton::new(tag_value).render(
				&self.field_name(method),
				&self.current_values(method),
				&attrs,
			))
		})
	}

	/// File upload; read-only mode shows only an explicit `readonly_value`
	pub fn file_field(&self, method: &str, options: &FieldOptions) -> FormResult<SafeString> {
		self.decorate(FieldKind::FileField, method, options, || {
			Ok(FileInput.render(
				&self.field_name(method),
				&[],
				&self.widget_attrs(method, options),
			))
		})
	}

	/// Hidden input; omitted entirely in read-only mode
	pub fn hidden_field(&self, method: &str, options: &FieldOptions) -> FormResult<SafeString> {
		self.decorate(FieldKind::HiddenField, method, options, || {
			Ok(HiddenInput.render(
				&self.field_name(method),
				&self.current_values(method),
				&self.widget_attrs(method, options),
			))
		})
	}

	/// `<label>` for a field, identical in both modes
	///
	/// Without `text` the method name is humanized (`author_id` becomes
	/// `Author`).
	pub fn label(&self, method: &str, text: Option<&str>, options: &FieldOptions) -> SafeString {
		let text = text.map_or_else(|| humanize(method), str::to_string);
		let attrs = merge(
			HtmlAttrs::new().attr("for", self.field_id(method)),
			&options.html_attrs(),
		);
		content_tag("label", &text, &attrs)
	}

	/// Render a nested form for an associated record
	///
	/// The child is bound to `record_object`, or when absent to this form's
	/// `record_name` attribute. Its object name is `object[record_name]`.
	/// `readonly`, `css_framework` and `namespace` are inherited from this
	/// builder unless `options` sets them. An explicit `readonly: Some(false)`
	/// therefore keeps the child editable under a read-only parent; the
	/// parent's flag only fills in an absent value and is never OR-ed in.
	///
	/// ```
	/// use serde_json::json;
	/// use vellum_forms::{BuilderOptions, FieldOptions, FormBuilder};
	///
	/// let post = json!({"author": {"name": "Ada"}});
	/// let form = FormBuilder::new("post", &post, BuilderOptions::new().readonly(true));
	///
	/// let html = form
	///     .fields_for("author", None, BuilderOptions::new(), |author| {
	///         author.text_field("name", &FieldOptions::new())
	///     })
	///     .unwrap();
	/// assert_eq!(html.as_str(), r#"<p class="form-control-plaintext">Ada</p>"#);
	/// ```
	pub fn fields_for<F>(
		&self,
		record_name: &str,
		record_object: Option<&dyn FormObject>,
		options: BuilderOptions,
		body: F,
	) -> FormResult<SafeString>
	where
		F: FnOnce(&FormBuilder<'_>) -> FormResult<SafeString>,
	{
		let fetched;
		let child_object: &dyn FormObject = match record_object {
			Some(object) => object,
			None => {
				fetched = self
					.object
					.read_attribute(record_name)
					.ok_or_else(|| FormError::attribute_not_found(&self.object_name, record_name))?;
				&fetched
			}
		};

		if options.readonly.is_none() {
			tracing::debug!(
				parent = %self.object_name,
				record = record_name,
				readonly = self.readonly,
				"nested form inherits readonly flag"
			);
		}
		let child_options = BuilderOptions {
			readonly: Some(options.readonly.unwrap_or(self.readonly)),
			css_framework: Some(options.css_framework.unwrap_or(self.css_framework)),
			namespace: options.namespace.or_else(|| self.options.namespace.clone()),
		};

		let child = FormBuilder::new(
			format!("{}[{}]", self.object_name, record_name),
			child_object,
			child_options,
		);
		body(&child)
	}
}

fn humanize(method: &str) -> String {
	let base = method.strip_suffix("_id").unwrap_or(method);
	let spaced = base.replace('_', " ");
	let mut chars = spaced.trim().chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use serde_json::json;

	#[fixture]
	fn post() -> Value {
		json!({
			"title": "Hello",
			"body": "First\nline",
			"published": true,
			"colour": "red",
			"category_id": 2,
			"tag_ids": [1, 3],
			"zone": "UTC",
			"day": "Monday",
		})
	}

	#[rstest]
	fn test_field_name_and_id() {
		let object = json!({});
		let form = FormBuilder::new("post", &object, BuilderOptions::new());
		assert_eq!(form.field_name("title"), "post[title]");
		assert_eq!(form.field_id("title"), "post_title");
	}

	#[rstest]
	fn test_namespace_prefixes_id() {
		let object = json!({});
		let form = FormBuilder::new("post", &object, BuilderOptions::new().namespace("edit"));
		assert_eq!(form.field_id("title"), "edit_post_title");
	}

	#[rstest]
	fn test_readonly_defaults_off() {
		let object = json!({});
		assert!(!FormBuilder::new("post", &object, BuilderOptions::new()).is_readonly());
	}

	#[rstest]
	fn test_password_is_not_echoed(post: Value) {
		let form = FormBuilder::new("post", &post, BuilderOptions::new());
		assert_eq!(
			form.password_field("title", &FieldOptions::new()).unwrap().as_str(),
			r#"<input type="password" name="post[title]" id="post_title" />"#
		);
	}

	#[rstest]
	fn test_editable_missing_attribute_renders_empty(post: Value) {
		let form = FormBuilder::new("post", &post, BuilderOptions::new());
		assert_eq!(
			form.email_field("email", &FieldOptions::new()).unwrap().as_str(),
			r#"<input type="email" name="post[email]" id="post_email" />"#
		);
	}

	#[rstest]
	fn test_check_box_editable(post: Value) {
		let form = FormBuilder::new("post", &post, BuilderOptions::new());
		assert_eq!(
			form.check_box("published", &FieldOptions::new(), "1", Some("0"))
				.unwrap()
				.as_str(),
			concat!(
				r#"<input name="post[published]" type="hidden" value="0" autocomplete="off" />"#,
				r#"<input type="checkbox" name="post[published]" value="1" checked id="post_published" />"#,
			)
		);
	}

	#[rstest]
	fn test_check_box_readonly_shows_value(post: Value) {
		let form = FormBuilder::new("post", &post, BuilderOptions::new().readonly(true));
		assert_eq!(
			form.check_box("published", &FieldOptions::new(), "1", Some("0"))
				.unwrap()
				.as_str(),
			r#"<p class="form-control-plaintext">true</p>"#
		);
	}

	#[rstest]
	fn test_select_editable(post: Value) {
		let form = FormBuilder::new("post", &post, BuilderOptions::new());
		let choices = vec![
			("red".to_string(), "Red".to_string()),
			("blue".to_string(), "Blue".to_string()),
		];
		assert_eq!(
			form.select(
				"colour",
				&choices,
				&FieldOptions::new().include_blank(true),
				&FieldOptions::new()
			)
			.unwrap()
			.as_str(),
			concat!(
				r#"<select name="post[colour]" id="post_colour">"#,
				r#"<option value="" label=" "></option>"#,
				r#"<option value="red" selected>Red</option>"#,
				r#"<option value="blue">Blue</option></select>"#,
			)
		);
	}

	#[rstest]
	fn test_select_readonly_ignores_choices(post: Value) {
		let form = FormBuilder::new("post", &post, BuilderOptions::new().readonly(true));
		assert_eq!(
			form.select("colour", &[], &FieldOptions::new(), &FieldOptions::new())
				.unwrap()
				.as_str(),
			r#"<p class="form-control-plaintext">red</p>"#
		);
	}

	#[rstest]
	fn test_time_zone_select_lists_priority_first(post: Value) {
		let form = FormBuilder::new("post", &post, BuilderOptions::new());
		let html = form
			.time_zone_select(
				"zone",
				&["UTC".to_string()],
				&FieldOptions::new(),
				&FieldOptions::new(),
			)
			.unwrap();
		let html = html.as_str();
		assert!(html.starts_with(
			r#"<select name="post[zone]" id="post_zone"><option value="UTC" selected>UTC</option><option value="" disabled>"#
		));
		assert!(html.contains(r#"<option value="Europe/London">Europe/London</option>"#));
		assert_eq!(html.matches(r#"value="UTC""#).count(), 1);
	}

	#[rstest]
	fn test_weekday_select(post: Value) {
		let form = FormBuilder::new("post", &post, BuilderOptions::new());
		let html = form
			.weekday_select("day", &FieldOptions::new(), &FieldOptions::new())
			.unwrap();
		assert!(html.as_str().contains(r#"<option value="Monday" selected>Monday</option>"#));
		assert_eq!(html.as_str().matches("<option").count(), 7);
	}

	#[rstest]
	fn test_collection_select_editable(post: Value) {
		let form = FormBuilder::new("post", &post, BuilderOptions::new());
		let categories = vec![json!({"id": 1, "name": "News"}), json!({"id": 2, "name": "Tech"})];
		assert_eq!(
			form.collection_select(
				"category_id",
				&categories,
				"id",
				"name",
				&FieldOptions::new(),
				&FieldOptions::new()
			)
			.unwrap()
			.as_str(),
			concat!(
				r#"<select name="post[category_id]" id="post_category_id">"#,
				r#"<option value="1">News</option>"#,
				r#"<option value="2" selected>Tech</option></select>"#,
			)
		);
	}

	#[rstest]
	fn test_collection_item_without_value_method(post: Value) {
		let form = FormBuilder::new("post", &post, BuilderOptions::new());
		let err = form
			.collection_select(
				"category_id",
				&[json!({"name": "News"})],
				"id",
				"name",
				&FieldOptions::new(),
				&FieldOptions::new(),
			)
			.unwrap_err();
		assert!(matches!(err, FormError::AttributeNotFound { .. }));
	}

	#[rstest]
	fn test_collection_check_boxes_marks_members(post: Value) {
		let form = FormBuilder::new("post", &post, BuilderOptions::new());
		let tags = vec![
			json!({"id": 1, "name": "rust"}),
			json!({"id": 2, "name": "web"}),
			json!({"id": 3, "name": "forms"}),
		];
		let html = form
			.collection_check_boxes(
				"tag_ids",
				&tags,
				"id",
				"name",
				&FieldOptions::new(),
				&FieldOptions::new(),
			)
			.unwrap();
		let html = html.as_str();
		assert!(html.contains(r#"name="post[tag_ids][]""#));
		assert!(html.contains(r#"id="post_tag_ids_3""#));
		assert_eq!(html.matches(" checked").count(), 2);
	}

	#[rstest]
	fn test_collection_readonly_shows_joined_values(post: Value) {
		let form = FormBuilder::new("post", &post, BuilderOptions::new().readonly(true));
		assert_eq!(
			form.collection_check_boxes(
				"tag_ids",
				&[],
				"id",
				"name",
				&FieldOptions::new(),
				&FieldOptions::new()
			)
			.unwrap()
			.as_str(),
			r#"<p class="form-control-plaintext">1, 3</p>"#
		);
	}

	#[rstest]
	fn test_grouped_collection_select(post: Value) {
		let form = FormBuilder::new("post", &post, BuilderOptions::new());
		let continents = vec![json!({
			"name": "Europe",
			"countries": [{"code": "red", "label": "Redland"}],
		})];
		assert_eq!(
			form.grouped_collection_select(
				"colour",
				&continents,
				"countries",
				"name",
				"code",
				"label",
				&FieldOptions::new(),
				&FieldOptions::new(),
			)
			.unwrap()
			.as_str(),
			concat!(
				r#"<select name="post[colour]" id="post_colour"><optgroup label="Europe">"#,
				r#"<option value="red" selected>Redland</option></optgroup></select>"#,
			)
		);
	}

	#[rstest]
	#[case("red", true)]
	#[case("blue", false)]
	fn test_radio_button_editable(post: Value, #[case] tag_value: &str, #[case] checked: bool) {
		let form = FormBuilder::new("post", &post, BuilderOptions::new());
		let html = form
			.radio_button("colour", tag_value, &FieldOptions::new())
			.unwrap();
		assert!(html.as_str().contains(&format!(r#"id="post_colour_{tag_value}""#)));
		assert_eq!(html.as_str().contains(" checked"), checked);
	}

	#[rstest]
	fn test_label_humanizes_method(post: Value) {
		let form = FormBuilder::new("post", &post, BuilderOptions::new().readonly(true));
		assert_eq!(
			form.label("category_id", None, &FieldOptions::new()).as_str(),
			r#"<label for="post_category_id">Category</label>"#
		);
		assert_eq!(
			form.label("title", Some("Heading"), &FieldOptions::new()).as_str(),
			r#"<label for="post_title">Heading</label>"#
		);
	}

	#[rstest]
	#[case("first_name", "First name")]
	#[case("URL", "Url")]
	#[case("", "")]
	fn test_humanize(#[case] method: &str, #[case] expected: &str) {
		assert_eq!(humanize(method), expected);
	}

	#[rstest]
	fn test_fields_for_child_names() {
		let post = json!({"author": {"name": "Ada"}});
		let form = FormBuilder::new("post", &post, BuilderOptions::new());
		let html = form
			.fields_for("author", None, BuilderOptions::new(), |author| {
				assert_eq!(author.object_name(), "post[author]");
				author.text_field("name", &FieldOptions::new())
			})
			.unwrap();
		assert_eq!(
			html.as_str(),
			r#"<input type="text" name="post[author][name]" value="Ada" id="post_author_name" />"#
		);
	}

	#[rstest]
	fn test_fields_for_missing_record() {
		let post = json!({});
		let form = FormBuilder::new("post", &post, BuilderOptions::new());
		let err = form
			.fields_for("author", None, BuilderOptions::new(), |author| {
				author.text_field("name", &FieldOptions::new())
			})
			.unwrap_err();
		assert!(matches!(
			err,
			FormError::AttributeNotFound { ref attribute, .. } if attribute == "author"
		));
	}

	#[rstest]
	fn test_fields_for_inherits_framework_and_namespace() {
		let post = json!({"author": {"name": "Ada"}});
		let form = FormBuilder::new(
			"post",
			&post,
			BuilderOptions::new()
				.readonly(true)
				.css_framework(CssFramework::Tailwind)
				.namespace("edit"),
		);
		form.fields_for("author", None, BuilderOptions::new(), |author| {
			assert_eq!(author.options().namespace.as_deref(), Some("edit"));
			assert_eq!(author.options().css_framework, Some(CssFramework::Tailwind));
			let html = author.text_field("name", &FieldOptions::new())?;
			assert_eq!(html.as_str(), r#"<p class="py-2">Ada</p>"#);
			Ok(html)
		})
		.unwrap();
	}
}
