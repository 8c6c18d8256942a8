//! Editable widgets
//!
//! These render the normal, editable markup for each field kind. The form
//! builder delegates to them whenever it is not in read-only mode. Names and
//! ids are computed by the builder; widgets only write markup.

use vellum_template::{HtmlAttrs, SafeString, content_tag, content_tag_safe, tag};

/// An option value paired with its label
pub type Choice = (String, String);

/// A labelled group of choices, rendered as `<optgroup>`
pub type ChoiceGroup = (String, Vec<Choice>);

/// Base widget trait
pub trait Widget {
	/// Render the widget with its current values
	///
	/// Single-valued widgets look at the first value only.
	fn render(&self, name: &str, values: &[String], attrs: &HtmlAttrs) -> SafeString;

	/// Render the widget with choices (for select-like widgets)
	fn render_with_choices(
		&self,
		name: &str,
		values: &[String],
		attrs: &HtmlAttrs,
		_choices: &[Choice],
	) -> SafeString {
		self.render(name, values, attrs)
	}
}

/// `<input>` with a configurable type
#[derive(Debug, Clone)]
pub struct Input {
	input_type: &'static str,
}

impl Input {
	pub fn new(input_type: &'static str) -> Self {
		Self { input_type }
	}
}

impl Widget for Input {
	fn render(&self, name: &str, values: &[String], attrs: &HtmlAttrs) -> SafeString {
		let base = HtmlAttrs::new()
			.attr("type", self.input_type)
			.attr("name", name)
			.attr_opt("value", values.first().cloned());
		tag("input", &merge(base, attrs))
	}
}

/// Multiline text
#[derive(Debug, Clone, Default)]
pub struct Textarea;

impl Widget for Textarea {
	fn render(&self, name: &str, values: &[String], attrs: &HtmlAttrs) -> SafeString {
		let base = HtmlAttrs::new().attr("name", name);
		// A leading newline keeps browsers from eating one that belongs to the value.
		let text = format!("\n{}", values.first().map(String::as_str).unwrap_or(""));
		content_tag("textarea", &text, &merge(base, attrs))
	}
}

/// Checkbox preceded by a hidden input carrying the unchecked value
#[derive(Debug, Clone)]
pub struct CheckboxInput {
	checked_value: String,
	unchecked_value: Option<String>,
}

impl CheckboxInput {
	pub fn new(checked_value: impl Into<String>, unchecked_value: Option<String>) -> Self {
		Self {
			checked_value: checked_value.into(),
			unchecked_value,
		}
	}

	fn is_checked(&self, value: Option<&String>) -> bool {
		match value.map(String::as_str) {
			Some(v) if v == self.checked_value => true,
			Some("true") | Some("on") => true,
			_ => false,
		}
	}
}

impl Default for CheckboxInput {
	fn default() -> Self {
		Self::new("1", Some("0".to_string()))
	}
}

impl Widget for CheckboxInput {
	fn render(&self, name: &str, values: &[String], attrs: &HtmlAttrs) -> SafeString {
		let mut out = SafeString::empty();
		if let Some(unchecked) = &self.unchecked_value {
			out.push(&tag(
				"input",
				&HtmlAttrs::new()
					.attr("name", name)
					.attr("type", "hidden")
					.attr("value", unchecked.as_str())
					.attr("autocomplete", "off"),
			));
		}
		let mut base = HtmlAttrs::new()
			.attr("type", "checkbox")
			.attr("name", name)
			.attr("value", self.checked_value.as_str());
		if self.is_checked(values.first()) {
			base = base.flag("checked");
		}
		out.push(&tag("input", &merge(base, attrs)));
		out
	}
}

/// A single radio button for one tag value
#[derive(Debug, Clone)]
pub struct RadioButton {
	tag_value: String,
}

impl RadioButton {
	pub fn new(tag_value: impl Into<String>) -> Self {
		Self {
			tag_value: tag_value.into(),
		}
	}
}

impl Widget for RadioButton {
	fn render(&self, name: &str, values: &[String], attrs: &HtmlAttrs) -> SafeString {
		let mut base = HtmlAttrs::new()
			.attr("type", "radio")
			.attr("name", name)
			.attr("value", self.tag_value.as_str());
		if values.first() == Some(&self.tag_value) {
			base = base.flag("checked");
		}
		tag("input", &merge(base, attrs))
	}
}

/// Select dropdown
#[derive(Debug, Clone, Default)]
pub struct Select {
	multiple: bool,
	include_blank: bool,
	prompt: Option<String>,
}

impl Select {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn multiple(mut self, multiple: bool) -> Self {
		self.multiple = multiple;
		self
	}

	pub fn include_blank(mut self, include_blank: bool) -> Self {
		self.include_blank = include_blank;
		self
	}

	pub fn prompt(mut self, prompt: Option<String>) -> Self {
		self.prompt = prompt;
		self
	}

	fn open(&self, name: &str, attrs: &HtmlAttrs) -> HtmlAttrs {
		let mut base = HtmlAttrs::new().attr("name", name);
		if self.multiple {
			base = base.flag("multiple");
		}
		merge(base, attrs)
	}

	fn leading_options(&self) -> SafeString {
		let mut out = SafeString::empty();
		if let Some(prompt) = &self.prompt {
			out.push(&content_tag(
				"option",
				prompt,
				&HtmlAttrs::new().attr("value", ""),
			));
		} else if self.include_blank {
			out.push(&SafeString::new(r#"<option value="" label=" "></option>"#));
		}
		out
	}

	/// Render `<optgroup>`s, one per group
	pub fn render_grouped(
		&self,
		name: &str,
		values: &[String],
		attrs: &HtmlAttrs,
		groups: &[ChoiceGroup],
	) -> SafeString {
		let mut inner = self.leading_options();
		for (label, choices) in groups {
			let options = options_for(choices, values);
			inner.push(&content_tag_safe(
				"optgroup",
				&options,
				&HtmlAttrs::new().attr("label", label.as_str()),
			));
		}
		content_tag_safe("select", &inner, &self.open(name, attrs))
	}

	/// Render `priority` choices first, then a disabled separator, then the rest
	pub fn render_prioritized(
		&self,
		name: &str,
		values: &[String],
		attrs: &HtmlAttrs,
		priority: &[Choice],
		choices: &[Choice],
	) -> SafeString {
		let mut inner = self.leading_options();
		if !priority.is_empty() {
			inner.push(&options_for(priority, values));
			inner.push(&content_tag(
				"option",
				"-------------",
				&HtmlAttrs::new().attr("value", "").flag("disabled"),
			));
		}
		inner.push(&options_for(choices, values));
		content_tag_safe("select", &inner, &self.open(name, attrs))
	}
}

impl Widget for Select {
	fn render(&self, name: &str, values: &[String], attrs: &HtmlAttrs) -> SafeString {
		self.render_with_choices(name, values, attrs, &[])
	}

	fn render_with_choices(
		&self,
		name: &str,
		values: &[String],
		attrs: &HtmlAttrs,
		choices: &[Choice],
	) -> SafeString {
		let mut inner = self.leading_options();
		inner.push(&options_for(choices, values));
		content_tag_safe("select", &inner, &self.open(name, attrs))
	}
}

/// `<option>` tags, marking each current value as selected
pub fn options_for(choices: &[Choice], values: &[String]) -> SafeString {
	let mut out = SafeString::empty();
	for (choice_value, choice_label) in choices {
		let mut attrs = HtmlAttrs::new().attr("value", choice_value.as_str());
		if values.contains(choice_value) {
			attrs = attrs.flag("selected");
		}
		out.push(&content_tag("option", choice_label, &attrs));
	}
	out
}

/// A group of radio buttons, each followed by its label
#[derive(Debug, Clone, Default)]
pub struct RadioSelect;

impl Widget for RadioSelect {
	fn render(&self, name: &str, values: &[String], attrs: &HtmlAttrs) -> SafeString {
		self.render_with_choices(name, values, attrs, &[])
	}

	fn render_with_choices(
		&self,
		name: &str,
		values: &[String],
		attrs: &HtmlAttrs,
		choices: &[Choice],
	) -> SafeString {
		choice_group("radio", name, values, attrs, choices)
	}
}

/// A group of checkboxes for multiple selection
#[derive(Debug, Clone, Default)]
pub struct CheckboxSelectMultiple;

impl Widget for CheckboxSelectMultiple {
	fn render(&self, name: &str, values: &[String], attrs: &HtmlAttrs) -> SafeString {
		self.render_with_choices(name, values, attrs, &[])
	}

	fn render_with_choices(
		&self,
		name: &str,
		values: &[String],
		attrs: &HtmlAttrs,
		choices: &[Choice],
	) -> SafeString {
		// The hidden blank lets an empty selection be submitted.
		let mut out = tag(
			"input",
			&HtmlAttrs::new()
				.attr("name", name)
				.attr("type", "hidden")
				.attr("value", "")
				.attr("autocomplete", "off"),
		);
		out.push(&choice_group("checkbox", name, values, attrs, choices));
		out
	}
}

fn choice_group(
	input_type: &str,
	name: &str,
	values: &[String],
	attrs: &HtmlAttrs,
	choices: &[Choice],
) -> SafeString {
	let id_base = attrs
		.get("id")
		.map(str::to_string)
		.unwrap_or_else(|| sanitized_id(name));
	let mut out = SafeString::empty();

	for (choice_value, choice_label) in choices {
		let input_id = format!("{}_{}", id_base, sanitized_id(choice_value));
		let mut base = HtmlAttrs::new()
			.attr("type", input_type)
			.attr("name", name)
			.attr("value", choice_value.as_str());
		if values.contains(choice_value) {
			base = base.flag("checked");
		}
		let mut input_attrs = merge(base, attrs);
		input_attrs.set("id", input_id.as_str());

		out.push(&tag("input", &input_attrs));
		out.push(&content_tag(
			"label",
			choice_label,
			&HtmlAttrs::new().attr("for", input_id),
		));
	}
	out
}

/// File upload; never carries a value
#[derive(Debug, Clone, Default)]
pub struct FileInput;

impl Widget for FileInput {
	fn render(&self, name: &str, _values: &[String], attrs: &HtmlAttrs) -> SafeString {
		let base = HtmlAttrs::new().attr("type", "file").attr("name", name);
		tag("input", &merge(base, attrs))
	}
}

#[derive(Debug, Clone, Default)]
pub struct HiddenInput;

impl Widget for HiddenInput {
	fn render(&self, name: &str, values: &[String], attrs: &HtmlAttrs) -> SafeString {
		let base = HtmlAttrs::new()
			.attr("type", "hidden")
			.attr("name", name)
			.attr_opt("value", values.first().cloned())
			.attr("autocomplete", "off");
		tag("input", &merge(base, attrs))
	}
}

// Caller attributes win over the widget's own, except that classes merge.
pub(crate) fn merge(mut base: HtmlAttrs, extra: &HtmlAttrs) -> HtmlAttrs {
	for (key, value) in extra.iter() {
		base = match (key, value) {
			("class", Some(class)) => base.class(class),
			(key, Some(value)) => base.attr(key, value),
			(key, None) => base.flag(key),
		};
	}
	base
}

/// Turn a field name such as `post[tag_ids][]` into an id (`post_tag_ids`)
///
/// # Examples
///
/// ```
/// use vellum_forms::widgets::sanitized_id;
///
/// assert_eq!(sanitized_id("post[title]"), "post_title");
/// assert_eq!(sanitized_id("post[author][name]"), "post_author_name");
/// assert_eq!(sanitized_id("post[tag_ids][]"), "post_tag_ids");
/// assert_eq!(sanitized_id("New York"), "New_York");
/// ```
pub fn sanitized_id(name: &str) -> String {
	let mut out = String::with_capacity(name.len());
	for ch in name.chars() {
		match ch {
			']' => {}
			'[' => out.push('_'),
			c if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ':' | '.') => out.push(c),
			_ => out.push('_'),
		}
	}
	out.trim_end_matches('_').to_string()
}
