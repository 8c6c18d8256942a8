//! Read-only form builder integration tests
//!
//! Each field helper is exercised in both modes against a bound post record.

use rstest::{fixture, rstest};
use serde::Serialize;
use serde_json::{Value, json};
use vellum_forms::widgets::{HiddenInput, Input, Widget};
use vellum_forms::{
	BuilderOptions, CssFramework, FieldKind, FieldOptions, FormBuilder, FormError, FormObject,
	to_form_object,
};
use vellum_template::HtmlAttrs;

#[fixture]
fn post() -> Value {
	json!({
		"title": "Fish & chips",
		"body": "Line one\nLine two\n\nSecond paragraph",
		"published_on": "2024-05-01",
		"category": "food",
		"tag_ids": ["fried", "salty"],
		"attachment": "menu.pdf",
		"token": "abc123",
		"author": {"name": "Ada", "email": "ada@example.com"},
	})
}

fn readonly() -> BuilderOptions {
	BuilderOptions::new().readonly(true)
}

fn plaintext(text: &str) -> String {
	format!(r#"<p class="form-control-plaintext">{text}</p>"#)
}

#[rstest]
fn test_editable_text_field_is_the_input_widget(post: Value) {
	let form = FormBuilder::new("post", &post, BuilderOptions::new());
	let expected = Input::new("text").render(
		"post[title]",
		&["Fish & chips".to_string()],
		&HtmlAttrs::new().attr("id", "post_title"),
	);
	assert_eq!(form.text_field("title", &FieldOptions::new()).unwrap(), expected);
}

#[rstest]
fn test_readonly_false_is_the_default(post: Value) {
	let explicit = FormBuilder::new("post", &post, BuilderOptions::new().readonly(false));
	let absent = FormBuilder::new("post", &post, BuilderOptions::new());
	assert_eq!(
		explicit.date_field("published_on", &FieldOptions::new()).unwrap(),
		absent.date_field("published_on", &FieldOptions::new()).unwrap()
	);
}

#[rstest]
#[case(FieldKind::TextField, "title", "Fish &amp; chips")]
#[case(FieldKind::DateField, "published_on", "2024-05-01")]
#[case(FieldKind::Select, "category", "food")]
#[case(FieldKind::CollectionCheckBoxes, "tag_ids", "fried, salty")]
#[case(FieldKind::RadioButton, "category", "food")]
fn test_readonly_shows_current_value(
	post: Value,
	#[case] kind: FieldKind,
	#[case] method: &str,
	#[case] shown: &str,
) {
	let form = FormBuilder::new("post", &post, readonly());
	let mut args = vec![json!(method)];
	args.resize(*kind.descriptor().signature.arity().start(), Value::Null);

	let html = form.render_helper(kind.name(), &args).unwrap();
	assert_eq!(html.as_str(), plaintext(shown));
}

#[rstest]
fn test_readonly_text_area_formats_paragraphs(post: Value) {
	let form = FormBuilder::new("post", &post, readonly());
	assert_eq!(
		form.text_area("body", &FieldOptions::new()).unwrap().as_str(),
		concat!(
			"<p class=\"form-control-plaintext\">Line one\n<br />Line two</p>",
			"\n\n",
			"<p class=\"form-control-plaintext\">Second paragraph</p>",
		)
	);
}

#[rstest]
fn test_readonly_value_overrides_attribute(post: Value) {
	let form = FormBuilder::new("post", &post, readonly());
	let options = FieldOptions::new().readonly_value("Redacted");
	assert_eq!(
		form.text_field("title", &options).unwrap().as_str(),
		plaintext("Redacted")
	);
	assert_eq!(
		form.collection_select("category", &[], "id", "name", &options, &FieldOptions::new())
			.unwrap()
			.as_str(),
		plaintext("Redacted")
	);
}

#[rstest]
fn test_readonly_value_spares_missing_attribute(post: Value) {
	let form = FormBuilder::new("post", &post, readonly());
	let html = form
		.number_field("rating", &FieldOptions::new().readonly_value(5))
		.unwrap();
	assert_eq!(html.as_str(), plaintext("5"));
}

#[rstest]
fn test_readonly_missing_attribute_fails(post: Value) {
	let form = FormBuilder::new("post", &post, readonly());
	let err = form.text_field("rating", &FieldOptions::new()).unwrap_err();
	assert_eq!(err.to_string(), "undefined attribute `rating` for `post`");
}

#[rstest]
fn test_readonly_file_field_defaults_to_empty(post: Value) {
	let form = FormBuilder::new("post", &post, readonly());
	assert_eq!(
		form.file_field("attachment", &FieldOptions::new()).unwrap().as_str(),
		plaintext("")
	);
	assert_eq!(
		form.file_field("attachment", &FieldOptions::new().readonly_value("menu.pdf"))
			.unwrap()
			.as_str(),
		plaintext("menu.pdf")
	);
}

#[rstest]
fn test_file_field_never_needs_the_attribute(post: Value) {
	let form = FormBuilder::new("post", &post, readonly());
	assert!(form.file_field("scan", &FieldOptions::new()).is_ok());
}

#[rstest]
fn test_hidden_field_in_both_modes(post: Value) {
	let form = FormBuilder::new("post", &post, readonly());
	assert!(form.hidden_field("token", &FieldOptions::new()).unwrap().is_empty());

	let form = FormBuilder::new("post", &post, BuilderOptions::new());
	let expected = HiddenInput.render(
		"post[token]",
		&["abc123".to_string()],
		&HtmlAttrs::new().attr("id", "post_token"),
	);
	assert_eq!(form.hidden_field("token", &FieldOptions::new()).unwrap(), expected);
}

#[rstest]
fn test_label_is_unaffected(post: Value) {
	let editable = FormBuilder::new("post", &post, BuilderOptions::new());
	let display = FormBuilder::new("post", &post, readonly());
	assert_eq!(
		editable.label("title", None, &FieldOptions::new()),
		display.label("title", None, &FieldOptions::new())
	);
}

#[rstest]
#[case(None, true)]
#[case(Some(false), false)]
#[case(Some(true), true)]
fn test_fields_for_readonly_inheritance(
	post: Value,
	#[case] child_readonly: Option<bool>,
	#[case] expect_readonly: bool,
) {
	let form = FormBuilder::new("post", &post, readonly());
	let child_options = BuilderOptions {
		readonly: child_readonly,
		..BuilderOptions::default()
	};

	let html = form
		.fields_for("author", None, child_options, |author| {
			assert_eq!(author.is_readonly(), expect_readonly);
			author.email_field("email", &FieldOptions::new())
		})
		.unwrap();

	if expect_readonly {
		assert_eq!(html.as_str(), plaintext("ada@example.com"));
	} else {
		assert!(html.as_str().starts_with(r#"<input type="email" name="post[author][email]""#));
	}
}

#[rstest]
fn test_fields_for_editable_parent_stays_editable(post: Value) {
	let form = FormBuilder::new("post", &post, BuilderOptions::new());
	form.fields_for("author", None, BuilderOptions::new(), |author| {
		assert!(!author.is_readonly());
		author.text_field("name", &FieldOptions::new())
	})
	.unwrap();
}

#[rstest]
fn test_fields_for_explicit_record(post: Value) {
	let editor = json!({"name": "Grace"});
	let form = FormBuilder::new("post", &post, readonly());
	let html = form
		.fields_for("editor", Some(&editor as &dyn FormObject), BuilderOptions::new(), |editor| {
			editor.text_field("name", &FieldOptions::new())
		})
		.unwrap();
	assert_eq!(html.as_str(), plaintext("Grace"));
}

#[rstest]
fn test_nested_forms_compose(post: Value) {
	let form = FormBuilder::new("post", &post, readonly());
	let html = form
		.fields_for("author", None, BuilderOptions::new(), |author| {
			let mut out = author.label("name", None, &FieldOptions::new());
			out.push(&author.text_field("name", &FieldOptions::new())?);
			Ok(out)
		})
		.unwrap();
	assert_eq!(
		html.as_str(),
		format!(
			r#"<label for="post_author_name">Name</label>{}"#,
			plaintext("Ada")
		)
	);
}

#[rstest]
fn test_css_framework_selects_display_class(post: Value) {
	let form = FormBuilder::new(
		"post",
		&post,
		readonly().css_framework(CssFramework::None),
	);
	assert_eq!(
		form.text_field("category", &FieldOptions::new()).unwrap().as_str(),
		"<p>food</p>"
	);
}

#[rstest]
fn test_builder_options_from_json(post: Value) {
	let options = BuilderOptions::from_value(json!({"readonly": true})).unwrap();
	let form = FormBuilder::new("post", &post, options);
	assert!(form.is_readonly());
}

#[rstest]
fn test_serializable_record_as_bound_object() {
	#[derive(Serialize)]
	struct Fruit {
		name: String,
		colour: Option<String>,
	}

	let fruit = to_form_object(&Fruit {
		name: "Apple".to_string(),
		colour: None,
	})
	.unwrap();
	let form = FormBuilder::new("fruit", &fruit, readonly());

	assert_eq!(
		form.text_field("name", &FieldOptions::new()).unwrap().as_str(),
		plaintext("Apple")
	);
	assert_eq!(
		form.text_field("colour", &FieldOptions::new()).unwrap().as_str(),
		plaintext("")
	);
	assert!(matches!(
		form.text_field("weight", &FieldOptions::new()),
		Err(FormError::AttributeNotFound { .. })
	));
}
