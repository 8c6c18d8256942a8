//! Breadcrumb helper tests
//!
//! Expected markup follows the Bootstrap breadcrumb component.

use proptest::prelude::*;
use rstest::rstest;
use vellum_template::{Breadcrumb, SafeString, render_entry, render_list};

#[rstest]
fn test_render_list_empty() {
	assert_eq!(
		render_list(&[]).as_str(),
		r#"<ol class="breadcrumb bg-body-tertiary p-2"></ol>"#
	);
}

#[rstest]
fn test_render_list_single_entry() {
	assert_eq!(
		render_list(&[render_entry("Fruits", "#fruits", false)]).as_str(),
		r##"<ol class="breadcrumb bg-body-tertiary p-2"><li class="breadcrumb-item"><a href="#fruits">Fruits</a></li></ol>"##
	);
}

#[rstest]
#[case(false, r##"<li class="breadcrumb-item"><a href="#fruits">Fruits</a></li>"##)]
#[case(true, r##"<li class="breadcrumb-item active"><a href="#fruits">Fruits</a></li>"##)]
fn test_render_entry(#[case] active: bool, #[case] expected: &str) {
	assert_eq!(render_entry("Fruits", "#fruits", active).as_str(), expected);
}

#[rstest]
fn test_default_entry_is_inactive() {
	assert_eq!(
		Breadcrumb::new("Fruits", "#fruits").render(),
		render_entry("Fruits", "#fruits", false)
	);
}

#[rstest]
fn test_render_list_keeps_order() {
	let html = render_list(&[
		render_entry("A", "/a", false),
		render_entry("B", "/b", false),
		render_entry("C", "/c", true),
	]);
	let a = html.as_str().find(">A<").unwrap();
	let b = html.as_str().find(">B<").unwrap();
	let c = html.as_str().find(">C<").unwrap();
	assert!(a < b && b < c);
}

proptest! {
	#[test]
	fn prop_list_wraps_concatenated_entries(labels in prop::collection::vec("[a-zA-Z ]{1,12}", 0..6)) {
		let entries: Vec<SafeString> = labels
			.iter()
			.map(|label| render_entry(label, "/", false))
			.collect();
		let inner: String = entries.iter().map(SafeString::as_str).collect();
		let expected = format!(r#"<ol class="breadcrumb bg-body-tertiary p-2">{inner}</ol>"#);
		prop_assert_eq!(render_list(&entries).into_string(), expected);
	}

	#[test]
	fn prop_entry_never_leaks_raw_markup(label in ".*") {
		let html = render_entry(&label, "/", false).into_string();
		let inner = html
			.strip_prefix(r#"<li class="breadcrumb-item"><a href="/">"#)
			.and_then(|rest| rest.strip_suffix("</a></li>"))
			.unwrap();
		prop_assert!(!inner.contains('<'));
		prop_assert!(!inner.contains('>'));
	}
}
