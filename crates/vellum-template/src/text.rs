//! Plain text to markup conversion

use crate::escaping::{SafeString, escape_html};
use crate::tags::{HtmlAttrs, content_tag_safe};
use regex::Regex;
use std::sync::LazyLock;

// A blank line, possibly holding only whitespace, separates paragraphs.
static PARAGRAPH_BREAK: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\n\s*\n").expect("PARAGRAPH_BREAK: invalid regex pattern"));

/// Format text as a sequence of `<p>` elements
///
/// Text is escaped first. Blank lines start a new paragraph, single newlines
/// become `<br />`, and every paragraph receives `attrs`. Empty input yields a
/// single empty paragraph.
///
/// Unlike the Rails helper of the same name, a line holding only whitespace
/// also separates paragraphs, and markup in `text` is always escaped rather
/// than sanitized down to an allowed tag list.
///
/// # Examples
///
/// ```
/// use vellum_template::{HtmlAttrs, simple_format};
///
/// let attrs = HtmlAttrs::new().class("form-control-plaintext");
/// assert_eq!(
///     simple_format("One\nTwo\n\nThree", &attrs).as_str(),
///     "<p class=\"form-control-plaintext\">One\n<br />Two</p>\n\n<p class=\"form-control-plaintext\">Three</p>"
/// );
/// assert_eq!(simple_format("", &HtmlAttrs::new()).as_str(), "<p></p>");
/// ```
pub fn simple_format(text: &str, attrs: &HtmlAttrs) -> SafeString {
	let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
	let escaped = escape_html(&normalized);

	let paragraphs: Vec<SafeString> = PARAGRAPH_BREAK
		.split(&escaped)
		.filter(|paragraph| !paragraph.is_empty())
		.map(|paragraph| content_tag_safe("p", &line_breaks(paragraph), attrs))
		.collect();

	if paragraphs.is_empty() {
		return content_tag_safe("p", &SafeString::empty(), attrs);
	}

	let joined = paragraphs
		.iter()
		.map(SafeString::as_str)
		.collect::<Vec<_>>()
		.join("\n\n");
	SafeString::new(joined)
}

// Inserts `<br />` after every newline that is followed by more text.
fn line_breaks(paragraph: &str) -> SafeString {
	let mut out = String::with_capacity(paragraph.len() + 8);
	let mut chars = paragraph.chars().peekable();
	while let Some(ch) = chars.next() {
		out.push(ch);
		if ch == '\n' && chars.peek().is_some_and(|next| *next != '\n') {
			out.push_str("<br />");
		}
	}
	SafeString::new(out)
}
