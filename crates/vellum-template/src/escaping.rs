//! HTML escaping for generated markup
//!
//! Every piece of text that reaches a fragment (field values, labels, link
//! targets) passes through one of these functions. Fragments that are already
//! markup are carried as [`SafeString`] so they are never escaped twice.
//!
//! Escaped characters:
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `&` → `&amp;`
//! - `"` → `&quot;`
//! - `'` → `&#x27;`

use serde::{Serialize, Serializer};

/// Escape HTML special characters in text content
///
/// # Examples
///
/// ```
/// use vellum_template::escape_html;
///
/// assert_eq!(escape_html("<script>alert('XSS')</script>"),
///            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
/// assert_eq!(escape_html("Fish & chips"), "Fish &amp; chips");
/// ```
pub fn escape_html(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Escape an attribute value
///
/// Like [`escape_html`], but also encodes whitespace control characters so a
/// value cannot break out of its line.
///
/// # Examples
///
/// ```
/// use vellum_template::escape_attr;
///
/// assert_eq!(escape_attr("#fruits"), "#fruits");
/// assert_eq!(escape_attr("a \"b\""), "a &quot;b&quot;");
/// assert_eq!(escape_attr("line\nbreak"), "line&#10;break");
/// ```
pub fn escape_attr(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			'\n' => result.push_str("&#10;"),
			'\r' => result.push_str("&#13;"),
			'\t' => result.push_str("&#9;"),
			_ => result.push(ch),
		}
	}
	result
}

/// A markup fragment that is already escaped
///
/// Helpers return `SafeString` so callers can concatenate fragments without
/// escaping them again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SafeString(String);

impl SafeString {
	/// Wrap a string that is known to be safe markup
	///
	/// # Examples
	///
	/// ```
	/// use vellum_template::SafeString;
	///
	/// let safe = SafeString::new("<b>Bold</b>");
	/// assert_eq!(safe.as_str(), "<b>Bold</b>");
	/// ```
	pub fn new(s: impl Into<String>) -> Self {
		SafeString(s.into())
	}

	/// An empty fragment
	pub fn empty() -> Self {
		SafeString(String::new())
	}

	/// Escape plain text into a fragment
	///
	/// # Examples
	///
	/// ```
	/// use vellum_template::SafeString;
	///
	/// assert_eq!(SafeString::escape("a < b").as_str(), "a &lt; b");
	/// ```
	pub fn escape(text: &str) -> Self {
		SafeString(escape_html(text))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn into_string(self) -> String {
		self.0
	}

	/// Append another fragment
	pub fn push(&mut self, other: &SafeString) {
		self.0.push_str(&other.0);
	}

	/// Concatenate fragments in order, with no separator
	///
	/// # Examples
	///
	/// ```
	/// use vellum_template::SafeString;
	///
	/// let joined = SafeString::concat([SafeString::new("<i>a</i>"), SafeString::new("<i>b</i>")]);
	/// assert_eq!(joined.as_str(), "<i>a</i><i>b</i>");
	/// ```
	pub fn concat<I>(fragments: I) -> Self
	where
		I: IntoIterator<Item = SafeString>,
	{
		let mut out = SafeString::empty();
		for fragment in fragments {
			out.push(&fragment);
		}
		out
	}
}

impl From<SafeString> for String {
	fn from(s: SafeString) -> Self {
		s.0
	}
}

impl AsRef<str> for SafeString {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for SafeString {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl Serialize for SafeString {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("plain", "plain")]
	#[case("<p>", "&lt;p&gt;")]
	#[case("Tom & Jerry", "Tom &amp; Jerry")]
	#[case(r#"say "hi""#, "say &quot;hi&quot;")]
	#[case("it's", "it&#x27;s")]
	fn test_escape_html(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_html(input), expected);
	}

	#[rstest]
	fn test_escape_attr_encodes_whitespace_controls() {
		assert_eq!(escape_attr("a\tb\r\nc"), "a&#9;b&#13;&#10;c");
	}

	#[rstest]
	fn test_escape_html_leaves_newlines() {
		assert_eq!(escape_html("a\nb"), "a\nb");
	}

	#[rstest]
	fn test_safe_string_is_not_escaped_again() {
		let fragment = SafeString::escape("<b>");
		let mut out = SafeString::new("<p>");
		out.push(&fragment);
		out.push(&SafeString::new("</p>"));
		assert_eq!(out.as_str(), "<p>&lt;b&gt;</p>");
	}

	#[rstest]
	fn test_safe_string_serializes_as_plain_string() {
		let value = serde_json::to_value(SafeString::new("<li></li>")).unwrap();
		assert_eq!(value, serde_json::json!("<li></li>"));
	}
}
