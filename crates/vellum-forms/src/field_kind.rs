//! Field kinds and their calling conventions
//!
//! Every field helper a form builder offers is one [`FieldKind`]. Each kind
//! carries a small [`FieldDescriptor`] telling the read-only renderer where
//! the displayed value comes from and how it is wrapped, and telling the
//! dynamic dispatcher which positional arguments the helper takes.

use std::ops::RangeInclusive;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// A form field helper
///
/// Names parse from and print as the helper's template name:
///
/// ```
/// use std::str::FromStr;
/// use vellum_forms::FieldKind;
///
/// assert_eq!(FieldKind::from_str("collection_select").unwrap(), FieldKind::CollectionSelect);
/// assert_eq!(FieldKind::from_str("phone_field").unwrap(), FieldKind::TelephoneField);
/// assert_eq!(FieldKind::TelephoneField.name(), "telephone_field");
/// assert!(FieldKind::from_str("fields_for").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum FieldKind {
	TextField,
	PasswordField,
	EmailField,
	NumberField,
	RangeField,
	SearchField,
	#[strum(to_string = "telephone_field", serialize = "phone_field")]
	TelephoneField,
	UrlField,
	ColorField,
	DateField,
	TimeField,
	#[strum(to_string = "datetime_field", serialize = "datetime_local_field")]
	DatetimeField,
	MonthField,
	WeekField,
	CheckBox,
	#[strum(to_string = "text_area", serialize = "textarea")]
	TextArea,
	Select,
	TimeZoneSelect,
	WeekdaySelect,
	CollectionSelect,
	CollectionCheckBoxes,
	CollectionRadioButtons,
	GroupedCollectionSelect,
	RadioButton,
	FileField,
	HiddenField,
}

/// Positional argument layout of a helper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
	/// `(method, options)`
	Standard,
	/// `(method, options, checked_value, unchecked_value)`
	CheckBox,
	/// `(method, choices, options, html_options)`
	Select,
	/// `(method, priority_zones, options, html_options)`
	TimeZoneSelect,
	/// `(method, options, html_options)`
	WeekdaySelect,
	/// `(method, collection, value_method, text_method, options, html_options)`
	Collection,
	/// `(method, collection, group_method, group_label_method, option_key_method,
	/// option_value_method, options, html_options)`
	GroupedCollection,
	/// `(method, tag_value, options)`
	RadioButton,
}

impl Signature {
	/// Accepted number of positional arguments
	pub fn arity(self) -> RangeInclusive<usize> {
		match self {
			Signature::Standard => 1..=2,
			Signature::CheckBox => 1..=4,
			Signature::Select => 2..=4,
			Signature::TimeZoneSelect => 1..=4,
			Signature::WeekdaySelect => 1..=3,
			Signature::Collection => 4..=6,
			Signature::GroupedCollection => 6..=8,
			Signature::RadioButton => 2..=3,
		}
	}

	/// Position of the options mapping (holding `readonly_value`)
	pub fn options_index(self) -> usize {
		match self {
			Signature::Standard | Signature::CheckBox | Signature::WeekdaySelect => 1,
			Signature::Select | Signature::TimeZoneSelect | Signature::RadioButton => 2,
			Signature::Collection => 4,
			Signature::GroupedCollection => 6,
		}
	}
}

/// Where a read-only fragment takes its value from when no override is given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
	/// The bound object's attribute named by the call
	Attribute,
	/// Nothing; the override or an empty value
	OverrideOnly,
}

/// How a read-only value is turned into markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStrategy {
	/// A single `<p>` holding the value
	Paragraph,
	/// `simple_format`: one `<p>` per paragraph of the value
	SimpleFormat,
	/// No markup at all
	Suppressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
	pub signature: Signature,
	pub value_source: ValueSource,
	pub display: DisplayStrategy,
}

impl FieldKind {
	/// Template name of the helper
	pub fn name(self) -> &'static str {
		self.into()
	}

	pub fn descriptor(self) -> FieldDescriptor {
		use DisplayStrategy::*;
		use ValueSource::*;

		let (signature, value_source, display) = match self {
			FieldKind::TextArea => (Signature::Standard, Attribute, SimpleFormat),
			FieldKind::FileField => (Signature::Standard, OverrideOnly, Paragraph),
			FieldKind::HiddenField => (Signature::Standard, OverrideOnly, Suppressed),
			FieldKind::CheckBox => (Signature::CheckBox, Attribute, Paragraph),
			FieldKind::Select => (Signature::Select, Attribute, Paragraph),
			FieldKind::TimeZoneSelect => (Signature::TimeZoneSelect, Attribute, Paragraph),
			FieldKind::WeekdaySelect => (Signature::WeekdaySelect, Attribute, Paragraph),
			FieldKind::CollectionSelect
			| FieldKind::CollectionCheckBoxes
			| FieldKind::CollectionRadioButtons => (Signature::Collection, Attribute, Paragraph),
			FieldKind::GroupedCollectionSelect => {
				(Signature::GroupedCollection, Attribute, Paragraph)
			}
			FieldKind::RadioButton => (Signature::RadioButton, Attribute, Paragraph),
			_ => (Signature::Standard, Attribute, Paragraph),
		};

		FieldDescriptor {
			signature,
			value_source,
			display,
		}
	}

	/// `type` attribute for kinds rendered as a plain `<input>`
	pub fn input_type(self) -> Option<&'static str> {
		Some(match self {
			FieldKind::TextField => "text",
			FieldKind::PasswordField => "password",
			FieldKind::EmailField => "email",
			FieldKind::NumberField => "number",
			FieldKind::RangeField => "range",
			FieldKind::SearchField => "search",
			FieldKind::TelephoneField => "tel",
			FieldKind::UrlField => "url",
			FieldKind::ColorField => "color",
			FieldKind::DateField => "date",
			FieldKind::TimeField => "time",
			FieldKind::DatetimeField => "datetime-local",
			FieldKind::MonthField => "month",
			FieldKind::WeekField => "week",
			_ => return None,
		})
	}
}

impl std::fmt::Display for FieldKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}
