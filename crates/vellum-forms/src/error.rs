/// Errors raised while rendering a form field
///
/// All of these indicate malformed template code; none is recovered from.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
	/// The bound object has no attribute with this name and no
	/// `readonly_value` override was given
	#[error("undefined attribute `{attribute}` for `{object_name}`")]
	AttributeNotFound {
		object_name: String,
		attribute: String,
	},
	/// A helper was called with the wrong number or kind of arguments
	#[error("wrong arguments for `{helper}` (given {given}, expected {expected})")]
	ArgumentShapeMismatch {
		helper: String,
		given: String,
		expected: String,
	},
	#[error("unknown form helper `{0}`")]
	UnknownHelper(String),
	#[error("invalid options for `{helper}`: {source}")]
	InvalidOptions {
		helper: String,
		#[source]
		source: serde_json::Error,
	},
}

impl FormError {
	pub(crate) fn attribute_not_found(object_name: &str, attribute: &str) -> Self {
		FormError::AttributeNotFound {
			object_name: object_name.to_string(),
			attribute: attribute.to_string(),
		}
	}

	pub(crate) fn shape(
		helper: &str,
		given: impl std::fmt::Display,
		expected: impl std::fmt::Display,
	) -> Self {
		FormError::ArgumentShapeMismatch {
			helper: helper.to_string(),
			given: given.to_string(),
			expected: expected.to_string(),
		}
	}
}

pub type FormResult<T> = Result<T, FormError>;
