//! Error types surfaced to the host side of a conversion.

use thiserror::Error;

use crate::tag::TypeTag;

/// Failure reported by a conversion call.
#[derive(Error, Debug)]
pub enum ConvertError {
  /// A token was supplied that the target type cannot absorb: the null
  /// literal or the empty string for a non-optional target, or a payload the
  /// codec rejects.
  #[error("invalid data for {type_name}: {value}")]
  InvalidData {
    /// Static name of the requested target type.
    type_name: &'static str,
    /// Description of the offending token.
    value: String,
  },
  /// No registered converter answers for the requested type.
  #[error("no converter registered for {type_name}")]
  NoConverter {
    /// Static name of the requested target type.
    type_name: &'static str,
  },
  /// Token-level failure reported by serde_json, passed through unmodified.
  #[error(transparent)]
  Json(#[from] serde_json::Error),
}

impl ConvertError {
  /// Invalid-data error for `target` with a description of the offending value.
  pub fn invalid_data(target: TypeTag, value: impl Into<String>) -> Self {
    ConvertError::InvalidData {
      type_name: target.name(),
      value: value.into(),
    }
  }

  /// Resolution failure for `target`.
  #[must_use]
  pub fn no_converter(target: TypeTag) -> Self {
    ConvertError::NoConverter {
      type_name: target.name(),
    }
  }

  /// True for the invalid-data kind.
  #[must_use]
  pub fn is_invalid_data(&self) -> bool {
    matches!(self, ConvertError::InvalidData { .. })
  }
}
