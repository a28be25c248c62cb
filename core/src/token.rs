//! Token-level reader and writer shims over parsed JSON.
//!
//! The grammar is owned by serde_json; these types only give codecs a
//! borrowed, per-call view of it.

use serde_json::Value;

use crate::error::ConvertError;
use crate::tag::TypeTag;

/// Borrowed cursor over one parsed JSON node. Codecs consume from it and
/// never hold it beyond the call.
pub struct JsonReader<'a> {
  current: &'a Value,
}

impl<'a> JsonReader<'a> {
  /// Cursor positioned on `current`.
  #[must_use]
  pub fn new(current: &'a Value) -> Self {
    Self { current }
  }

  /// True when the current token is the null literal.
  #[must_use]
  pub fn is_null(&self) -> bool {
    self.current.is_null()
  }

  /// True when the current token is the null literal or the empty string
  /// literal. Only the empty string counts as absence; other empty shapes
  /// (arrays, objects) are ordinary payloads.
  #[must_use]
  pub fn is_null_or_empty(&self) -> bool {
    self.current.is_null() || matches!(self.current.as_str(), Some(""))
  }

  /// The underlying node.
  #[must_use]
  pub fn value(&self) -> &'a Value {
    self.current
  }

  /// The current token as a string slice, or invalid data for `target`.
  pub fn expect_str(&self, target: TypeTag) -> Result<&'a str, ConvertError> {
    self
      .current
      .as_str()
      .ok_or_else(|| ConvertError::invalid_data(target, self.describe()))
  }

  /// JSON text of the current token, for error reports.
  #[must_use]
  pub fn describe(&self) -> String {
    self.current.to_string()
  }
}

/// Single-value token sink. A writer that saw no tokens produces the null
/// literal.
#[derive(Debug, Default)]
pub struct JsonWriter {
  slot: Option<Value>,
}

impl JsonWriter {
  /// Empty writer.
  #[must_use]
  pub fn new() -> Self {
    Self { slot: None }
  }

  /// Writes the null token.
  pub fn write_null(&mut self) {
    self.slot = Some(Value::Null);
  }

  /// Writes a string token.
  pub fn write_str(&mut self, text: impl Into<String>) {
    self.slot = Some(Value::String(text.into()));
  }

  /// Writes an arbitrary token tree.
  pub fn write_value(&mut self, value: Value) {
    self.slot = Some(value);
  }

  /// The written output.
  #[must_use]
  pub fn into_value(self) -> Value {
    self.slot.unwrap_or(Value::Null)
  }
}
