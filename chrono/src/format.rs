//! Codec driven by a parse/format pair over a value's textual form.

use tempo_serialization_core_rs::{ConvertContext, ConvertError, JsonReader, JsonWriter, TypeTag, ValueCodec};

/// Reads and writes one value type through its canonical string form.
///
/// The pair is deliberately plain function pointers: every chrono codec is a
/// configuration of this one struct, built once at registration time.
pub struct FormatCodec<T> {
  parse: fn(&str) -> chrono::ParseResult<T>,
  format: fn(&T) -> String,
}

impl<T> FormatCodec<T> {
  /// Codec over the given parse/format pair.
  pub fn new(parse: fn(&str) -> chrono::ParseResult<T>, format: fn(&T) -> String) -> Self {
    Self { parse, format }
  }
}

impl<T> ValueCodec for FormatCodec<T>
where
  T: Send + Sync + 'static,
{
  type Value = T;

  fn read_value(&self, reader: &JsonReader<'_>, _ctx: &ConvertContext) -> Result<T, ConvertError> {
    let text = reader.expect_str(TypeTag::of::<T>())?;
    (self.parse)(text)
      .map_err(|e| ConvertError::invalid_data(TypeTag::of::<T>(), format!("{} ({e})", reader.describe())))
  }

  fn write_value(&self, writer: &mut JsonWriter, value: &T, _ctx: &ConvertContext) -> Result<(), ConvertError> {
    writer.write_str((self.format)(value));
    Ok(())
  }
}
