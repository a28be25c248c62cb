//! Codec backed by serde_json, for types whose derived form is already the
//! wire form but which still want the shared null policy.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::context::ConvertContext;
use crate::converter::ValueCodec;
use crate::error::ConvertError;
use crate::tag::TypeTag;
use crate::token::{JsonReader, JsonWriter};

/// Delegates token work to serde_json.
pub struct SerdeCodec<T> {
  _phantom: PhantomData<T>,
}

impl<T> SerdeCodec<T> {
  /// New codec for `T`.
  #[must_use]
  pub fn new() -> Self {
    Self { _phantom: PhantomData }
  }
}

impl<T> Default for SerdeCodec<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> ValueCodec for SerdeCodec<T>
where
  T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
  type Value = T;

  fn read_value(&self, reader: &JsonReader<'_>, _ctx: &ConvertContext) -> Result<T, ConvertError> {
    serde_json::from_value(reader.value().clone())
      .map_err(|e| ConvertError::invalid_data(TypeTag::of::<T>(), e.to_string()))
  }

  fn write_value(&self, writer: &mut JsonWriter, value: &T, _ctx: &ConvertContext) -> Result<(), ConvertError> {
    writer.write_value(serde_json::to_value(value)?);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use serde::{Deserialize, Serialize};

  use super::*;
  use crate::registry::ConverterRegistry;

  #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
  struct Stamp {
    seconds: i64,
    label: String,
  }

  fn stamp_context() -> ConvertContext {
    let mut registry = ConverterRegistry::new();
    registry.register(SerdeCodec::<Stamp>::new());
    ConvertContext::new(registry)
  }

  #[test]
  fn round_trips_derived_types() {
    let ctx = stamp_context();
    let value = Stamp {
      seconds: 12,
      label: "boot".to_string(),
    };
    let encoded = ctx.to_json_string(&value).unwrap();
    assert_eq!(ctx.from_json_str::<Stamp>(&encoded).unwrap(), value);
  }

  #[test]
  fn optional_derived_type_follows_null_policy() {
    let ctx = stamp_context();
    assert_eq!(ctx.from_json_str::<Option<Stamp>>("null").unwrap(), None);
    assert_eq!(ctx.from_json_str::<Option<Stamp>>(r#""""#).unwrap(), None);
    assert!(ctx.from_json_str::<Stamp>("null").unwrap_err().is_invalid_data());
  }

  #[test]
  fn mismatched_shape_reports_invalid_data() {
    let ctx = stamp_context();
    assert!(ctx.from_json_str::<Stamp>("[1, 2]").unwrap_err().is_invalid_data());
  }
}
