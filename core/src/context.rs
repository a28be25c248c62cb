//! Shared conversion context: registered converters plus host-side entry
//! points for whole-value conversion.

use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;
use static_assertions::assert_impl_all;

use crate::converter::AnyConverter;
use crate::error::ConvertError;
use crate::registry::ConverterRegistry;
use crate::tag::TypeTag;
use crate::token::{JsonReader, JsonWriter};

/// Configuration consulted during conversion. Built once, then reused across
/// calls and threads; adapters receive it by reference and never mutate it.
pub struct ConvertContext {
  registry: ConverterRegistry,
  resolved: DashMap<TypeTag, Arc<dyn AnyConverter>>,
}

assert_impl_all!(ConvertContext: Send, Sync);

impl ConvertContext {
  /// Context over an already-populated registry.
  #[must_use]
  pub fn new(registry: ConverterRegistry) -> Self {
    Self {
      registry,
      resolved: DashMap::new(),
    }
  }

  /// The registered converters.
  #[must_use]
  pub fn registry(&self) -> &ConverterRegistry {
    &self.registry
  }

  /// Resolves the converter for `tag`, consulting the cache first. Caching
  /// is sound because the registry is immutable once the context exists.
  #[must_use]
  pub fn resolve(&self, tag: TypeTag) -> Option<Arc<dyn AnyConverter>> {
    if let Some(found) = self.resolved.get(&tag) {
      return Some(Arc::clone(&found));
    }
    let found = self.registry.resolve(tag)?;
    tracing::debug!("resolved converter: requested = {}, target = {}", tag, found.target());
    self.resolved.insert(tag, Arc::clone(&found));
    Some(found)
  }

  /// Parses `input` and converts it to `T` through the registered converter.
  pub fn from_json_str<T>(&self, input: &str) -> Result<T, ConvertError>
  where
    T: 'static, {
    let value: Value = serde_json::from_str(input)?;
    self.from_json_value(&value)
  }

  /// Converts an already-parsed node to `T`.
  pub fn from_json_value<T>(&self, value: &Value) -> Result<T, ConvertError>
  where
    T: 'static, {
    let tag = TypeTag::of::<T>();
    let converter = self.resolve(tag).ok_or_else(|| ConvertError::no_converter(tag))?;
    let reader = JsonReader::new(value);
    let produced = converter.read_any(&reader, tag, self)?;
    produced
      .downcast::<T>()
      .map(|boxed| *boxed)
      .map_err(|_| ConvertError::invalid_data(tag, "converter produced a mismatched value"))
  }

  /// Converts `value` to a JSON node through the registered converter.
  pub fn to_json_value<T>(&self, value: &T) -> Result<Value, ConvertError>
  where
    T: 'static, {
    let tag = TypeTag::of::<T>();
    let converter = self.resolve(tag).ok_or_else(|| ConvertError::no_converter(tag))?;
    let mut writer = JsonWriter::new();
    converter.write_any(&mut writer, value, self)?;
    Ok(writer.into_value())
  }

  /// Converts `value` to JSON text.
  pub fn to_json_string<T>(&self, value: &T) -> Result<String, ConvertError>
  where
    T: 'static, {
    self.to_json_value(value).map(|value| value.to_string())
  }
}
