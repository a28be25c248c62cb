//! Ordered converter registry with first-applicable resolution.

use std::sync::Arc;

use crate::converter::{AnyConverter, Converter, ValueCodec};
use crate::tag::TypeTag;

/// Collection of converters consulted in registration order. Resolution
/// returns the first converter whose capability check admits the tag; order
/// beyond that is undefined and callers must not rely on it.
#[derive(Clone, Default)]
pub struct ConverterRegistry {
  converters: Vec<Arc<dyn AnyConverter>>,
}

impl ConverterRegistry {
  /// Empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self { converters: Vec::new() }
  }

  /// Wraps `codec` in the shared null-policy wrapper and appends it.
  pub fn register<C>(&mut self, codec: C) -> &mut Self
  where
    C: ValueCodec + 'static, {
    self.register_converter(Arc::new(Converter::new(codec)))
  }

  /// Appends an already-erased converter.
  pub fn register_converter(&mut self, converter: Arc<dyn AnyConverter>) -> &mut Self {
    tracing::debug!("registering converter: target = {}", converter.target());
    self.converters.push(converter);
    self
  }

  /// First registered converter whose capability check admits `tag`.
  #[must_use]
  pub fn resolve(&self, tag: TypeTag) -> Option<Arc<dyn AnyConverter>> {
    self.converters.iter().find(|converter| converter.can_convert(tag)).cloned()
  }

  /// Number of registered converters.
  #[must_use]
  pub fn len(&self) -> usize {
    self.converters.len()
  }

  /// True when nothing has been registered.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.converters.is_empty()
  }
}
