//! Default codec set and the process-wide shared context.

use once_cell::sync::Lazy;
use tempo_serialization_core_rs::{ConvertContext, ConverterRegistry};

use crate::codecs;

/// Registers every codec this crate ships.
pub fn register_default_codecs(registry: &mut ConverterRegistry) -> &mut ConverterRegistry {
  registry
    .register(codecs::utc_datetime())
    .register(codecs::offset_datetime())
    .register(codecs::naive_date())
    .register(codecs::naive_time())
    .register(codecs::naive_datetime())
}

/// Fresh context pre-configured with the default codecs.
#[must_use]
pub fn default_context() -> ConvertContext {
  let mut registry = ConverterRegistry::new();
  register_default_codecs(&mut registry);
  tracing::debug!("built default chrono context: {} converters", registry.len());
  ConvertContext::new(registry)
}

static SHARED_CONTEXT: Lazy<ConvertContext> = Lazy::new(default_context);

/// Process-wide context for callers that do not carry their own.
#[must_use]
pub fn shared_context() -> &'static ConvertContext {
  &SHARED_CONTEXT
}
