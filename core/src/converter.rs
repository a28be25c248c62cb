//! The typed conversion adapter: payload codecs, the fixed null-handling
//! wrapper, and the type-erased surface the host side dispatches through.

use std::any::Any;

use crate::context::ConvertContext;
use crate::error::ConvertError;
use crate::tag::TypeTag;
use crate::token::{JsonReader, JsonWriter};

/// Payload logic for one target type. Implementations only see non-null,
/// non-empty tokens; the null policy lives on [`Converter`].
pub trait ValueCodec: Send + Sync {
  /// The conversion target.
  type Value: Send + Sync + 'static;

  /// Consumes the current token(s) and produces a value.
  fn read_value(&self, reader: &JsonReader<'_>, ctx: &ConvertContext) -> Result<Self::Value, ConvertError>;

  /// Writes exactly the tokens representing `value`, nothing around them.
  fn write_value(&self, writer: &mut JsonWriter, value: &Self::Value, ctx: &ConvertContext)
    -> Result<(), ConvertError>;

  /// Stand-in tags this codec additionally answers for. Capability only:
  /// reads still produce [`Self::Value`].
  fn accepts(&self, tag: TypeTag) -> bool {
    let _ = tag;
    false
  }
}

/// Pairs one codec with the fixed null-handling policy. The policy is not
/// overridable; codecs never observe the null literal or the empty string.
pub struct Converter<C> {
  codec: C,
}

impl<C: ValueCodec> Converter<C> {
  /// Wraps `codec`.
  pub fn new(codec: C) -> Self {
    Self { codec }
  }

  /// Tag of the conversion target.
  #[must_use]
  pub fn target(&self) -> TypeTag {
    TypeTag::of::<C::Value>()
  }

  /// Capability check: the target type, its `Option` form, and any stand-in
  /// tags the codec enumerates.
  pub fn can_convert(&self, tag: TypeTag) -> bool {
    tag == TypeTag::of::<C::Value>() || tag == TypeTag::optional_of::<C::Value>() || self.codec.accepts(tag)
  }

  /// Read for a target that cannot absorb null: the null literal and the
  /// empty string literal are invalid data.
  pub fn read(&self, reader: &JsonReader<'_>, ctx: &ConvertContext) -> Result<C::Value, ConvertError> {
    if reader.is_null_or_empty() {
      return Err(ConvertError::invalid_data(self.target(), reader.describe()));
    }
    self.codec.read_value(reader, ctx)
  }

  /// Read for an optional target: the null literal and the empty string
  /// literal both yield `None`.
  pub fn read_optional(&self, reader: &JsonReader<'_>, ctx: &ConvertContext) -> Result<Option<C::Value>, ConvertError> {
    if reader.is_null_or_empty() {
      return Ok(None);
    }
    self.codec.read_value(reader, ctx).map(Some)
  }

  /// Writes a non-null value through the codec.
  pub fn write(&self, writer: &mut JsonWriter, value: &C::Value, ctx: &ConvertContext) -> Result<(), ConvertError> {
    self.codec.write_value(writer, value, ctx)
  }

  /// `None` writes the null token; `Some` delegates to the codec.
  pub fn write_optional(
    &self,
    writer: &mut JsonWriter,
    value: Option<&C::Value>,
    ctx: &ConvertContext,
  ) -> Result<(), ConvertError> {
    match value {
      Some(value) => self.codec.write_value(writer, value, ctx),
      None => {
        writer.write_null();
        Ok(())
      }
    }
  }
}

/// Type-erased converter surface consulted by the host side.
pub trait AnyConverter: Send + Sync {
  /// Tag of the concrete conversion target.
  fn target(&self) -> TypeTag;

  /// Whether this converter answers for `tag`.
  fn can_convert(&self, tag: TypeTag) -> bool;

  /// Reads a value for `requested`, selecting the optional policy when the
  /// requested tag is the `Option` form of the target.
  fn read_any(
    &self,
    reader: &JsonReader<'_>,
    requested: TypeTag,
    ctx: &ConvertContext,
  ) -> Result<Box<dyn Any + Send>, ConvertError>;

  /// Writes a value that is either the target type or its `Option` form.
  fn write_any(&self, writer: &mut JsonWriter, value: &dyn Any, ctx: &ConvertContext) -> Result<(), ConvertError>;
}

impl<C: ValueCodec> AnyConverter for Converter<C> {
  fn target(&self) -> TypeTag {
    Converter::target(self)
  }

  fn can_convert(&self, tag: TypeTag) -> bool {
    Converter::can_convert(self, tag)
  }

  fn read_any(
    &self,
    reader: &JsonReader<'_>,
    requested: TypeTag,
    ctx: &ConvertContext,
  ) -> Result<Box<dyn Any + Send>, ConvertError> {
    if requested == TypeTag::optional_of::<C::Value>() {
      self
        .read_optional(reader, ctx)
        .map(|value| Box::new(value) as Box<dyn Any + Send>)
    } else {
      self.read(reader, ctx).map(|value| Box::new(value) as Box<dyn Any + Send>)
    }
  }

  fn write_any(&self, writer: &mut JsonWriter, value: &dyn Any, ctx: &ConvertContext) -> Result<(), ConvertError> {
    if let Some(value) = value.downcast_ref::<C::Value>() {
      return self.write(writer, value, ctx);
    }
    if let Some(value) = value.downcast_ref::<Option<C::Value>>() {
      return self.write_optional(writer, value.as_ref(), ctx);
    }
    Err(ConvertError::invalid_data(
      self.target(),
      "value does not match the converter target",
    ))
  }
}
