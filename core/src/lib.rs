//! Typed conversion adapters bridging date/time values to a JSON token surface.
//!
//! The contract is a payload codec ([`converter::ValueCodec`]) wrapped by a
//! fixed null-handling policy ([`converter::Converter`]), registered into a
//! [`context::ConvertContext`] and resolved at runtime by type tag.

pub mod context;
pub mod converter;
pub mod error;
pub mod json;
pub mod registry;
pub mod tag;
pub mod token;

pub use context::ConvertContext;
pub use converter::{AnyConverter, Converter, ValueCodec};
pub use error::ConvertError;
pub use json::SerdeCodec;
pub use registry::ConverterRegistry;
pub use tag::TypeTag;
pub use token::{JsonReader, JsonWriter};
