//! chrono codecs for the Tempo conversion adapters.
//!
//! Formats follow the textual conventions of the types themselves: RFC 3339
//! for offset-carrying instants, ISO 8601 calendar and clock forms for the
//! naive types. Every codec reads and writes JSON string tokens.

pub mod codecs;
mod codecs_test;
pub mod format;
pub mod settings;

pub use codecs::{naive_date, naive_datetime, naive_time, offset_datetime, utc_datetime};
pub use format::FormatCodec;
pub use settings::{default_context, register_default_codecs, shared_context};
