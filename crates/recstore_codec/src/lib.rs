//! # RecStore Codec
//!
//! Record serialization formats for RecStore.
//!
//! A codec turns a flat attribute mapping into a serialized string and
//! back. The string is what a storage destination persists; nothing
//! outside the codec interprets it.
//!
//! ## Format Rules
//!
//! - Attribute values are scalars: text, integer, float, or bool
//! - No nesting, no lists, no null
//! - Value kinds survive the round trip exactly (an integer never
//!   comes back as a float)
//! - Identical mappings serialize to identical strings
//!
//! ## Usage
//!
//! ```
//! use recstore_codec::{Attributes, Codec, JsonCodec, Scalar};
//!
//! let mut attrs = Attributes::new();
//! attrs.insert("name".to_string(), Scalar::from("Ada"));
//! attrs.insert("age".to_string(), Scalar::from(36i64));
//!
//! let codec = JsonCodec::new();
//! let text = codec.serialize(&attrs).unwrap();
//! let decoded = codec.deserialize(&text).unwrap();
//! assert_eq!(attrs, decoded);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod codec;
mod error;
mod json;
mod value;

pub use codec::Codec;
pub use error::{CodecError, CodecResult};
pub use json::JsonCodec;
pub use value::{Attributes, Scalar};
