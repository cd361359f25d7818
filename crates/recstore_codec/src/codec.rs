//! Format codec trait definition.

use crate::error::CodecResult;
use crate::value::Attributes;

/// A record format codec.
///
/// Codecs translate between the in-memory attribute mapping and the
/// serialized text handed to a storage destination. The text is opaque
/// to everything but the codec that produced it.
///
/// # Invariants
///
/// - `deserialize(serialize(attrs))` reproduces `attrs` exactly,
///   including the kind of every value
/// - Serialized output for identical mappings is identical
/// - Codecs must be `Send + Sync` so a store can be shared across threads
///
/// # Implementors
///
/// - [`super::JsonCodec`] - The JSON format
pub trait Codec: Send + Sync {
    /// Serializes an attribute mapping to its text form.
    ///
    /// # Errors
    ///
    /// Returns an error if the mapping cannot be represented in the
    /// format, or the underlying serializer fails.
    fn serialize(&self, attributes: &Attributes) -> CodecResult<String>;

    /// Deserializes text previously produced by [`Codec::serialize`].
    ///
    /// # Errors
    ///
    /// Returns an error if the text is malformed for this format or
    /// contains values outside the supported scalar kinds.
    fn deserialize(&self, text: &str) -> CodecResult<Attributes>;
}
