//! JSON format codec.

use std::collections::BTreeMap;

use crate::codec::Codec;
use crate::error::{CodecError, CodecResult};
use crate::value::Attributes;

/// The JSON format codec.
///
/// Serializes an attribute mapping as a single JSON object. Value kinds
/// map one-to-one onto JSON: text to strings, integers to integer
/// literals, floats to literals carrying a fraction or exponent,
/// booleans to `true`/`false`. Deserializing reverses the mapping
/// exactly, so a stored integer never comes back as a float.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Registry name of this codec.
    pub const NAME: &'static str = "json";

    /// Configuration template: parameter names paired with example
    /// values. JSON takes no parameters.
    pub const CONF: &'static [(&'static str, &'static str)] = &[];

    /// Create a JSON codec.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Create a JSON codec from a configuration parameter map.
    ///
    /// Every parameter named in [`JsonCodec::CONF`] must be present;
    /// unknown parameters are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::MissingParameter`] if a declared parameter
    /// is absent.
    pub fn from_conf(conf: &BTreeMap<String, String>) -> CodecResult<Self> {
        for (key, _) in Self::CONF {
            if !conf.contains_key(*key) {
                return Err(CodecError::missing_parameter(*key));
            }
        }
        Ok(Self)
    }
}

impl Codec for JsonCodec {
    fn serialize(&self, attributes: &Attributes) -> CodecResult<String> {
        serde_json::to_string(attributes)
            .map_err(|err| CodecError::serialization_failed(err.to_string()))
    }

    fn deserialize(&self, text: &str) -> CodecResult<Attributes> {
        serde_json::from_str(text)
            .map_err(|err| CodecError::deserialization_failed(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Scalar;
    use proptest::prelude::*;

    fn sample() -> Attributes {
        let mut attrs = Attributes::new();
        attrs.insert("name".to_string(), Scalar::from("Ada"));
        attrs.insert("age".to_string(), Scalar::from(36i64));
        attrs.insert("height".to_string(), Scalar::from(1.63f64));
        attrs.insert("active".to_string(), Scalar::from(true));
        attrs
    }

    #[test]
    fn roundtrip_all_kinds() {
        let codec = JsonCodec::new();
        let attrs = sample();
        let text = codec.serialize(&attrs).unwrap();
        let decoded = codec.deserialize(&text).unwrap();
        assert_eq!(attrs, decoded);
    }

    #[test]
    fn serialized_form_is_deterministic() {
        let codec = JsonCodec::new();
        let text = codec.serialize(&sample()).unwrap();
        assert_eq!(text, codec.serialize(&sample()).unwrap());
        // Sorted key order comes from the attribute map itself.
        assert!(text.starts_with("{\"active\":true,\"age\":36"));
    }

    #[test]
    fn deserialize_rejects_malformed_text() {
        let codec = JsonCodec::new();
        assert!(matches!(
            codec.deserialize("not json"),
            Err(CodecError::DeserializationFailed { .. })
        ));
    }

    #[test]
    fn deserialize_rejects_non_object() {
        let codec = JsonCodec::new();
        assert!(codec.deserialize("[1, 2, 3]").is_err());
        assert!(codec.deserialize("42").is_err());
    }

    #[test]
    fn deserialize_rejects_nested_values() {
        let codec = JsonCodec::new();
        assert!(codec.deserialize("{\"a\": {\"b\": 1}}").is_err());
        assert!(codec.deserialize("{\"a\": [1]}").is_err());
        assert!(codec.deserialize("{\"a\": null}").is_err());
    }

    #[test]
    fn serialize_rejects_non_finite_floats() {
        let codec = JsonCodec::new();
        let mut attrs = Attributes::new();
        attrs.insert("x".to_string(), Scalar::Float(f64::NAN));
        assert!(matches!(
            codec.serialize(&attrs),
            Err(CodecError::SerializationFailed { .. })
        ));
    }

    #[test]
    fn from_conf_ignores_extra_parameters() {
        let mut conf = BTreeMap::new();
        conf.insert("unused".to_string(), "value".to_string());
        assert!(JsonCodec::from_conf(&conf).is_ok());
    }

    proptest! {
        #[test]
        fn roundtrip_arbitrary_attributes(
            entries in proptest::collection::btree_map(
                "[a-z]{1,8}",
                prop_oneof![
                    any::<i64>().prop_map(Scalar::Integer),
                    any::<bool>().prop_map(Scalar::Bool),
                    "[ -~]{0,16}".prop_map(Scalar::Text),
                    (-1.0e9f64..1.0e9).prop_map(Scalar::Float),
                ],
                1..6,
            )
        ) {
            let codec = JsonCodec::new();
            let text = codec.serialize(&entries).unwrap();
            let decoded = codec.deserialize(&text).unwrap();
            prop_assert_eq!(entries, decoded);
        }
    }
}
