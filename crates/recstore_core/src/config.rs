//! Store configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for opening a [`crate::Store`].
///
/// Pairs a format codec with a storage destination, each by registry
/// name plus a parameter map. [`crate::generate_config`] produces a
/// filled-in template for any registered pair, and the struct
/// round-trips through JSON so configurations can live in files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Registry name of the format codec.
    pub format: String,
    /// Format construction parameters.
    #[serde(default)]
    pub format_conf: BTreeMap<String, String>,
    /// Registry name of the storage destination.
    pub destination: String,
    /// Destination construction parameters.
    #[serde(default)]
    pub destination_conf: BTreeMap<String, String>,
}

impl StoreConfig {
    /// Create a configuration with empty parameter maps.
    pub fn new(format: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            format_conf: BTreeMap::new(),
            destination: destination.into(),
            destination_conf: BTreeMap::new(),
        }
    }

    /// The production pair: JSON format over a local directory rooted
    /// at `path`.
    pub fn json_localdir(path: impl Into<String>) -> Self {
        Self::new("json", "localdir").destination_param("path", path)
    }

    /// Set a format parameter.
    #[must_use]
    pub fn format_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.format_conf.insert(key.into(), value.into());
        self
    }

    /// Set a destination parameter.
    #[must_use]
    pub fn destination_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.destination_conf.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_parameters() {
        let config = StoreConfig::new("json", "localdir")
            .destination_param("path", "/tmp/records")
            .format_param("indent", "2");

        assert_eq!(config.format, "json");
        assert_eq!(config.destination, "localdir");
        assert_eq!(
            config.destination_conf.get("path"),
            Some(&"/tmp/records".to_string())
        );
        assert_eq!(config.format_conf.get("indent"), Some(&"2".to_string()));
    }

    #[test]
    fn json_localdir_shorthand() {
        let config = StoreConfig::json_localdir("./records");
        assert_eq!(config.format, "json");
        assert_eq!(config.destination, "localdir");
        assert_eq!(
            config.destination_conf.get("path"),
            Some(&"./records".to_string())
        );
        assert!(config.format_conf.is_empty());
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = StoreConfig::json_localdir("./records");
        let text = serde_json::to_string(&config).unwrap();
        let parsed: StoreConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn missing_parameter_maps_default_to_empty() {
        let parsed: StoreConfig =
            serde_json::from_str("{\"format\":\"json\",\"destination\":\"memory\"}").unwrap();
        assert!(parsed.format_conf.is_empty());
        assert!(parsed.destination_conf.is_empty());
    }
}
