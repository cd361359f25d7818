//! Plugin registry and configuration templates.
//!
//! Formats and destinations register here at compile time. Lookup by
//! name is the only dynamic step; an unknown name is an explicit
//! error, never a fallback.

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use recstore_codec::{Codec, JsonCodec};
use recstore_storage::{Destination, LocalDirDestination, MemoryDestination};
use std::collections::BTreeMap;

type Conf = BTreeMap<String, String>;

/// A registered format codec.
struct FormatEntry {
    name: &'static str,
    conf: &'static [(&'static str, &'static str)],
    build: fn(&Conf) -> StoreResult<Box<dyn Codec>>,
}

/// A registered storage destination.
struct DestinationEntry {
    name: &'static str,
    conf: &'static [(&'static str, &'static str)],
    build: fn(&Conf) -> StoreResult<Box<dyn Destination>>,
}

fn build_json(conf: &Conf) -> StoreResult<Box<dyn Codec>> {
    Ok(Box::new(JsonCodec::from_conf(conf)?))
}

fn build_localdir(conf: &Conf) -> StoreResult<Box<dyn Destination>> {
    Ok(Box::new(LocalDirDestination::from_conf(conf)?))
}

fn build_memory(conf: &Conf) -> StoreResult<Box<dyn Destination>> {
    Ok(Box::new(MemoryDestination::from_conf(conf)?))
}

static FORMATS: &[FormatEntry] = &[FormatEntry {
    name: JsonCodec::NAME,
    conf: JsonCodec::CONF,
    build: build_json,
}];

static DESTINATIONS: &[DestinationEntry] = &[
    DestinationEntry {
        name: LocalDirDestination::NAME,
        conf: LocalDirDestination::CONF,
        build: build_localdir,
    },
    DestinationEntry {
        name: MemoryDestination::NAME,
        conf: MemoryDestination::CONF,
        build: build_memory,
    },
];

/// Names of every registered format, in registration order.
#[must_use]
pub fn supported_formats() -> Vec<&'static str> {
    FORMATS.iter().map(|entry| entry.name).collect()
}

/// Names of every registered destination, in registration order.
#[must_use]
pub fn supported_destinations() -> Vec<&'static str> {
    DESTINATIONS.iter().map(|entry| entry.name).collect()
}

fn format_entry(name: &str) -> StoreResult<&'static FormatEntry> {
    FORMATS
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| StoreError::unknown_format(name))
}

fn destination_entry(name: &str) -> StoreResult<&'static DestinationEntry> {
    DESTINATIONS
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| StoreError::unknown_destination(name))
}

/// Builds the codec registered under `name` from its parameter map.
pub(crate) fn build_format(name: &str, conf: &Conf) -> StoreResult<Box<dyn Codec>> {
    (format_entry(name)?.build)(conf)
}

/// Builds the destination registered under `name` from its parameter map.
pub(crate) fn build_destination(name: &str, conf: &Conf) -> StoreResult<Box<dyn Destination>> {
    (destination_entry(name)?.build)(conf)
}

/// Builds a ready-to-use configuration for a format and destination
/// pair, with each plugin's example parameter values filled in.
///
/// The result can be passed to [`crate::Store::open`] as-is, or
/// serialized as a template for callers to edit.
///
/// # Errors
///
/// Returns [`StoreError::UnknownFormat`] or
/// [`StoreError::UnknownDestination`] if either name is not
/// registered.
pub fn generate_config(format: &str, destination: &str) -> StoreResult<StoreConfig> {
    let format_entry = format_entry(format)?;
    let destination_entry = destination_entry(destination)?;

    let mut config = StoreConfig::new(format_entry.name, destination_entry.name);
    for (key, example) in format_entry.conf {
        config
            .format_conf
            .insert((*key).to_string(), (*example).to_string());
    }
    for (key, example) in destination_entry.conf {
        config
            .destination_conf
            .insert((*key).to_string(), (*example).to_string());
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_are_registered() {
        assert_eq!(supported_formats(), vec!["json"]);
    }

    #[test]
    fn destinations_are_registered() {
        assert_eq!(supported_destinations(), vec!["localdir", "memory"]);
    }

    #[test]
    fn generate_config_fills_examples() {
        let config = generate_config("json", "localdir").unwrap();
        assert_eq!(config.format, "json");
        assert_eq!(config.destination, "localdir");
        assert!(config.format_conf.is_empty());
        assert_eq!(
            config.destination_conf.get("path"),
            Some(&"./records".to_string())
        );
    }

    #[test]
    fn generate_config_rejects_unknown_names() {
        assert!(matches!(
            generate_config("xml", "localdir"),
            Err(StoreError::UnknownFormat { name }) if name == "xml"
        ));
        assert!(matches!(
            generate_config("json", "s3"),
            Err(StoreError::UnknownDestination { name }) if name == "s3"
        ));
    }

    #[test]
    fn build_format_rejects_unknown_name() {
        let conf = Conf::new();
        assert!(matches!(
            build_format("yaml", &conf),
            Err(StoreError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn build_destination_requires_declared_parameters() {
        let conf = Conf::new();
        assert!(matches!(
            build_destination("localdir", &conf),
            Err(StoreError::InvalidConfiguration { .. })
        ));
    }
}
