//! CLI command implementations.

pub mod delete;
pub mod find;
pub mod insert;
pub mod list;
pub mod query;
pub mod template;
pub mod update;

use recstore_core::{Attributes, Store, StoreConfig, StoreError};
use std::path::Path;

/// Opens the default `json` + `localdir` store over `path`.
pub(crate) fn open_store(path: &Path) -> Result<Store, StoreError> {
    Store::open(&StoreConfig::json_localdir(path.to_string_lossy()))
}

/// Parses a JSON object into record attributes.
///
/// The attribute deserializer enforces the data model, so nested
/// objects, arrays and null are rejected here rather than deep inside
/// a store operation.
pub(crate) fn parse_attributes(text: &str) -> Result<Attributes, Box<dyn std::error::Error>> {
    let attributes: Attributes = serde_json::from_str(text)?;
    Ok(attributes)
}
