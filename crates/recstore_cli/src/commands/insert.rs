//! Insert command implementation.

use crate::commands::{open_store, parse_attributes};
use std::path::Path;
use tracing::info;

/// Runs the insert command.
///
/// Mints a UUID identifier when none is given and prints the
/// identifier under which the record was stored.
pub fn run(
    path: &Path,
    id: Option<String>,
    data: &str,
    overwrite: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let attributes = parse_attributes(data)?;
    let identifier = id.unwrap_or_else(|| uuid::Uuid::new_v4().simple().to_string());

    let store = open_store(path)?;
    store.insert(&identifier, &attributes, overwrite)?;
    info!("Inserted record {identifier} into {path:?}");

    println!("{identifier}");
    Ok(())
}
