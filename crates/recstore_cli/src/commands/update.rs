//! Update command implementation.

use crate::commands::{open_store, parse_attributes};
use std::path::Path;
use tracing::info;

/// Runs the update command.
///
/// Replaces the whole record. With `upsert`, a missing record is
/// created instead of failing.
pub fn run(
    path: &Path,
    id: &str,
    data: &str,
    upsert: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let attributes = parse_attributes(data)?;

    let store = open_store(path)?;
    store.update(id, &attributes, upsert)?;
    info!("Updated record {id} in {path:?}");

    println!("✓ Updated {id}");
    Ok(())
}
