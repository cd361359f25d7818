//! Delete command implementation.

use crate::commands::open_store;
use std::path::Path;
use tracing::info;

/// Runs the delete command.
///
/// Deleting an absent record is a no-op unless `strict` is set.
pub fn run(path: &Path, id: &str, strict: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(path)?;
    store.delete(id, !strict)?;
    info!("Deleted record {id} from {path:?}");

    println!("✓ Deleted {id}");
    Ok(())
}
