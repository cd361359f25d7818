//! Find command implementation.

use crate::commands::open_store;
use std::path::Path;

/// Runs the find command.
///
/// Prints the record as pretty JSON. A missing record is a command
/// failure so scripts can branch on the exit code.
pub fn run(path: &Path, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(path)?;

    match store.find(id)? {
        Some(attributes) => {
            println!("{}", serde_json::to_string_pretty(&attributes)?);
            Ok(())
        }
        None => Err(format!("No record stored under {id:?}").into()),
    }
}
