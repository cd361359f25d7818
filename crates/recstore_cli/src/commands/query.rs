//! Query command implementation.

use crate::commands::{open_store, parse_attributes};
use recstore_core::Attributes;
use serde::Serialize;
use std::path::Path;

/// A single query match.
#[derive(Debug, Serialize)]
pub struct QueryMatch {
    /// Record identifier.
    pub id: String,
    /// Record attributes.
    pub attributes: Attributes,
}

/// Runs the query command.
///
/// The filter is a JSON object; records match when every filter entry
/// is present with an equal value. Matches print as a JSON array.
pub fn run(
    path: &Path,
    filter: &str,
    limit: usize,
    offset: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = parse_attributes(filter)?;

    let store = open_store(path)?;
    let matches: Vec<QueryMatch> = store
        .query(&filter, limit, offset)?
        .into_iter()
        .map(|(id, attributes)| QueryMatch { id, attributes })
        .collect();

    println!("{}", serde_json::to_string_pretty(&matches)?);
    Ok(())
}
