//! List command implementation.

use recstore_core::{supported_destinations, supported_formats};
use serde::Serialize;

/// Registered plugin names.
#[derive(Debug, Serialize)]
pub struct ListResult {
    /// Registered format names.
    pub formats: Vec<&'static str>,
    /// Registered destination names.
    pub destinations: Vec<&'static str>,
}

/// Runs the list command.
pub fn run(format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let result = ListResult {
        formats: supported_formats(),
        destinations: supported_destinations(),
    };

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            println!("Formats:");
            for name in &result.formats {
                println!("  {name}");
            }
            println!();
            println!("Destinations:");
            for name in &result.destinations {
                println!("  {name}");
            }
        }
    }

    Ok(())
}
