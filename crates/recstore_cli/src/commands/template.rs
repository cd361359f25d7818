//! Template command implementation.

use recstore_core::generate_config;

/// Runs the template command.
///
/// Prints a configuration for the named plugins with every declared
/// parameter filled with its example value, ready to edit and feed
/// back into a store.
pub fn run(format: &str, destination: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = generate_config(format, destination)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
