//! RecStore CLI
//!
//! Command-line tools for working with record stores.
//!
//! # Commands
//!
//! - `list` - Show registered formats and destinations
//! - `template` - Print a ready-to-edit configuration template
//! - `insert` - Store a new record
//! - `find` - Look a record up by identifier
//! - `update` - Replace a stored record
//! - `delete` - Remove a record
//! - `query` - Scan for records matching a filter
//!
//! Record commands operate on a `json` + `localdir` store rooted at
//! the global `--path` argument.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// RecStore command-line record store tools.
#[derive(Parser)]
#[command(name = "recstore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the record directory
    #[arg(global = true, short, long)]
    path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show registered formats and destinations
    List {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print a ready-to-edit configuration template
    Template {
        /// Format plugin name
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Destination plugin name
        #[arg(short, long, default_value = "localdir")]
        destination: String,
    },

    /// Store a new record
    Insert {
        /// Record attributes as a JSON object
        data: String,

        /// Record identifier (a fresh UUID when omitted)
        #[arg(short, long)]
        id: Option<String>,

        /// Replace an existing record instead of failing
        #[arg(short, long)]
        overwrite: bool,
    },

    /// Look a record up by identifier
    Find {
        /// Record identifier
        id: String,
    },

    /// Replace a stored record
    Update {
        /// Record identifier
        id: String,

        /// Record attributes as a JSON object
        data: String,

        /// Insert the record when it does not exist
        #[arg(short, long)]
        upsert: bool,
    },

    /// Remove a record
    Delete {
        /// Record identifier
        id: String,

        /// Fail when the record does not exist
        #[arg(short, long)]
        strict: bool,
    },

    /// Scan for records matching a filter
    Query {
        /// Equality filter as a JSON object (empty matches everything)
        #[arg(short, long, default_value = "{}")]
        filter: String,

        /// Maximum records to return (0 = unbounded)
        #[arg(short, long, default_value = "0")]
        limit: usize,

        /// Matches to skip before returning
        #[arg(short, long, default_value = "0")]
        offset: usize,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::List { format } => {
            commands::list::run(&format)?;
        }
        Commands::Template {
            format,
            destination,
        } => {
            commands::template::run(&format, &destination)?;
        }
        Commands::Insert {
            data,
            id,
            overwrite,
        } => {
            let path = cli.path.ok_or("Record directory required for insert")?;
            commands::insert::run(&path, id, &data, overwrite)?;
        }
        Commands::Find { id } => {
            let path = cli.path.ok_or("Record directory required for find")?;
            commands::find::run(&path, &id)?;
        }
        Commands::Update { id, data, upsert } => {
            let path = cli.path.ok_or("Record directory required for update")?;
            commands::update::run(&path, &id, &data, upsert)?;
        }
        Commands::Delete { id, strict } => {
            let path = cli.path.ok_or("Record directory required for delete")?;
            commands::delete::run(&path, &id, strict)?;
        }
        Commands::Query {
            filter,
            limit,
            offset,
        } => {
            let path = cli.path.ok_or("Record directory required for query")?;
            commands::query::run(&path, &filter, limit, offset)?;
        }
        Commands::Version => {
            println!("RecStore CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("RecStore Core v{}", recstore_core::VERSION);
        }
    }

    Ok(())
}
