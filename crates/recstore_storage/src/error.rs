//! Error types for destination operations.

use std::io;
use thiserror::Error;

/// Result type for destination operations.
pub type DestinationResult<T> = Result<T, DestinationError>;

/// Errors that can occur during destination operations.
#[derive(Debug, Error)]
pub enum DestinationError {
    /// A required configuration parameter was not provided.
    #[error("missing configuration parameter: {key}")]
    MissingParameter {
        /// Name of the missing parameter.
        key: String,
    },

    /// The destination could not be prepared for use.
    #[error("destination setup failed: {message}")]
    Setup {
        /// Description of what went wrong during setup.
        message: String,
    },

    /// No entry is stored under the given identifier.
    #[error("no entry stored under identifier: {identifier}")]
    NotFound {
        /// The identifier that was looked up.
        identifier: String,
    },

    /// Reading from the destination failed.
    #[error("failed to read {context}: {source}")]
    Read {
        /// What was being read.
        context: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing to the destination failed.
    #[error("failed to write {context}: {source}")]
    Write {
        /// What was being written.
        context: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}
