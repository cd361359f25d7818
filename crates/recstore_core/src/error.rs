//! Error types for the record store.

use recstore_codec::CodecError;
use recstore_storage::DestinationError;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in record store operations.
///
/// This is the root taxonomy: lower-level destination and codec errors
/// convert into it kind-for-kind, so callers match on one enum.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store or one of its plugins was configured incorrectly.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        /// Description of the configuration problem.
        message: String,
    },

    /// No format codec is registered under the requested name.
    #[error("unknown format: {name}")]
    UnknownFormat {
        /// The requested format name.
        name: String,
    },

    /// No destination is registered under the requested name.
    #[error("unknown destination: {name}")]
    UnknownDestination {
        /// The requested destination name.
        name: String,
    },

    /// A record violated the data model invariants.
    #[error("invalid record: {message}")]
    InvalidRecord {
        /// Description of the validation failure.
        message: String,
    },

    /// Insert without overwrite addressed an existing identifier.
    #[error("record already exists: {identifier}")]
    DuplicateRecord {
        /// The conflicting identifier.
        identifier: String,
    },

    /// An operation addressed an identifier with no stored record.
    #[error("record not found: {identifier}")]
    NotFound {
        /// The identifier that was looked up.
        identifier: String,
    },

    /// The destination failed while reading.
    #[error("read failure: {0}")]
    ReadFailure(#[source] DestinationError),

    /// The destination failed while writing.
    #[error("write failure: {0}")]
    WriteFailure(#[source] DestinationError),

    /// The codec could not serialize a record.
    #[error("serialization failure: {0}")]
    SerializationFailure(#[source] CodecError),

    /// The codec could not deserialize stored data.
    #[error("deserialization failure: {0}")]
    DeserializationFailure(#[source] CodecError),
}

impl StoreError {
    /// Creates an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Creates an unknown format error.
    pub fn unknown_format(name: impl Into<String>) -> Self {
        Self::UnknownFormat { name: name.into() }
    }

    /// Creates an unknown destination error.
    pub fn unknown_destination(name: impl Into<String>) -> Self {
        Self::UnknownDestination { name: name.into() }
    }

    /// Creates an invalid record error.
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }

    /// Creates a duplicate record error.
    pub fn duplicate_record(identifier: impl Into<String>) -> Self {
        Self::DuplicateRecord {
            identifier: identifier.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            identifier: identifier.into(),
        }
    }
}

impl From<DestinationError> for StoreError {
    fn from(err: DestinationError) -> Self {
        match err {
            DestinationError::NotFound { identifier } => Self::NotFound { identifier },
            DestinationError::MissingParameter { .. } | DestinationError::Setup { .. } => {
                Self::InvalidConfiguration {
                    message: err.to_string(),
                }
            }
            DestinationError::Read { .. } => Self::ReadFailure(err),
            DestinationError::Write { .. } => Self::WriteFailure(err),
        }
    }
}

impl From<CodecError> for StoreError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::MissingParameter { .. } => Self::InvalidConfiguration {
                message: err.to_string(),
            },
            CodecError::SerializationFailed { .. } => Self::SerializationFailure(err),
            CodecError::DeserializationFailed { .. } => Self::DeserializationFailure(err),
        }
    }
}
