//! Error types for the codec crate.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while serializing or deserializing records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A required configuration parameter was not provided.
    #[error("missing configuration parameter: {key}")]
    MissingParameter {
        /// Name of the missing parameter.
        key: String,
    },

    /// Failed to serialize an attribute mapping.
    #[error("serialization failed: {message}")]
    SerializationFailed {
        /// Description of the serialization error.
        message: String,
    },

    /// Failed to deserialize stored text back into an attribute mapping.
    #[error("deserialization failed: {message}")]
    DeserializationFailed {
        /// Description of the deserialization error.
        message: String,
    },
}

impl CodecError {
    /// Create a missing parameter error.
    pub fn missing_parameter(key: impl Into<String>) -> Self {
        Self::MissingParameter { key: key.into() }
    }

    /// Create a serialization failed error.
    pub fn serialization_failed(message: impl Into<String>) -> Self {
        Self::SerializationFailed {
            message: message.into(),
        }
    }

    /// Create a deserialization failed error.
    pub fn deserialization_failed(message: impl Into<String>) -> Self {
        Self::DeserializationFailed {
            message: message.into(),
        }
    }
}
