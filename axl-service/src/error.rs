//! Error types for the service layer.

use thiserror::Error;

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors reported by the remote service or the client plumbing around it.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The schema has no type with this name.
    #[error("schema type not found: {0}")]
    SchemaNotFound(String),

    /// The remote side answered with a protocol or application fault.
    #[error("remote fault {code}: {message}")]
    Fault { code: String, message: String },

    /// The call never produced an answer.
    #[error("transport error: {0}")]
    Transport(String),

    /// No settings are registered under this configuration name.
    #[error("unknown configuration: {0}")]
    UnknownConfiguration(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ServiceError {
    /// Shorthand for a remote fault.
    pub fn fault(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fault {
            code: code.into(),
            message: message.into(),
        }
    }
}
