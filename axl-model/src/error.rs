//! Error types for the mapping layer.

use axl_service::ServiceError;
use axl_types::Identity;
use thiserror::Error;

/// Result type for mapping operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by models, cursors and the SQL pass-through.
///
/// Local precondition failures (`AlreadyAttached`, `NotAttached`,
/// `UnsavedChanges`) are reported before any remote call is made.
#[derive(Debug, Error)]
pub enum ModelError {
    /// `create` on a model that already has a remote record.
    #[error("{type_name} is already attached as {identity}")]
    AlreadyAttached { type_name: String, identity: Identity },

    /// `update`, `remove` or `reload` on a model without a remote record.
    #[error("{type_name} is not attached to a remote record")]
    NotAttached { type_name: String },

    /// `reload` would discard local edits.
    #[error("{type_name} has unsaved changes to {}; update it or reload with force", .fields.join(", "))]
    UnsavedChanges { type_name: String, fields: Vec<String> },

    /// An identity failed canonical-form validation.
    #[error(transparent)]
    Format(#[from] axl_types::Error),

    /// The schema has no such type.
    #[error("schema type not found: {0}")]
    SchemaNotFound(String),

    /// Fault or transport failure from the remote call, unchanged.
    #[error(transparent)]
    Remote(ServiceError),

    /// The `get` call behind a load failed.
    #[error("lookup via {operation} failed: {source}")]
    Lookup {
        operation: String,
        #[source]
        source: ServiceError,
    },

    /// A single-result lookup matched several rows.
    #[error("expected at most one result, got {count}")]
    TooManyResults { count: usize },

    /// The response did not have the expected envelope.
    #[error("unexpected response to {operation}: {message}")]
    Protocol { operation: String, message: String },

    /// A caller-supplied argument breaks a domain rule.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ModelError {
    pub(crate) fn protocol(operation: &str, message: impl Into<String>) -> Self {
        Self::Protocol {
            operation: operation.to_string(),
            message: message.into(),
        }
    }
}

impl From<ServiceError> for ModelError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::SchemaNotFound(name) => Self::SchemaNotFound(name),
            other => Self::Remote(other),
        }
    }
}
