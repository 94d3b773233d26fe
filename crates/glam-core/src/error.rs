//! Error types for the planning engine.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::TaskStatus;

/// Comprehensive error type for all glam operations.
#[derive(Error, Debug)]
pub enum GlamError {
    /// SQLite connection or query errors
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A task status change that moves backwards
    #[error("Cannot move task from '{from}' back to '{to}'")]
    InvalidTransition { from: TaskStatus, to: TaskStatus },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Blocking storage work failed to join
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    /// Injected failure from an in-memory adapter
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Builder for creating storage errors with optional context.
pub struct StorageErrorBuilder {
    message: String,
}

impl StorageErrorBuilder {
    /// Create a new storage error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> GlamError {
        GlamError::Storage {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> GlamError {
        GlamError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl GlamError {
    /// Creates a builder for storage errors.
    pub fn storage(message: impl Into<String>) -> StorageErrorBuilder {
        StorageErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Specialized extension trait for SQLite-related Results.
pub trait StorageResultExt<T> {
    /// Map storage errors with a message.
    fn storage_context(self, message: &str) -> Result<T>;
}

impl<T> StorageResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn storage_context(self, message: &str) -> Result<T> {
        self.map_err(|e| GlamError::storage(message).with_source(e))
    }
}

/// Result type alias for glam operations
pub type Result<T> = std::result::Result<T, GlamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = GlamError::invalid_input("name").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'name': must not be empty"
        );
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = GlamError::InvalidTransition {
            from: TaskStatus::Booked,
            to: TaskStatus::Planned,
        };
        assert_eq!(err.to_string(), "Cannot move task from 'booked' back to 'planned'");
    }
}
