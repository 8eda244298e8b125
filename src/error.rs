//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The `Display` text of [`BookError`] is what the user sees when a command fails.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors produced by address book and command operations.
///
/// None of these are fatal: the command layer turns each one into a message
/// and waits for the next command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A phone number or date failed validation
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    /// Lookup by contact name or phone value found nothing
    #[error("Not found: {0}. Please check the input and try again.")]
    NotFound(String),

    /// The command needs more positional arguments than were given
    #[error("Not enough arguments. Usage: {usage}")]
    MissingArguments { usage: &'static str },

    /// A related piece of data could not be resolved
    #[error("Data lookup error: {0}")]
    LookupFailure(String),
}

impl From<ValidationError> for BookError {
    fn from(err: ValidationError) -> Self {
        BookError::InvalidFormat(err.to_string())
    }
}

/// Errors that can occur while loading or saving the address book snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded
    #[error("Snapshot format error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::NotFound("contact John".to_string());
        assert_eq!(
            err.to_string(),
            "Not found: contact John. Please check the input and try again."
        );

        let err = BookError::MissingArguments {
            usage: "phone <name>",
        };
        assert_eq!(err.to_string(), "Not enough arguments. Usage: phone <name>");

        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_PATH".to_string(),
            reason: "Cannot be empty".to_string(),
        };
        assert!(err.to_string().contains("ADDRESS_BOOK_PATH"));
    }

    #[test]
    fn test_validation_error_becomes_invalid_format() {
        let err: BookError = ValidationError::InvalidPhone("123".to_string()).into();
        assert_eq!(
            err,
            BookError::InvalidFormat("Invalid phone number format: 123".to_string())
        );
    }

    #[test]
    fn test_storage_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StorageError = io.into();
        assert!(err.to_string().contains("denied"));
    }
}
