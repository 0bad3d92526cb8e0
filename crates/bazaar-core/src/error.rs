//! Error types for the Bazaar ecosystem.

use thiserror::Error;

use crate::validate::ValidationError;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the Bazaar ecosystem.
#[derive(Error, Debug)]
pub enum Error {
    /// One or more declared constraints were violated.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A user with the same username is already registered.
    #[error("User already exists: {username}")]
    DuplicateUser {
        /// The conflicting username.
        username: String,
    },

    /// No blog post exists for the requested id.
    #[error("Blog not found: {id}")]
    BlogNotFound {
        /// The requested blog id.
        id: String,
    },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error (unexpected state).
    #[error("Internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl Error {
    /// Returns `true` if this error is caused by client input.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::DuplicateUser { .. } | Self::BlogNotFound { .. }
        )
    }

    /// Creates a duplicate-user error for the given username.
    #[must_use]
    pub fn duplicate_user(username: impl Into<String>) -> Self {
        Self::DuplicateUser {
            username: username.into(),
        }
    }

    /// Creates an internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(Error::duplicate_user("alice").is_client_error());
        assert!(Error::BlogNotFound { id: "9".into() }.is_client_error());
        assert!(!Error::internal("boom").is_client_error());
    }

    #[test]
    fn test_duplicate_user_display() {
        let err = Error::duplicate_user("alice");
        assert_eq!(err.to_string(), "User already exists: alice");
    }
}
