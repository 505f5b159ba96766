//! Error types for the todo tracker.

use thiserror::Error;
use uuid::Uuid;

/// A shared error type for every layer of the todo tracker.
///
/// The repository raises the precise variant; the service passes `Io` and
/// `MalformedRecord` through untouched and turns `NotFound` into an absent
/// result where the operation allows it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// No record exists for the given id.
    #[error("Todo not found: '{id}'")]
    NotFound { id: Uuid },

    /// A record exists but its content cannot be decoded.
    #[error("Malformed record '{id}': {reason}")]
    MalformedRecord { id: Uuid, reason: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TodoError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    /// Creates a MalformedRecord error
    pub fn malformed(id: Uuid, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            id,
            reason: reason.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a MalformedRecord error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for TodoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

/// A type alias for `Result<T, TodoError>`.
pub type Result<T> = std::result::Result<T, TodoError>;
