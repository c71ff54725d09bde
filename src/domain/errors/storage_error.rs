//! Selection storage error types.

use thiserror::Error;

/// Durable key-value storage error variants.
///
/// Storage failures never escalate past the session service; they are
/// logged and the session continues without persistence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum StorageError {
    #[error("failed to read selection store: {message}")]
    Read { message: String },

    #[error("failed to write selection store: {message}")]
    Write { message: String },
}

impl StorageError {
    /// Creates read error.
    #[must_use]
    pub fn read(message: impl Into<String>) -> Self {
        Self::Read {
            message: message.into(),
        }
    }

    /// Creates write error.
    #[must_use]
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }
}
