//! Evidence error types.

use thiserror::Error;

/// The deployment has no usable storage backend for evidence downloads.
///
/// This is a process-wide fault, independent of the record being viewed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("storage is not properly configured for this server: {reason}")]
pub struct ConfigurationError {
    reason: String,
}

impl ConfigurationError {
    /// Create a configuration error.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// What is missing or broken in the storage setup.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Evidence operation errors.
#[derive(Debug, Error)]
pub enum EvidenceError {
    /// Evidence record not found.
    #[error("evidence not found: {0}")]
    NotFound(i64),

    /// Storage is not configured for this deployment.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Repository operation failed.
    #[error("repository error: {0}")]
    Repository(String),
}

impl EvidenceError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(id: i64) -> Self {
        Self::NotFound(id)
    }

    /// Create a repository error.
    #[must_use]
    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }
}
