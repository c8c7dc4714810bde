//! Download URL resolution for stored evidence objects.

use std::future::Future;
use thiserror::Error;
use tracing::debug;

use crate::storage::{StorageError, StorageStatus};

/// Why a download URL could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The deployment has no usable storage backend.
    #[error("storage not configured: {0}")]
    NotConfigured(String),

    /// The backend is configured but could not produce a URL for this object.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl ResolveError {
    /// Create a not configured error.
    #[must_use]
    pub fn not_configured(msg: impl Into<String>) -> Self {
        Self::NotConfigured(msg.into())
    }

    /// Create an unavailable error.
    #[must_use]
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

impl From<StorageError> for ResolveError {
    fn from(err: StorageError) -> Self {
        if err.is_deployment_fault() {
            Self::NotConfigured(err.to_string())
        } else {
            Self::Unavailable(err.to_string())
        }
    }
}

/// Produces time-limited access URLs for storage object keys.
pub trait UrlResolver: Send + Sync {
    /// Resolve `object_name` to a download URL.
    fn resolve(
        &self,
        object_name: &str,
    ) -> impl Future<Output = Result<String, ResolveError>> + Send;
}

/// Resolver backed by the deployment's storage status.
#[derive(Clone)]
pub struct StorageUrlResolver {
    storage: StorageStatus,
}

impl StorageUrlResolver {
    /// Create a resolver over the deployment's storage.
    #[must_use]
    pub fn new(storage: StorageStatus) -> Self {
        Self { storage }
    }
}

impl UrlResolver for StorageUrlResolver {
    async fn resolve(&self, object_name: &str) -> Result<String, ResolveError> {
        let storage = match &self.storage {
            StorageStatus::Ready(storage) => storage,
            StorageStatus::Unconfigured(reason) => {
                return Err(ResolveError::not_configured(reason.clone()));
            }
        };

        let presigned = storage.presign_download(object_name).await?;
        debug!(
            object_name,
            method = %presigned.method,
            expires_at = %presigned.expires_at,
            "Download URL presigned"
        );
        Ok(presigned.url)
    }
}
