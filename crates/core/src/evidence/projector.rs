//! Projection of evidence records into their response view.

use std::sync::Arc;

use tracing::warn;

use super::error::ConfigurationError;
use super::resolver::{ResolveError, UrlResolver};
use super::types::{Evidence, EvidenceView};

/// Builds [`EvidenceView`]s, resolving a fresh download URL for each one.
pub struct EvidenceProjector<U: UrlResolver> {
    resolver: Arc<U>,
}

impl<U: UrlResolver> EvidenceProjector<U> {
    /// Create a new projector.
    #[must_use]
    pub fn new(resolver: Arc<U>) -> Self {
        Self { resolver }
    }

    /// Resolve the download URL for a storage object.
    ///
    /// Returns `Ok(None)` when the backend is configured but cannot produce
    /// a URL for this particular object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the deployment has no usable storage.
    pub async fn resolve_url(
        &self,
        object_name: &str,
    ) -> Result<Option<String>, ConfigurationError> {
        match self.resolver.resolve(object_name).await {
            Ok(url) if url.is_empty() => {
                warn!(object_name, "Storage returned an empty download URL");
                Ok(None)
            }
            Ok(url) => Ok(Some(url)),
            Err(ResolveError::NotConfigured(reason)) => Err(ConfigurationError::new(reason)),
            Err(ResolveError::Unavailable(reason)) => {
                warn!(object_name, reason = %reason, "Failed to resolve download URL");
                Ok(None)
            }
        }
    }

    /// Project a record into its read-only view.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the deployment has no usable storage.
    /// No partial view is produced in that case.
    pub async fn project(&self, record: &Evidence) -> Result<EvidenceView, ConfigurationError> {
        let url = self.resolve_url(&record.storage_object_name).await?;
        Ok(EvidenceView::new(record, url))
    }
}
