//! Evidence service implementation.

use std::future::Future;
use std::sync::Arc;

use tracing::debug;

use super::error::EvidenceError;
use super::projector::EvidenceProjector;
use super::resolver::UrlResolver;
use super::types::{Evidence, EvidenceView};

/// Repository trait for evidence lookups.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait EvidenceRepository: Send + Sync {
    /// Find evidence by ID.
    fn find_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Evidence>, EvidenceError>> + Send;
}

/// Evidence service for reading evidence records.
pub struct EvidenceService<R: EvidenceRepository, U: UrlResolver> {
    repo: Arc<R>,
    projector: EvidenceProjector<U>,
}

impl<R: EvidenceRepository, U: UrlResolver> EvidenceService<R, U> {
    /// Create a new evidence service.
    #[must_use]
    pub fn new(repo: Arc<R>, resolver: Arc<U>) -> Self {
        Self {
            repo,
            projector: EvidenceProjector::new(resolver),
        }
    }

    /// Get evidence by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is not found or the lookup fails.
    pub async fn get_by_id(&self, id: i64) -> Result<Evidence, EvidenceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| EvidenceError::not_found(id))
    }

    /// Get the read-only view of an evidence record, with a fresh download URL.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Evidence not found
    /// - Lookup fails
    /// - Storage is not configured for this deployment
    pub async fn get_view(&self, id: i64) -> Result<EvidenceView, EvidenceError> {
        let record = self.get_by_id(id).await?;
        let view = self.projector.project(&record).await?;

        debug!(evidence_id = id, has_url = view.url.is_some(), "Evidence projected");

        Ok(view)
    }
}
