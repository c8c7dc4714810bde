//! Evidence repository for database operations.
//!
//! Implements evidence lookups using SeaORM.

use std::sync::Arc;

use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::error;

use crate::entities::sales_evidence;
use evidence_core::evidence::{Evidence, EvidenceError, EvidenceRepository as EvidenceRepoTrait};

/// Evidence repository implementation.
///
/// The connection is shared through an `Arc`, never cloned.
#[derive(Debug, Clone)]
pub struct EvidenceRepository {
    db: Arc<DatabaseConnection>,
}

impl EvidenceRepository {
    /// Create a new evidence repository.
    #[must_use]
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl EvidenceRepoTrait for EvidenceRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Evidence>, EvidenceError> {
        let model = sales_evidence::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| EvidenceError::repository(e.to_string()))?;

        model.map(to_domain).transpose()
    }
}

/// Convert database model to domain model.
fn to_domain(model: sales_evidence::Model) -> Result<Evidence, EvidenceError> {
    let size = u64::try_from(model.size).map_err(|_| {
        error!(evidence_id = model.id, size = model.size, "Negative evidence size");
        EvidenceError::repository(format!(
            "evidence {} has negative size {}",
            model.id, model.size
        ))
    })?;

    Ok(Evidence {
        id: model.id,
        mime_type: model.mime_type,
        size,
        filename: model.filename,
        storage_object_name: model.storage_object_name,
        is_removed: model.is_removed,
    })
}
