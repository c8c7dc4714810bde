//! Evidence types and data structures.

use serde::{Deserialize, Serialize};

/// Evidence domain model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    /// Unique identifier.
    pub id: i64,
    /// MIME type.
    pub mime_type: String,
    /// File size in bytes.
    pub size: u64,
    /// Original upload filename.
    pub filename: String,
    /// Key of the object in the storage backend.
    pub storage_object_name: String,
    /// Soft-delete flag.
    pub is_removed: bool,
}

/// Read-only response view of an evidence record.
///
/// Only implements `Serialize`; a request body can never be turned into a
/// view, so `id`, `is_removed` and `url` have no write path through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvidenceView {
    /// Unique identifier.
    pub id: i64,
    /// MIME type.
    pub mime_type: String,
    /// File size in bytes.
    pub size: u64,
    /// Original upload filename.
    pub filename: String,
    /// Key of the object in the storage backend.
    pub storage_object_name: String,
    /// Soft-delete flag.
    pub is_removed: bool,
    /// Time-limited download URL, `null` when it could not be produced.
    pub url: Option<String>,
}

impl EvidenceView {
    pub(crate) fn new(record: &Evidence, url: Option<String>) -> Self {
        Self {
            id: record.id,
            mime_type: record.mime_type.clone(),
            size: record.size,
            filename: record.filename.clone(),
            storage_object_name: record.storage_object_name.clone(),
            is_removed: record.is_removed,
            url,
        }
    }
}

/// Fields a write path may change on an evidence record.
///
/// `id`, `is_removed` and `url` are not part of this type, so they are
/// dropped when present in an incoming body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EvidenceChanges {
    /// New MIME type.
    pub mime_type: Option<String>,
    /// New file size in bytes.
    pub size: Option<u64>,
    /// New filename.
    pub filename: Option<String>,
    /// New storage object key.
    pub storage_object_name: Option<String>,
}

impl EvidenceChanges {
    /// Returns a copy of `record` with these changes applied.
    #[must_use]
    pub fn apply(&self, record: &Evidence) -> Evidence {
        Evidence {
            id: record.id,
            mime_type: self
                .mime_type
                .clone()
                .unwrap_or_else(|| record.mime_type.clone()),
            size: self.size.unwrap_or(record.size),
            filename: self
                .filename
                .clone()
                .unwrap_or_else(|| record.filename.clone()),
            storage_object_name: self
                .storage_object_name
                .clone()
                .unwrap_or_else(|| record.storage_object_name.clone()),
            is_removed: record.is_removed,
        }
    }

    /// Whether no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
