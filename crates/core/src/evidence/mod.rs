//! Sales evidence attachments.
//!
//! This module provides the read side of evidence records:
//! - The record and its read-only response view
//! - Download URL resolution against object storage
//! - Projection of a record into its view
//! - Lookup-then-project through a repository

mod error;
mod projector;
mod resolver;
mod service;
mod types;

pub use error::{ConfigurationError, EvidenceError};
pub use projector::EvidenceProjector;
pub use resolver::{ResolveError, StorageUrlResolver, UrlResolver};
pub use service::{EvidenceRepository, EvidenceService};
pub use types::{Evidence, EvidenceChanges, EvidenceView};
