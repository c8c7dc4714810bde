//! Storage service for evidence files using Apache OpenDAL.
//!
//! This module provides vendor-agnostic object storage with support for:
//! - S3-compatible: MinIO, Cloudflare R2, AWS S3
//! - Azure Blob Storage
//! - Local filesystem (development only, no presigning)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Apache OpenDAL                         │
//! │                   (Unified Storage API)                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │ op.presign_read("key", ttl)  │ op.stat("key")               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod service;
mod status;

pub use config::StorageConfig;
pub use error::StorageError;
pub use evidence_shared::StorageProvider;
pub use service::{PresignedUrl, StorageService};
pub use status::StorageStatus;
