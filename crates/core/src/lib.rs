//! Core business logic for the evidence backend.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `storage` - Object storage access and presigned download URLs
//! - `evidence` - Evidence records, the read-only view projection and URL resolution

pub mod evidence;
pub mod storage;
