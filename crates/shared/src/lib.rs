//! Shared errors and configuration for the evidence backend.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error types
//! - Configuration management, including the storage provider selection

pub mod config;
pub mod error;

pub use config::{AppConfig, StorageProvider, StorageSettings};
pub use error::AppError;
