//! Storage availability for a running deployment.

use std::sync::Arc;

use tracing::{error, info, warn};

use evidence_shared::StorageSettings;

use super::config::StorageConfig;
use super::service::StorageService;

const NO_STORAGE: &str = "no storage backend is configured";

/// Whether the deployment has a usable storage backend, and why not.
#[derive(Clone)]
pub enum StorageStatus {
    /// Storage service built and ready to presign.
    Ready(Arc<StorageService>),
    /// No usable backend. Carries the reason reported to callers.
    Unconfigured(String),
}

impl StorageStatus {
    /// Status for a deployment without a storage section.
    #[must_use]
    pub fn missing() -> Self {
        Self::Unconfigured(NO_STORAGE.to_string())
    }

    /// Build the storage service from settings.
    ///
    /// A failed build is kept as `Unconfigured` with the build error as the
    /// reason, so every later request reports the actual cause.
    #[must_use]
    pub fn from_settings(settings: Option<&StorageSettings>) -> Self {
        let Some(settings) = settings else {
            warn!("No storage configured; evidence download URLs are unavailable");
            return Self::missing();
        };

        match StorageService::from_config(StorageConfig::from_settings(settings)) {
            Ok(storage) => {
                info!(
                    provider = storage.provider_name(),
                    bucket = storage.bucket(),
                    ttl_secs = settings.presign_download_ttl_secs,
                    "Storage service configured"
                );
                Self::Ready(Arc::new(storage))
            }
            Err(e) => {
                error!(
                    provider = settings.provider.name(),
                    error = %e,
                    "Failed to initialize storage service"
                );
                Self::Unconfigured(format!(
                    "{} storage failed to initialize: {e}",
                    settings.provider.name()
                ))
            }
        }
    }

    /// The storage service, when ready.
    #[must_use]
    pub fn service(&self) -> Option<&Arc<StorageService>> {
        match self {
            Self::Ready(storage) => Some(storage),
            Self::Unconfigured(_) => None,
        }
    }
}
