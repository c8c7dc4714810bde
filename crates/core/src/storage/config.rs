//! Storage configuration types.

use evidence_shared::{StorageProvider, StorageSettings};

/// Storage service configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage provider configuration.
    pub provider: StorageProvider,
    /// Presigned download URL TTL in seconds (default: 3600 = 1 hour).
    pub presign_download_ttl_secs: u64,
}

impl StorageConfig {
    /// Default download TTL: 1 hour.
    pub const DEFAULT_DOWNLOAD_TTL: u64 = 3600;

    /// Create a new storage config with default settings.
    #[must_use]
    pub fn new(provider: StorageProvider) -> Self {
        Self {
            provider,
            presign_download_ttl_secs: Self::DEFAULT_DOWNLOAD_TTL,
        }
    }

    /// Build from the `storage` section of the application config.
    #[must_use]
    pub fn from_settings(settings: &StorageSettings) -> Self {
        Self::new(settings.provider.clone()).with_download_ttl(settings.presign_download_ttl_secs)
    }

    /// Set presigned download URL TTL.
    #[must_use]
    pub fn with_download_ttl(mut self, secs: u64) -> Self {
        self.presign_download_ttl_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::new(StorageProvider::local_fs("./storage"));
        assert_eq!(
            config.presign_download_ttl_secs,
            StorageConfig::DEFAULT_DOWNLOAD_TTL
        );
    }

    #[test]
    fn test_storage_config_from_settings() {
        let settings = StorageSettings {
            provider: StorageProvider::s3(
                "http://minio:9000",
                "evidence",
                "key",
                "secret",
                "us-east-1",
            ),
            presign_download_ttl_secs: 300,
        };

        let config = StorageConfig::from_settings(&settings);
        assert_eq!(config.provider.name(), "s3");
        assert_eq!(config.presign_download_ttl_secs, 300);
    }
}
