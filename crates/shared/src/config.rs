//! Application configuration management.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Object storage configuration.
    ///
    /// Absent when the deployment has no storage backend; evidence download
    /// URLs cannot be produced in that case.
    #[serde(default)]
    pub storage: Option<StorageSettings>,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Storage backend selection and presign settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Storage provider configuration.
    pub provider: StorageProvider,
    /// Presigned download URL TTL in seconds.
    #[serde(default = "default_download_ttl")]
    pub presign_download_ttl_secs: u64,
}

fn default_download_ttl() -> u64 {
    3600 // 1 hour
}

/// Storage provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageProvider {
    /// S3-compatible storage: MinIO, Cloudflare R2, AWS S3
    S3 {
        /// S3 endpoint URL.
        endpoint: String,
        /// S3 bucket name.
        bucket: String,
        /// Access key ID.
        access_key_id: String,
        /// Secret access key.
        secret_access_key: String,
        /// Region.
        region: String,
    },
    /// Azure Blob Storage
    AzureBlob {
        /// Azure storage account name.
        account: String,
        /// Azure storage access key.
        access_key: String,
        /// Azure container name.
        container: String,
    },
    /// Local filesystem (development only, cannot presign)
    LocalFs {
        /// Root directory path.
        root: PathBuf,
    },
}

impl StorageProvider {
    /// Create S3-compatible provider.
    #[must_use]
    pub fn s3(
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self::S3 {
            endpoint: endpoint.into(),
            bucket: bucket.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            region: region.into(),
        }
    }

    /// Create Azure Blob Storage provider.
    #[must_use]
    pub fn azure_blob(
        account: impl Into<String>,
        access_key: impl Into<String>,
        container: impl Into<String>,
    ) -> Self {
        Self::AzureBlob {
            account: account.into(),
            access_key: access_key.into(),
            container: container.into(),
        }
    }

    /// Create local filesystem provider (development only).
    #[must_use]
    pub fn local_fs(root: impl Into<PathBuf>) -> Self {
        Self::LocalFs { root: root.into() }
    }

    /// Get the provider name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::S3 { .. } => "s3",
            Self::AzureBlob { .. } => "azure_blob",
            Self::LocalFs { .. } => "local",
        }
    }

    /// Get the bucket/container name.
    #[must_use]
    pub fn bucket(&self) -> &str {
        match self {
            Self::S3 { bucket, .. } => bucket,
            Self::AzureBlob { container, .. } => container,
            Self::LocalFs { root } => root.to_str().unwrap_or("local"),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `EVIDENCE__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("EVIDENCE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_provider_s3() {
        let provider = StorageProvider::s3(
            "https://minio.internal:9000",
            "evidence",
            "access_key",
            "secret_key",
            "us-east-1",
        );
        assert_eq!(provider.name(), "s3");
        assert_eq!(provider.bucket(), "evidence");
    }

    #[test]
    fn test_storage_provider_azure() {
        let provider = StorageProvider::azure_blob("salesdev", "access_key", "evidence");
        assert_eq!(provider.name(), "azure_blob");
        assert_eq!(provider.bucket(), "evidence");
    }

    #[test]
    fn test_storage_provider_local() {
        let provider = StorageProvider::local_fs("./storage");
        assert_eq!(provider.name(), "local");
        assert_eq!(provider.bucket(), "./storage");
    }

    #[test]
    fn test_storage_settings_default_ttl() {
        let settings: StorageSettings = serde_json::from_value(serde_json::json!({
            "provider": { "type": "local_fs", "root": "./storage" }
        }))
        .expect("valid settings");
        assert_eq!(settings.presign_download_ttl_secs, 3600);
        assert_eq!(settings.provider.name(), "local");
    }

    #[test]
    fn test_server_defaults() {
        let server = ServerConfig::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_load_from_environment_without_storage() {
        temp_env::with_vars(
            [
                ("RUN_MODE", Some("test")),
                ("EVIDENCE__DATABASE__URL", Some("postgres://localhost/evidence")),
                ("EVIDENCE__SERVER__PORT", Some("9090")),
            ],
            || {
                let config = AppConfig::load().expect("config loads");
                assert_eq!(config.database.url, "postgres://localhost/evidence");
                assert_eq!(config.database.max_connections, 10);
                assert_eq!(config.server.host, "0.0.0.0");
                assert_eq!(config.server.port, 9090);
                assert!(config.storage.is_none());
            },
        );
    }

    #[test]
    fn test_load_storage_from_environment() {
        temp_env::with_vars(
            [
                ("RUN_MODE", Some("test")),
                ("EVIDENCE__DATABASE__URL", Some("postgres://localhost/evidence")),
                ("EVIDENCE__STORAGE__PROVIDER__TYPE", Some("s3")),
                (
                    "EVIDENCE__STORAGE__PROVIDER__ENDPOINT",
                    Some("http://minio:9000"),
                ),
                ("EVIDENCE__STORAGE__PROVIDER__BUCKET", Some("evidence")),
                ("EVIDENCE__STORAGE__PROVIDER__ACCESS_KEY_ID", Some("key")),
                ("EVIDENCE__STORAGE__PROVIDER__SECRET_ACCESS_KEY", Some("secret")),
                ("EVIDENCE__STORAGE__PROVIDER__REGION", Some("us-east-1")),
                ("EVIDENCE__STORAGE__PRESIGN_DOWNLOAD_TTL_SECS", Some("600")),
            ],
            || {
                let config = AppConfig::load().expect("config loads");
                assert_eq!(config.server.host, "0.0.0.0");
                assert_eq!(config.server.port, 8080);
                let storage = config.storage.expect("storage section present");
                assert_eq!(storage.provider.name(), "s3");
                assert_eq!(storage.provider.bucket(), "evidence");
                assert_eq!(storage.presign_download_ttl_secs, 600);
            },
        );
    }
}
