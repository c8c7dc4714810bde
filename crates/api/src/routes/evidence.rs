//! Sales evidence routes.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use tracing::info;

use crate::{AppState, error::ApiError};
use evidence_core::evidence::{EvidenceService, EvidenceView, StorageUrlResolver};
use evidence_db::EvidenceRepository;

/// Creates the evidence routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/evidence/{evidence_id}", get(get_evidence))
}

/// GET `/evidence/{evidence_id}`
/// Get evidence with a freshly signed download URL.
async fn get_evidence(
    State(state): State<AppState>,
    Path(evidence_id): Path<i64>,
) -> Result<Json<EvidenceView>, ApiError> {
    let repo = EvidenceRepository::new(state.db.clone());
    let resolver = StorageUrlResolver::new(state.storage.clone());
    let service = EvidenceService::new(Arc::new(repo), Arc::new(resolver));

    let view = service.get_view(evidence_id).await?;

    info!(evidence_id, has_url = view.url.is_some(), "Evidence served");

    Ok(Json(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use evidence_core::storage::{StorageConfig, StorageProvider, StorageService, StorageStatus};
    use evidence_core::evidence::EvidenceError;
    use evidence_db::entities::sales_evidence;
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::create_router;

    fn invoice_model() -> sales_evidence::Model {
        sales_evidence::Model {
            id: 7,
            mime_type: "application/pdf".to_string(),
            size: 1024,
            filename: "invoice.pdf".to_string(),
            storage_object_name: "evid/7/invoice.pdf".to_string(),
            is_removed: false,
        }
    }

    fn db_with(rows: Vec<sales_evidence::Model>) -> DatabaseConnection {
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([rows])
            .into_connection()
    }

    fn s3_storage() -> StorageStatus {
        let config = StorageConfig::new(StorageProvider::s3(
            "http://127.0.0.1:9000",
            "evidence",
            "minioadmin",
            "minioadmin",
            "us-east-1",
        ));
        StorageStatus::Ready(Arc::new(
            StorageService::from_config(config).expect("should create service"),
        ))
    }

    async fn get(state: AppState, uri: &str) -> (StatusCode, Value) {
        let response = create_router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_get_evidence() {
        let state = AppState {
            db: Arc::new(db_with(vec![invoice_model()])),
            storage: s3_storage(),
        };

        let (status, body) = get(state, "/api/v1/evidence/7").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 7);
        assert_eq!(body["mime_type"], "application/pdf");
        assert_eq!(body["size"], 1024);
        assert_eq!(body["filename"], "invoice.pdf");
        assert_eq!(body["storage_object_name"], "evid/7/invoice.pdf");
        assert_eq!(body["is_removed"], false);
        let url = body["url"].as_str().expect("url is a string");
        assert!(url.contains("evid/7/invoice.pdf"));
    }

    #[tokio::test]
    async fn test_get_evidence_not_found() {
        let state = AppState {
            db: Arc::new(db_with(Vec::new())),
            storage: s3_storage(),
        };

        let (status, body) = get(state, "/api/v1/evidence/8").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_get_evidence_without_storage() {
        let state = AppState {
            db: Arc::new(db_with(vec![invoice_model()])),
            storage: StorageStatus::missing(),
        };

        let (status, body) = get(state, "/api/v1/evidence/7").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "CONFIGURATION_ERROR");
        assert!(body.get("url").is_none());
    }

    #[tokio::test]
    async fn test_get_evidence_with_failed_storage() {
        let db = Arc::new(db_with(vec![invoice_model()]));
        let storage = StorageStatus::Unconfigured(
            "s3 storage failed to initialize: bucket is empty".to_string(),
        );

        let repo = EvidenceRepository::new(db.clone());
        let service = EvidenceService::new(
            Arc::new(repo),
            Arc::new(StorageUrlResolver::new(storage.clone())),
        );
        let err = service.get_view(7).await.unwrap_err();
        assert!(matches!(
            &err,
            EvidenceError::Configuration(e)
                if e.reason() == "s3 storage failed to initialize: bucket is empty"
        ));

        let (status, body) = get(AppState { db, storage }, "/api/v1/evidence/7").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "CONFIGURATION_ERROR");
    }

    #[tokio::test]
    async fn test_health_without_storage() {
        let state = AppState {
            db: Arc::new(db_with(Vec::new())),
            storage: StorageStatus::missing(),
        };

        let (status, body) = get(state, "/api/v1/health").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["storage"].is_null());
    }

    #[tokio::test]
    async fn test_health_reports_storage() {
        let state = AppState {
            db: Arc::new(db_with(Vec::new())),
            storage: s3_storage(),
        };

        let (status, body) = get(state, "/api/v1/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["storage"], "s3");
    }
}
