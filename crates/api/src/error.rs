//! Conversion of application errors into HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use evidence_core::evidence::EvidenceError;
use evidence_shared::AppError;
use serde_json::json;
use tracing::error;

/// Error returned by route handlers.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<EvidenceError> for ApiError {
    fn from(err: EvidenceError) -> Self {
        let app = match err {
            EvidenceError::NotFound(id) => AppError::NotFound(format!("evidence {id}")),
            EvidenceError::Configuration(e) => AppError::Configuration(e.to_string()),
            EvidenceError::Repository(msg) => AppError::Database(msg),
        };
        Self(app)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Server-side details stay in the logs.
        let message = if self.0.is_client_error() {
            self.0.to_string()
        } else {
            error!(error = %self.0, code = self.0.error_code(), "Request failed");
            if matches!(self.0, AppError::Configuration(_)) {
                "The server is missing required storage configuration".to_string()
            } else {
                "An error occurred".to_string()
            }
        };

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": message,
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evidence_core::evidence::ConfigurationError;
    use rstest::rstest;

    #[rstest]
    #[case(EvidenceError::not_found(7), StatusCode::NOT_FOUND)]
    #[case(
        EvidenceError::Configuration(ConfigurationError::new("unset")),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    #[case(EvidenceError::repository("down"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_evidence_error_status(#[case] err: EvidenceError, #[case] status: StatusCode) {
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), status);
    }

    #[test]
    fn test_configuration_error_code() {
        let err = ApiError::from(EvidenceError::Configuration(ConfigurationError::new("unset")));
        assert_eq!(err.0.error_code(), "CONFIGURATION_ERROR");
    }
}
