//! Error types for the Room Design API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use placement_core::PlacementError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(entity) => (StatusCode::NOT_FOUND, format!("{} not found", entity)),
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Placement(err @ PlacementError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            ApiError::Placement(PlacementError::Processing(detail)) => {
                tracing::error!("Placement check failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error checking fitness: {}", detail),
                )
            }
            ApiError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    async fn render(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_processing_failure_is_internal_error() {
        let err = ApiError::from(PlacementError::Processing("lookup timed out".into()));
        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Error checking fitness: lookup timed out");
        assert_eq!(body["status"], 500);
    }

    #[tokio::test]
    async fn test_database_failure_hides_detail() {
        let (status, body) = render(ApiError::from(sqlx::Error::RowNotFound)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Database error");
        assert_eq!(body["status"], 500);
    }

    #[tokio::test]
    async fn test_internal_failure_hides_detail() {
        let (status, body) = render(ApiError::from(anyhow::anyhow!("disk full"))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal error");
    }

    #[tokio::test]
    async fn test_placement_not_found_names_entity() {
        let (status, body) = render(ApiError::from(PlacementError::furniture_not_found(4))).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Furniture not found");
        assert_eq!(body["status"], 404);
    }
}
