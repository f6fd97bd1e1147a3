use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The set is deliberately closed: every failure the upload and listing
/// endpoints can surface maps to exactly one of these kinds.
#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected client input: wrong extension, empty upload, missing file
    /// part, or text too short to analyze.
    #[error("{0}")]
    Validation(String),

    /// The uploaded bytes could not be turned into text.
    #[error("Error extracting text from PDF: {0}")]
    Extraction(String),

    /// Persistence failure. The insert transaction has already been rolled
    /// back by the time this reaches the client.
    #[error("Error processing resume: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Extraction(_) => (StatusCode::BAD_REQUEST, "EXTRACTION_ERROR"),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR")
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string()
            }
        }));

        (status, body).into_response()
    }
}

// ────────────────────────────── tests ──────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn response_parts(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_error_is_400_with_raw_message() {
        let (status, body) =
            response_parts(AppError::Validation("Only PDF files are supported".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Only PDF files are supported");
    }

    #[tokio::test]
    async fn extraction_error_is_400_and_wraps_the_cause() {
        let (status, body) =
            response_parts(AppError::Extraction("PDF file appears to be empty".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "EXTRACTION_ERROR");
        assert_eq!(
            body["error"]["message"],
            "Error extracting text from PDF: PDF file appears to be empty"
        );
    }

    #[tokio::test]
    async fn database_error_is_500_and_wraps_the_fault() {
        let (status, body) = response_parts(AppError::Database(sqlx::Error::PoolClosed)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "DATABASE_ERROR");
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.starts_with("Error processing resume: "));
    }
}
