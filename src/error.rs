use axum::extract::rejection::JsonRejection;
use axum::http::header::InvalidHeaderValue;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum PassforgeError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("API base URL cannot carry a path: {0}")]
    InvalidBaseUrl(String),

    #[error("Upstream error with status: {0}")]
    UpstreamStatus(StatusCode),

    #[error("No user is signed in")]
    NotSignedIn,

    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(#[from] InvalidHeaderValue),
}

impl From<JsonRejection> for PassforgeError {
    fn from(rejection: JsonRejection) -> Self {
        PassforgeError::InvalidBody(rejection.body_text())
    }
}

/// Every failure surfaces to HTTP callers as `500 {"error": message}`.
impl IntoResponse for PassforgeError {
    fn into_response(self) -> axum::response::Response {
        let message = self.to_string();
        error!(error = %message, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiErrorResponse { error: message }),
        )
            .into_response()
    }
}

/// Uniform API error payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn every_variant_maps_to_500_with_error_message() {
        let cases = vec![
            PassforgeError::MissingField("userId"),
            PassforgeError::InvalidBody("expected value".to_string()),
            PassforgeError::DatabaseError(SqlxError::PoolTimedOut),
            PassforgeError::UpstreamStatus(StatusCode::BAD_GATEWAY),
        ];

        for err in cases {
            let expected = err.to_string();
            let resp = err.into_response();
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
            let payload: ApiErrorResponse = serde_json::from_slice(&body).unwrap();
            assert_eq!(payload.error, expected);
        }
    }

    #[test]
    fn missing_field_names_the_field() {
        assert_eq!(
            PassforgeError::MissingField("password").to_string(),
            "Missing required field `password`"
        );
    }
}
