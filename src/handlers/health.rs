use axum::Json;
use serde::{Deserialize, Serialize};

pub const HEALTH_MESSAGE: &str = "Password Generator API is running!";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

/// GET / -> liveness message.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: HEALTH_MESSAGE.to_string(),
    })
}
