use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::db::HistoryStorage;
use crate::error::PassforgeError;
use crate::handlers::health::health_handler;
use crate::handlers::passwords::{create_password, delete_password, list_passwords};

#[derive(Clone)]
pub struct PassforgeState {
    pub storage: HistoryStorage,
}

impl PassforgeState {
    pub fn new(storage: HistoryStorage) -> Self {
        Self { storage }
    }
}

/// CORS policy admitting only `frontend_url`, with credentials.
pub fn cors_layer(frontend_url: &str) -> Result<CorsLayer, PassforgeError> {
    let origin = HeaderValue::from_str(frontend_url.trim_end_matches('/'))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE]))
}

pub fn passforge_router(state: PassforgeState, cors: CorsLayer) -> Router {
    // GET lists by owner, DELETE removes by record id; both share one path shape.
    let api = Router::new()
        .route("/passwords", post(create_password))
        .route("/passwords/{key}", get(list_passwords).delete(delete_password));

    Router::new()
        .route("/", get(health_handler))
        .nest("/api", api)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
