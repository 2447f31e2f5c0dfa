use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::{debug, info};

use crate::db::{HISTORY_LIMIT, NewPasswordRecord, PasswordRecord};
use crate::{PassforgeError, router::PassforgeState};

/// POST /api/passwords -> stores `{userId, password}` and echoes the stored record.
pub async fn create_password(
    State(state): State<PassforgeState>,
    payload: Result<Json<NewPasswordRecord>, JsonRejection>,
) -> Result<(StatusCode, Json<PasswordRecord>), PassforgeError> {
    let Json(new) = payload?;
    let record = state.storage.insert(new).await?;
    info!(id = %record.id, user_id = %record.user_id, "password record stored");
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/passwords/{userId} -> newest-first history, capped at `HISTORY_LIMIT`.
pub async fn list_passwords(
    State(state): State<PassforgeState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<PasswordRecord>>, PassforgeError> {
    let records = state.storage.list_for_user(&user_id, HISTORY_LIMIT).await?;
    debug!(user_id = %user_id, count = records.len(), "password history listed");
    Ok(Json(records))
}

/// DELETE /api/passwords/{id} -> 204 whether or not the record existed.
pub async fn delete_password(
    State(state): State<PassforgeState>,
    Path(id): Path<String>,
) -> Result<StatusCode, PassforgeError> {
    let removed = state.storage.delete_by_id(&id).await?;
    info!(id = %id, removed, "password record delete handled");
    Ok(StatusCode::NO_CONTENT)
}
