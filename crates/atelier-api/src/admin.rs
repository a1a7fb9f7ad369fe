use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use serde::Deserialize;
use tracing::error;

use crate::pages;
use crate::state::{AppState, AppStateInner};

#[derive(Debug, Deserialize)]
pub struct AdminQuery {
    pub password: Option<String>,
}

/// Plaintext equality against the configured shared secret. A mismatch gets
/// a bare 401 with no further detail and no store access.
fn authorized(state: &AppStateInner, query: &AdminQuery) -> bool {
    query.password.as_deref() == Some(state.admin_secret.as_str())
}

pub async fn list_submissions(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> Result<Html<String>, StatusCode> {
    if !authorized(&state, &query) {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let db_state = state.clone();
    let rows = tokio::task::spawn_blocking(move || db_state.db.list_submissions())
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|err| {
            error!("Failed to list submissions: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Html(pages::admin_html(&rows, &state.admin_secret)))
}

pub async fn delete_submission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<AdminQuery>,
) -> Result<StatusCode, StatusCode> {
    if !authorized(&state, &query) {
        return Err(StatusCode::UNAUTHORIZED);
    }

    tokio::task::spawn_blocking(move || state.db.delete_submission(id))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|err| {
            error!("Failed to delete submission {}: {}", id, err);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    // Empty 200 whether or not the row existed
    Ok(StatusCode::OK)
}
