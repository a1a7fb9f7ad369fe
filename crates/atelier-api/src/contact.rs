use axum::Form;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use serde::Deserialize;
use tracing::error;

use atelier_types::api::{ContactRequest, SubmissionOutcome};

use crate::pages;
use crate::state::AppState;
use crate::workflow;

#[derive(Debug, Deserialize)]
pub struct ContactPageQuery {
    /// Outcome code carried through the post-submit redirect.
    pub status: Option<String>,
}

pub async fn contact_page(Query(query): Query<ContactPageQuery>) -> Html<String> {
    let flash = query.status.as_deref().and_then(SubmissionOutcome::from_code);
    Html(pages::contact_html(flash))
}

pub async fn submit_contact(
    State(state): State<AppState>,
    Form(req): Form<ContactRequest>,
) -> Result<Redirect, StatusCode> {
    // Run blocking store and relay work off the async runtime
    let outcome = tokio::task::spawn_blocking(move || {
        workflow::process_submission(&state.db, state.notifier.as_ref(), &req)
    })
    .await
    .map_err(|e| {
        error!("spawn_blocking join error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Redirect::to(&format!("/contact?status={}", outcome.code())))
}

/// One-off admin-notification probe with fixed test data.
pub async fn test_email(State(state): State<AppState>) -> Result<&'static str, StatusCode> {
    let ok = tokio::task::spawn_blocking(move || {
        state.notifier.notify_admin(
            "Test User",
            "test@example.com",
            "3D Modeling",
            "This is a test message",
        )
    })
    .await
    .map_err(|e| {
        error!("spawn_blocking join error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(if ok { "Email sent" } else { "Email failed" })
}
