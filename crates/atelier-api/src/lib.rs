pub mod admin;
pub mod contact;
pub mod pages;
pub mod state;
pub mod workflow;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

/// Full HTTP surface. The binary layers tracing on top before serving.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/services", get(pages::services))
        .route("/health", get(pages::health))
        .route(
            "/contact",
            get(contact::contact_page).post(contact::submit_contact),
        )
        .route("/admin", get(admin::list_submissions))
        .route("/admin/delete/{id}", post(admin::delete_submission))
        .route("/test-email", get(contact::test_email))
        .with_state(state)
}
