pub mod health;
pub mod page;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(page::handle_index))
        .route("/layouts/:layout", get(page::handle_layout))
        .route("/api/resume", get(page::handle_resume_state))
        .with_state(state)
}
