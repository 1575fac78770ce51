use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::render::LayoutKind;
use crate::state::AppState;
use crate::view::{ResumeView, ViewState};

/// One activation: a fresh view, a single fetch, the terminal state.
/// Dropping the returned future (client went away) drops the in-flight request.
async fn activate(state: &AppState) -> ViewState {
    let mut view = ResumeView::new(state.config.resume_username.clone(), state.source.clone());
    view.load_resume().await;
    view.into_state()
}

async fn render_page(state: &AppState, kind: LayoutKind) -> Html<String> {
    info!("Rendering resume page with {kind} layout");
    let view_state = activate(state).await;
    Html(kind.layout().render(&view_state))
}

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    render_page(&state, state.config.default_layout).await
}

/// GET /layouts/:layout
pub async fn handle_layout(
    State(state): State<AppState>,
    Path(layout): Path<String>,
) -> Result<Html<String>, AppError> {
    let kind = layout.parse::<LayoutKind>().map_err(AppError::NotFound)?;
    Ok(render_page(&state, kind).await)
}

/// GET /api/resume
pub async fn handle_resume_state(State(state): State<AppState>) -> Json<ViewState> {
    Json(activate(&state).await)
}
