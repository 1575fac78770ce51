use std::sync::Arc;

use crate::config::Config;
use crate::resume_client::ResumeSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Where activations fetch the resume from. `ResumeClient` in production.
    pub source: Arc<dyn ResumeSource>,
}
