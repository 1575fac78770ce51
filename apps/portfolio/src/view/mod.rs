//! ResumeView — the fetch/state-machine core shared by every layout.
//!
//! Loading → Error | Loaded. Both terminal states are final for the lifetime
//! of the view; a new activation builds a new view.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::models::resume::ResumeRecord;
use crate::resume_client::{ResumeError, ResumeSource};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum ViewState {
    Loading,
    Error(String),
    Loaded(Arc<ResumeRecord>),
}

impl ViewState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ViewState::Loading)
    }
}

pub struct ResumeView {
    username: Option<String>,
    source: Arc<dyn ResumeSource>,
    state: ViewState,
}

impl ResumeView {
    /// The username is passed in explicitly; the view never reads the environment.
    pub fn new(username: Option<String>, source: Arc<dyn ResumeSource>) -> Self {
        Self {
            username,
            source,
            state: ViewState::Loading,
        }
    }

    pub fn into_state(self) -> ViewState {
        self.state
    }

    /// Runs the single fetch for this activation and records the outcome.
    /// Once the view has left `Loading`, further calls return the current
    /// state without touching the network.
    pub async fn load_resume(&mut self) -> &ViewState {
        if self.state.is_terminal() {
            return &self.state;
        }

        self.state = match self.fetch().await {
            Ok(record) => {
                info!("Resume loaded for '{}'", record.name);
                ViewState::Loaded(Arc::new(record))
            }
            Err(e) => {
                warn!("Resume view entering error state: {e}");
                ViewState::Error(e.user_message().to_string())
            }
        };

        &self.state
    }

    async fn fetch(&self) -> Result<ResumeRecord, ResumeError> {
        let username = self
            .username
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ResumeError::Configuration)?;

        self.source.fetch_resume(username).await
    }
}
