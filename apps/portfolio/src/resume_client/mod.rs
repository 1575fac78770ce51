/// Resume client — the single point of entry for calls to the resume data service.
///
/// Other modules talk to the service through the `ResumeSource` trait so the
/// view can be driven by a stub in tests.
use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::resume::{ResumeEnvelope, ResumeRecord};

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Username not configured")]
    Configuration,

    #[error("Resume service returned status {status}")]
    Fetch { status: u16 },

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ResumeError {
    /// The message shown to visitors. Every failure collapses into one of
    /// three fixed sentences; details stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            ResumeError::Configuration => "Username not configured",
            ResumeError::Fetch { .. } | ResumeError::Transport(_) => "Failed to fetch resume data",
            ResumeError::Parse(_) => "Failed to parse resume data",
        }
    }
}

/// Anything that can produce a resume record for a username.
/// Carried in `AppState` as `Arc<dyn ResumeSource>`.
#[async_trait]
pub trait ResumeSource: Send + Sync {
    async fn fetch_resume(&self, username: &str) -> Result<ResumeRecord, ResumeError>;
}

/// HTTP-backed `ResumeSource` talking to `<base>/api/resume/<username>`.
#[derive(Clone)]
pub struct ResumeClient {
    client: Client,
    base_url: Url,
}

impl ResumeClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid resume service URL '{base_url}'"))?;
        if base_url.cannot_be_a_base() {
            bail!("Resume service URL '{base_url}' cannot carry a path");
        }

        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Builds the endpoint URL. The username is pushed as one path segment,
    /// so reserved characters in it are percent-encoded.
    pub fn resume_url(&self, username: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["api", "resume", username]);
        }
        url
    }
}

#[async_trait]
impl ResumeSource for ResumeClient {
    /// Issues exactly one GET. Non-success statuses are not retried.
    async fn fetch_resume(&self, username: &str) -> Result<ResumeRecord, ResumeError> {
        let url = self.resume_url(username);
        debug!("Fetching resume from {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("Resume service returned {status} for '{username}'");
            return Err(ResumeError::Fetch {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let envelope: ResumeEnvelope = serde_json::from_str(&body).map_err(|e| {
            warn!("Resume service body did not match the expected envelope: {e}");
            ResumeError::Parse(e)
        })?;

        Ok(envelope.extracted_info.resume_info)
    }
}
