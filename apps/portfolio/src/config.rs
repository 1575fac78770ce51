use std::time::Duration;

use anyhow::{Context, Result};

use crate::render::LayoutKind;

const DEFAULT_SERVICE_URL: &str = "https://portlinkpy.vercel.app";

/// Application configuration loaded from environment variables.
///
/// The resume username is deliberately optional: a missing username is shown
/// on the page as a configuration error instead of failing startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub resume_username: Option<String>,
    pub resume_service_url: String,
    pub default_layout: LayoutKind,
    pub fetch_timeout: Option<Duration>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_layout = match optional_env("DEFAULT_LAYOUT") {
            Some(raw) => raw
                .parse::<LayoutKind>()
                .map_err(anyhow::Error::msg)
                .context("DEFAULT_LAYOUT must be 'sidebar' or 'stacked'")?,
            None => LayoutKind::default(),
        };

        let fetch_timeout = optional_env("RESUME_FETCH_TIMEOUT_SECS")
            .map(|raw| {
                raw.parse::<u64>()
                    .context("RESUME_FETCH_TIMEOUT_SECS must be a whole number of seconds")
            })
            .transpose()?
            .map(Duration::from_secs);

        Ok(Config {
            resume_username: optional_env("RESUME_USERNAME"),
            resume_service_url: optional_env("RESUME_SERVICE_URL")
                .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string()),
            default_layout,
            fetch_timeout,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating unset and blank values the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
