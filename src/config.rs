//! Environment and action-input gathering for the notifier.
use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SLACK_WEBHOOK is required")]
    MissingWebhook,
    #[error("could not find event path")]
    MissingEventPath,
}

/// Inputs for a single run, gathered from the workflow environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub webhook_url: String,
    pub event_path: PathBuf,
    pub event_name: Option<String>,
    pub run_number: String,
    pub title: Option<String>,
}

impl Config {
    /// Read the process environment. `title` comes from the action input
    /// (already parsed from the CLI / `INPUT_TITLE`).
    pub fn from_env(title: Option<String>) -> Result<Config, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok(), title)
    }

    /// Same logic over an injected lookup, so tests never touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F, title: Option<String>) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let webhook_url = lookup("SLACK_WEBHOOK")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingWebhook)?;
        let event_path = lookup("GITHUB_EVENT_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingEventPath)?;

        Ok(Config {
            webhook_url,
            event_path,
            event_name: lookup("GITHUB_EVENT_NAME"),
            run_number: lookup("GITHUB_RUN_NUMBER").unwrap_or_default(),
            title: title.filter(|t| !t.trim().is_empty()),
        })
    }
}
