//! Provider and batch settings.

use std::time::Duration;

use url::Url;

use super::AppError;

pub const DEFAULT_API_BASE: &str = "https://graph.facebook.com/v17.0";
pub const DEFAULT_LANGUAGE_CODE: &str = "en";
pub const DEFAULT_SHEET: &str = "Sheet1";

/// Messaging provider endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Graph API base, including the version segment.
    pub api_base: String,
    /// Template language sent with every message.
    pub language_code: String,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ProviderConfig {
    /// `{api_base}/{account_id}/messages`
    pub fn messages_endpoint(&self, account_id: &str) -> Result<Url, AppError> {
        let raw = format!("{}/{}/messages", self.api_base.trim_end_matches('/'), account_id);
        Url::parse(&raw).map_err(|e| {
            AppError::config_error(format!("Invalid API base '{}': {}", self.api_base, e))
        })
    }
}

/// Settings for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub sheet: String,
    pub pacing: Pacing,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { sheet: DEFAULT_SHEET.to_string(), pacing: Pacing::default() }
    }
}

/// Fixed pause inserted between consecutive sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from_millis(default_delay_ms())
    }
}

impl Pacing {
    pub const fn none() -> Self {
        Self { delay: Duration::ZERO }
    }

    pub const fn from_millis(millis: u64) -> Self {
        Self { delay: Duration::from_millis(millis) }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_none(&self) -> bool {
        self.delay.is_zero()
    }
}

/// Complete settings for the `send` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendConfig {
    pub provider: ProviderConfig,
    pub batch: BatchConfig,
}

pub(crate) fn default_timeout() -> u64 {
    30
}

pub(crate) fn default_delay_ms() -> u64 {
    1000
}
