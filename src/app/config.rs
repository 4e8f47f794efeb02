//! Send configuration loading.
//!
//! Precedence: command-line overrides, then the TOML file, then defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::domain::configuration::{default_delay_ms, default_timeout};
use crate::domain::{AppError, BatchConfig, Pacing, ProviderConfig, SendConfig};

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub sheet: Option<String>,
    pub api_base: Option<String>,
    pub delay_ms: Option<u64>,
    pub timeout_secs: Option<u64>,
}

/// Resolve the effective configuration from an optional file plus overrides.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<SendConfig, AppError> {
    let base = match path {
        Some(path) => load_config(path)?,
        None => SendConfig::default(),
    };
    let config = apply_overrides(base, overrides);
    validate(&config)?;
    Ok(config)
}

/// Load and parse a TOML config file.
pub fn load_config(path: &Path) -> Result<SendConfig, AppError> {
    if !path.exists() {
        return Err(AppError::config_error(format!("Config file not found: {}", path.display())));
    }

    let content = fs::read_to_string(path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<SendConfig, AppError> {
    let dto: ConfigDto =
        toml::from_str(content).map_err(|e| AppError::ConfigFileInvalid(e.to_string()))?;
    Ok(dto.into())
}

fn apply_overrides(mut config: SendConfig, overrides: &ConfigOverrides) -> SendConfig {
    if let Some(sheet) = &overrides.sheet {
        config.batch.sheet = sheet.clone();
    }
    if let Some(api_base) = &overrides.api_base {
        config.provider.api_base = api_base.clone();
    }
    if let Some(delay_ms) = overrides.delay_ms {
        config.batch.pacing = Pacing::from_millis(delay_ms);
    }
    if let Some(timeout_secs) = overrides.timeout_secs {
        config.provider.timeout_secs = timeout_secs;
    }
    config
}

fn validate(config: &SendConfig) -> Result<(), AppError> {
    Url::parse(&config.provider.api_base).map_err(|e| {
        AppError::config_error(format!("Invalid API base '{}': {}", config.provider.api_base, e))
    })?;
    if config.provider.language_code.trim().is_empty() {
        return Err(AppError::config_error("language_code must not be empty"));
    }
    if config.provider.timeout_secs == 0 {
        return Err(AppError::config_error("timeout_secs must be greater than zero"));
    }
    if config.batch.sheet.trim().is_empty() {
        return Err(AppError::config_error("sheet must not be empty"));
    }
    Ok(())
}

// --- DTOs for TOML deserialization ---

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigDto {
    #[serde(default)]
    provider: ProviderConfigDto,
    #[serde(default)]
    batch: BatchConfigDto,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProviderConfigDto {
    api_base: Option<String>,
    language_code: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct BatchConfigDto {
    sheet: Option<String>,
    delay_ms: Option<u64>,
}

impl From<ConfigDto> for SendConfig {
    fn from(dto: ConfigDto) -> Self {
        let default_provider = ProviderConfig::default();
        let default_batch = BatchConfig::default();

        SendConfig {
            provider: ProviderConfig {
                api_base: dto.provider.api_base.unwrap_or(default_provider.api_base),
                language_code: dto.provider.language_code.unwrap_or(default_provider.language_code),
                timeout_secs: dto.provider.timeout_secs.unwrap_or_else(default_timeout),
            },
            batch: BatchConfig {
                sheet: dto.batch.sheet.unwrap_or(default_batch.sheet),
                pacing: Pacing::from_millis(dto.batch.delay_ms.unwrap_or_else(default_delay_ms)),
            },
        }
    }
}
