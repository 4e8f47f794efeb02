//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::app::config::{ConfigOverrides, resolve_config};
use crate::app::{
    AppContext,
    commands::{check, send},
};
use crate::domain::{Credentials, Pacing};
use crate::ports::{DryRunClient, ThreadSleeper};
use crate::services::{HttpWhatsAppClient, XlsxRecipientSource};

pub use crate::app::commands::check::CheckOutcome;
pub use crate::domain::{AppError, BatchSummary};

/// Inputs for a batch send.
#[derive(Debug, Clone, Default)]
pub struct SendRequest {
    pub file: PathBuf,
    pub config_path: Option<PathBuf>,
    pub overrides: ConfigOverrides,
    /// Log payloads instead of calling the provider.
    pub dry_run: bool,
}

/// Send every row of the workbook and return the batch summary.
///
/// Credentials are read from `META_ACCESS_TOKEN` and `PHONE_NUMBER_ID`, after
/// loading a `.env` file when one exists. Dry runs need no credentials and do
/// not pause between rows.
pub fn send(request: SendRequest) -> Result<BatchSummary, AppError> {
    let mut config = resolve_config(request.config_path.as_deref(), &request.overrides)?;
    let source = XlsxRecipientSource::new(&request.file);

    if request.dry_run {
        config.batch.pacing = Pacing::none();
        let ctx = AppContext::new(DryRunClient::new(&config.provider.language_code), ThreadSleeper);
        return send::execute(&ctx, &source, &config.batch);
    }

    load_dotenv()?;
    let credentials = Credentials::from_lookup(|key| std::env::var(key).ok())?;
    let client = HttpWhatsAppClient::new(credentials, &config.provider)?;
    tracing::debug!(endpoint = %client.endpoint(), "Sending batch");

    let ctx = AppContext::new(client, ThreadSleeper);
    send::execute(&ctx, &source, &config.batch)
}

/// Validate a workbook sheet without sending.
pub fn check(file: &Path, sheet: &str) -> Result<CheckOutcome, AppError> {
    let source = XlsxRecipientSource::new(file);
    check::execute(&source, sheet)
}

fn load_dotenv() -> Result<(), AppError> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(AppError::config_error(format!("Failed to load .env file: {}", e))),
    }
}
