//! Send command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::app::api::{self, SendRequest};
use crate::app::config::ConfigOverrides;
use crate::domain::AppError;
use crate::services::logging;

/// Exit status when `--strict` is set and at least one row failed.
const PARTIAL_FAILURE_EXIT: i32 = 2;

#[derive(Args)]
pub struct SendArgs {
    /// Workbook path (.xlsx, .xls, .ods)
    file: PathBuf,
    /// Sheet holding the recipients [default: Sheet1]
    #[arg(long)]
    sheet: Option<String>,
    /// TOML file with [provider] and [batch] settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Override the Graph API base URL
    #[arg(long)]
    api_base: Option<String>,
    /// Pause between messages in milliseconds [default: 1000]
    #[arg(long)]
    delay_ms: Option<u64>,
    /// HTTP timeout in seconds [default: 30]
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Log the payloads without calling the provider
    #[arg(long)]
    dry_run: bool,
    /// Summary output format
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    format: SummaryFormat,
    /// Exit with status 2 when any message failed
    #[arg(long)]
    strict: bool,
    /// Directory for the per-run log file
    #[arg(long, default_value = ".", conflicts_with = "no_log_file")]
    log_dir: PathBuf,
    /// Log to the console only
    #[arg(long)]
    no_log_file: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SummaryFormat {
    Text,
    Json,
}

pub fn run_send(args: SendArgs) -> Result<i32, AppError> {
    let log_dir = (!args.no_log_file).then_some(args.log_dir.as_path());
    let _guard = logging::init_logging(log_dir)?;

    let request = SendRequest {
        file: args.file.clone(),
        config_path: args.config.clone(),
        overrides: ConfigOverrides {
            sheet: args.sheet.clone(),
            api_base: args.api_base.clone(),
            delay_ms: args.delay_ms,
            timeout_secs: args.timeout_secs,
        },
        dry_run: args.dry_run,
    };

    let summary = api::send(request).inspect_err(|e| tracing::error!("{}", e))?;

    match args.format {
        SummaryFormat::Text => println!("\n{}", summary),
        SummaryFormat::Json => {
            let json = serde_json::to_string_pretty(&summary).map_err(|e| {
                AppError::config_error(format!("Failed to serialize summary: {}", e))
            })?;
            println!("{}", json);
        }
    }

    Ok(if args.strict && summary.has_failures() { PARTIAL_FAILURE_EXIT } else { 0 })
}
