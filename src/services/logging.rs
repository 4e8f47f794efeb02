//! Console plus per-run log file, installed once at process start.

use std::path::Path;

use chrono::{DateTime, Local};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::AppError;

const LOG_PREFIX: &str = "whatsapp_logs";

/// `whatsapp_logs_YYYYMMDD_HHMM.log` for the given start time.
pub fn log_file_name(started: DateTime<Local>) -> String {
    format!("{}_{}.log", LOG_PREFIX, started.format("%Y%m%d_%H%M"))
}

/// Install the global subscriber.
///
/// Console output goes to stderr. When `log_dir` is set, the same events are
/// written to a fresh log file there; keep the returned guard alive until
/// exit so buffered lines are flushed.
pub fn init_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>, AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let Some(dir) = log_dir else {
        tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .try_init()
            .map_err(|e| AppError::Configuration(format!("Failed to initialize logging: {}", e)))?;
        return Ok(None);
    };

    std::fs::create_dir_all(dir)?;
    let file_name = log_file_name(Local::now());
    let stem = file_name.trim_end_matches(".log");
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(stem)
        .filename_suffix("log")
        .build(dir)
        .map_err(|e| AppError::Configuration(format!("Failed to create log file: {}", e)))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file = fmt::layer().with_writer(writer).with_ansi(false).with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
        .map_err(|e| AppError::Configuration(format!("Failed to initialize logging: {}", e)))?;

    Ok(Some(guard))
}
