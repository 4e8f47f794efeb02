//! wabulk: send WhatsApp template messages to recipients listed in a spreadsheet.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{CheckOutcome, SendRequest, check, send};
pub use app::config::ConfigOverrides;
pub use domain::{AppError, BatchSummary, Credentials, FailureRecord, SendError};
