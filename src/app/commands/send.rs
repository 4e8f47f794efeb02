//! Batch send: one template message per spreadsheet row.

use crate::app::AppContext;
use crate::domain::{AppError, BatchConfig, BatchSummary};
use crate::ports::{MessageClient, RecipientSource, Sleeper};

/// Send one message per recipient row and summarize the outcome.
///
/// Fails before any send when the sheet cannot be loaded or lacks a required
/// column. Individual send failures are recorded in the summary and the batch
/// moves on to the next row.
pub fn execute<C, S>(
    ctx: &AppContext<C, S>,
    source: &impl RecipientSource,
    batch: &BatchConfig,
) -> Result<BatchSummary, AppError>
where
    C: MessageClient,
    S: Sleeper,
{
    let table = source.load(&batch.sheet)?;
    tracing::debug!("Loaded {} row(s) from sheet '{}'", table.len(), batch.sheet);
    let recipients = table.recipients()?;
    if table.is_empty() {
        tracing::warn!("Sheet '{}' has no recipient rows", batch.sheet);
    }

    let total = recipients.len();
    let mut summary = BatchSummary::default();

    for (index, row) in recipients.iter().enumerate() {
        let result =
            ctx.client().send_template(&row.phone_number, &row.template_name, &row.parameters);
        match result {
            Ok(_) => {
                summary.record_success();
                tracing::info!("Progress: {}/{}", index + 1, total);
            }
            Err(err) => {
                tracing::error!("Failed for {}: {}", row.phone_number, err);
                summary.record_failure(row.phone_number.clone(), err.to_string());
            }
        }

        if index + 1 < total && !batch.pacing.is_none() {
            ctx.sleeper().sleep(batch.pacing.delay());
        }
    }

    Ok(summary)
}
