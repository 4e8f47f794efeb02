use std::fmt;

use serde::Serialize;

/// One recipient whose message could not be sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    pub recipient: String,
    pub error: String,
}

/// Outcome counts for one batch run. Failures keep sheet order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub success_count: usize,
    pub failure_count: usize,
    pub failures: Vec<FailureRecord>,
}

impl BatchSummary {
    pub fn record_success(&mut self) {
        self.success_count += 1;
    }

    pub fn record_failure(&mut self, recipient: impl Into<String>, error: impl Into<String>) {
        self.failure_count += 1;
        self.failures.push(FailureRecord { recipient: recipient.into(), error: error.into() });
    }

    /// Rows attempted so far.
    pub fn total(&self) -> usize {
        self.success_count + self.failure_count
    }

    pub fn has_failures(&self) -> bool {
        self.failure_count > 0
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Processing Summary:")?;
        writeln!(f, "Successfully sent: {}", self.success_count)?;
        write!(f, "Failed: {}", self.failure_count)?;

        if !self.failures.is_empty() {
            write!(f, "\n\nFailed numbers:")?;
            for failure in &self.failures {
                write!(f, "\n- {}: {}", failure.recipient, failure.error)?;
            }
        }
        Ok(())
    }
}
