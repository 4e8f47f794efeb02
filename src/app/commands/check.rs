//! Validate a recipient sheet without sending anything.

use crate::domain::AppError;
use crate::ports::RecipientSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub recipients: usize,
    pub parameter_columns: Vec<String>,
    /// Rows whose phone number has no digits at all.
    pub unreachable: Vec<String>,
}

pub fn execute(source: &impl RecipientSource, sheet: &str) -> Result<CheckOutcome, AppError> {
    let table = source.load(sheet)?;
    let recipients = table.recipients()?;

    let unreachable = recipients
        .iter()
        .filter(|row| crate::domain::normalize_phone(&row.phone_number).is_empty())
        .map(|row| row.phone_number.clone())
        .collect();

    Ok(CheckOutcome {
        recipients: recipients.len(),
        parameter_columns: table.parameter_columns().into_iter().map(str::to_string).collect(),
        unreachable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemorySource;

    #[test]
    fn reports_rows_and_parameter_columns() {
        let source = InMemorySource::from_rows(
            &["phone_number", "template_name", "name", "code"],
            &[&["+1 555", "welcome", "Ann", "C1"], &["n/a", "welcome", "Bo", ""]],
        );

        let outcome = execute(&source, "Contacts").unwrap();

        assert_eq!(outcome.recipients, 2);
        assert_eq!(outcome.parameter_columns, vec!["name", "code"]);
        assert_eq!(outcome.unreachable, vec!["n/a"]);
        assert_eq!(*source.requested.lock().unwrap(), vec!["Contacts"]);
    }

    #[test]
    fn missing_columns_fail() {
        let source = InMemorySource::from_rows(&["template_name"], &[]);
        assert!(matches!(execute(&source, "Sheet1"), Err(AppError::MissingColumns { .. })));
    }
}
