use std::sync::Mutex;

use crate::domain::{AppError, Cell, Table};
use crate::ports::RecipientSource;

/// Serves a fixed table and remembers which sheets were requested.
pub struct InMemorySource {
    table: Table,
    pub requested: Mutex<Vec<String>>,
}

impl InMemorySource {
    pub fn new(table: Table) -> Self {
        Self { table, requested: Mutex::new(vec![]) }
    }

    /// Build a table from string cells; empty strings become [`Cell::Empty`].
    pub fn from_rows(headers: &[&str], rows: &[&[&str]]) -> Self {
        let headers = headers.iter().map(|h| h.to_string()).collect();
        let rows = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|v| if v.is_empty() { Cell::Empty } else { Cell::Text(v.to_string()) })
                    .collect()
            })
            .collect();
        Self::new(Table::new(headers, rows))
    }
}

impl RecipientSource for InMemorySource {
    fn load(&self, sheet: &str) -> Result<Table, AppError> {
        self.requested.lock().unwrap().push(sheet.to_string());
        Ok(self.table.clone())
    }
}
