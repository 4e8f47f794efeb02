//! Spreadsheet recipient source backed by calamine.

use std::path::PathBuf;

use calamine::{Data, DataType, Range, Reader, open_workbook_auto};

use crate::domain::{AppError, Cell, Table};
use crate::ports::RecipientSource;

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reads recipients from an `.xlsx`, `.xls`, or `.ods` workbook.
#[derive(Debug, Clone)]
pub struct XlsxRecipientSource {
    path: PathBuf,
}

impl XlsxRecipientSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn workbook_error(&self, details: impl ToString) -> AppError {
        AppError::Workbook { path: self.path.display().to_string(), details: details.to_string() }
    }
}

impl RecipientSource for XlsxRecipientSource {
    fn load(&self, sheet: &str) -> Result<Table, AppError> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| self.workbook_error(e))?;

        let sheet_names = workbook.sheet_names();
        if !sheet_names.iter().any(|name| name == sheet) {
            return Err(AppError::SheetNotFound {
                sheet: sheet.to_string(),
                available: sheet_names.join(", "),
            });
        }

        let range = workbook.worksheet_range(sheet).map_err(|e| self.workbook_error(e))?;
        Ok(table_from_range(&range))
    }
}

/// Convert a sheet range into a [`Table`].
///
/// The first non-blank row is the header row; fully blank rows are skipped.
pub(crate) fn table_from_range(range: &Range<Data>) -> Table {
    let mut rows = range.rows().filter(|row| !row.iter().all(is_blank));

    let Some(header_row) = rows.next() else {
        return Table::default();
    };

    let headers = header_row
        .iter()
        .enumerate()
        .map(|(idx, data)| {
            let name = data.to_string().trim().to_string();
            if name.is_empty() { format!("column_{}", idx + 1) } else { name }
        })
        .collect();

    let data_rows = rows.map(|row| row.iter().map(cell_from_data).collect()).collect();

    Table::new(headers, data_rows)
}

fn is_blank(data: &Data) -> bool {
    match data {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        // Formula errors such as #N/A carry no usable value.
        Data::Error(_) => Cell::Empty,
        Data::DateTime(dt) if !dt.is_duration() => match data.as_datetime() {
            Some(ts) => Cell::Text(ts.format(DATE_TIME_FORMAT).to_string()),
            None => Cell::Text(data.to_string()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        other => Cell::Text(other.to_string()),
    }
}
