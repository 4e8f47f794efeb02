//! In-memory recipient table and the rows derived from it.

use std::fmt;

use serde::Serialize;

use super::AppError;

pub const PHONE_COLUMN: &str = "phone_number";
pub const TEMPLATE_COLUMN: &str = "template_name";
pub const REQUIRED_COLUMNS: [&str; 2] = [PHONE_COLUMN, TEMPLATE_COLUMN];

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Cell {
    /// Whether the cell holds no usable value.
    pub fn is_missing(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(text) => text.trim().is_empty(),
            Cell::Float(value) => value.is_nan(),
            Cell::Int(_) | Cell::Bool(_) => false,
        }
    }

    /// Textual form used in template parameters and phone numbers.
    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(text) => f.write_str(text),
            Cell::Int(value) => write!(f, "{}", value),
            Cell::Float(value) if is_integral(*value) => write!(f, "{}", *value as i64),
            Cell::Float(value) => write!(f, "{}", value),
            Cell::Bool(value) => write!(f, "{}", value),
        }
    }
}

// Spreadsheets store phone numbers and counts as floats.
fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15
}

/// Ordered column-name to value mapping supplied as template body parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Parameters(Vec<(String, String)>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(_, value)| value.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// One message to send: raw phone, template, and its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientRow {
    pub phone_number: String,
    pub template_name: String,
    pub parameters: Parameters,
}

/// Header row plus data rows, as loaded from a sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Columns that become template parameters, in sheet order.
    pub fn parameter_columns(&self) -> Vec<&str> {
        self.headers
            .iter()
            .map(String::as_str)
            .filter(|header| !REQUIRED_COLUMNS.contains(header))
            .collect()
    }

    /// Validate the required columns and turn every data row into a [`RecipientRow`].
    ///
    /// Fails before producing any row when a required column is absent. Cells
    /// past the end of a short row are treated as empty.
    pub fn recipients(&self) -> Result<Vec<RecipientRow>, AppError> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|required| !self.headers.iter().any(|h| h.as_str() == **required))
            .map(|required| required.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(AppError::MissingColumns { missing });
        }

        let phone_idx = self.column_index(PHONE_COLUMN);
        let template_idx = self.column_index(TEMPLATE_COLUMN);

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let cell = |idx: Option<usize>| {
                    idx.and_then(|i| row.get(i)).map(Cell::as_text).unwrap_or_default()
                };

                let parameters = self
                    .headers
                    .iter()
                    .enumerate()
                    .filter(|(_, header)| !REQUIRED_COLUMNS.contains(&header.as_str()))
                    .filter_map(|(i, header)| {
                        row.get(i)
                            .filter(|c| !c.is_missing())
                            .map(|c| (header.clone(), c.as_text()))
                    })
                    .collect();

                RecipientRow {
                    phone_number: cell(phone_idx),
                    template_name: cell(template_idx),
                    parameters,
                }
            })
            .collect();

        Ok(rows)
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn text(value: &str) -> Cell {
        Cell::Text(value.to_string())
    }

    #[test]
    fn integral_floats_render_without_fraction() {
        assert_eq!(Cell::Float(15551234567.0).as_text(), "15551234567");
        assert_eq!(Cell::Float(2.5).as_text(), "2.5");
        assert_eq!(Cell::Int(42).as_text(), "42");
        assert_eq!(Cell::Empty.as_text(), "");
    }

    #[test]
    fn text_keeps_surrounding_whitespace() {
        assert_eq!(text("  Dr. Ann ").as_text(), "  Dr. Ann ");
        assert!(!text("  Dr. Ann ").is_missing());
    }

    #[test]
    fn missing_cells() {
        assert!(Cell::Empty.is_missing());
        assert!(text("   ").is_missing());
        assert!(Cell::Float(f64::NAN).is_missing());
        assert!(!Cell::Int(0).is_missing());
        assert!(!Cell::Bool(false).is_missing());
    }

    #[test]
    fn missing_template_column_is_rejected() {
        let table =
            Table::new(headers(&["phone_number", "name"]), vec![vec![text("1"), text("Ann")]]);
        match table.recipients() {
            Err(AppError::MissingColumns { missing }) => assert_eq!(missing, vec!["template_name"]),
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn missing_both_columns_lists_both_in_order() {
        let table = Table::new(headers(&["name"]), vec![]);
        match table.recipients() {
            Err(AppError::MissingColumns { missing }) => {
                assert_eq!(missing, vec!["phone_number", "template_name"])
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn parameters_skip_required_and_missing_cells_and_keep_order() {
        let table = Table::new(
            headers(&["name", "phone_number", "code", "template_name", "city"]),
            vec![vec![
                text("Ann"),
                Cell::Float(15551234567.0),
                Cell::Empty,
                text("welcome"),
                text("Oslo"),
            ]],
        );
        let rows = table.recipients().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].phone_number, "15551234567");
        assert_eq!(rows[0].template_name, "welcome");
        assert_eq!(rows[0].parameters.names().collect::<Vec<_>>(), vec!["name", "city"]);
        assert_eq!(rows[0].parameters.values().collect::<Vec<_>>(), vec!["Ann", "Oslo"]);
    }

    #[test]
    fn short_rows_are_padded_with_empty_cells() {
        let table = Table::new(
            headers(&["phone_number", "template_name", "name"]),
            vec![vec![text("123")]],
        );
        let rows = table.recipients().unwrap();
        assert_eq!(rows[0].template_name, "");
        assert!(rows[0].parameters.is_empty());
    }

    #[test]
    fn headers_only_yields_no_rows() {
        let table = Table::new(headers(&["phone_number", "template_name"]), vec![]);
        assert!(table.recipients().unwrap().is_empty());
    }

    #[test]
    fn parameter_columns_exclude_required() {
        let table = Table::new(headers(&["phone_number", "name", "template_name", "code"]), vec![]);
        assert_eq!(table.parameter_columns(), vec!["name", "code"]);
    }
}
