use crate::domain::{AppError, Table};

/// Port for loading the recipient table.
pub trait RecipientSource {
    /// Load the whole named sheet into memory.
    fn load(&self, sheet: &str) -> Result<Table, AppError>;
}
