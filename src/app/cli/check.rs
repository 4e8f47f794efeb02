//! Check command implementation.

use std::path::Path;

use crate::domain::AppError;

pub fn run_check(file: &Path, sheet: &str) -> Result<(), AppError> {
    let outcome = crate::app::api::check(file, sheet)?;

    println!("✅ {} recipient(s) ready in sheet '{}'", outcome.recipients, sheet);
    if outcome.parameter_columns.is_empty() {
        println!("  No template parameter columns");
    } else {
        println!("  Template parameters: {}", outcome.parameter_columns.join(", "));
    }
    if !outcome.unreachable.is_empty() {
        println!("⚠️  {} phone number(s) contain no digits:", outcome.unreachable.len());
        for phone in &outcome.unreachable {
            println!("  • {:?}", phone);
        }
    }
    Ok(())
}
