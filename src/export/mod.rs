//! Export module for the expense tracker
//!
//! CSV is the only format: the download action writes the same shape the
//! plaintext store keeps on disk.

pub mod csv;

pub use self::csv::{expenses_to_csv_string, read_expenses_csv, write_expenses_csv, HEADERS};

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseRecord;

/// Where a download goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget<'a> {
    Stdout,
    File(&'a Path),
}

impl<'a> ExportTarget<'a> {
    /// `-` means stdout, anything else is a file path
    pub fn from_arg(arg: &'a str) -> Self {
        if arg == "-" {
            Self::Stdout
        } else {
            Self::File(Path::new(arg))
        }
    }
}

/// Write the records as CSV to the target
pub fn export_expenses(records: &[ExpenseRecord], target: &ExportTarget<'_>) -> ExpenseResult<()> {
    match target {
        ExportTarget::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_expenses_csv(records, &mut handle)?;
            handle.flush()?;
        }
        ExportTarget::File(path) => {
            let file = File::create(path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            write_expenses_csv(records, file)?;
        }
    }
    Ok(())
}
