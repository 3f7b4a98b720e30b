//! CLI command for downloading expenses as CSV

use tracing::info;

use crate::error::ExpenseResult;
use crate::export::{export_expenses, ExportTarget};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Default download file name
pub const DEFAULT_EXPORT_FILE: &str = "expenses.csv";

/// Write the active store's records to `output` (`-` for stdout)
pub fn handle_export_command(storage: &Storage, output: &str) -> ExpenseResult<()> {
    let records = ExpenseService::new(storage).list()?;
    let target = ExportTarget::from_arg(output);
    export_expenses(&records, &target)?;

    if let ExportTarget::File(path) = target {
        info!(path = %path.display(), count = records.len(), "exported expenses");
        println!("Exported {} expense(s) to {}", records.len(), path.display());
    }

    Ok(())
}
