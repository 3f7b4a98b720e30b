//! CLI commands for viewing the audit log

use crate::audit::AuditLogger;
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(paths: &ExpensePaths, limit: usize) -> ExpenseResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
