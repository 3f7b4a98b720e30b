//! Expense service
//!
//! Business logic behind the entry form: validate, append, persist, and
//! wipe a store on reset. Every call reloads from the backing store.

use tracing::{info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseRecord, Money};
use crate::storage::Storage;

use super::summary::Summary;

/// Warning shown when the form input is rejected
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid expense details.";

/// Service for logging and resetting expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    audit: AuditLogger,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            audit: AuditLogger::new(storage.paths().audit_log()),
        }
    }

    /// Validate and append a record
    ///
    /// Rejected input leaves the store untouched. The stored name is
    /// trimmed.
    pub fn add(&self, mut record: ExpenseRecord) -> ExpenseResult<ExpenseRecord> {
        record.name = record.name.trim().to_string();
        record.validate().map_err(|e| {
            ExpenseError::Validation(format!("{} {}", INVALID_INPUT_MESSAGE, e))
        })?;

        let mut records = self.storage.load()?;
        records.push(record.clone());
        self.storage.save(&records)?;

        info!(
            identity = %self.storage.identity(),
            name = %record.name,
            amount = %record.amount,
            "expense added"
        );
        // The record is already saved; a failed audit write must not invite a retry
        if let Err(e) = self
            .audit
            .log(&AuditEntry::expense_added(self.storage.identity(), &record))
        {
            warn!(error = %e, "failed to write audit entry for added expense");
        }

        Ok(record)
    }

    /// All records in insertion order
    pub fn list(&self) -> ExpenseResult<Vec<ExpenseRecord>> {
        self.storage.load()
    }

    /// Aggregate the current records
    pub fn summary(&self) -> ExpenseResult<Summary> {
        Ok(Summary::from_records(&self.storage.load()?))
    }

    /// Delete everything stored for the active identity
    ///
    /// Returns whether anything was removed; a second reset is a no-op.
    pub fn reset(&self) -> ExpenseResult<bool> {
        // The count is informational; an unreadable store is still wiped
        let count = match self.storage.load() {
            Ok(records) => records.len(),
            Err(e) => {
                warn!(error = %e, "could not read store before reset");
                0
            }
        };

        let removed = self.storage.clear()?;
        if removed {
            info!(identity = %self.storage.identity(), records = count, "store reset");
            if let Err(e) = self
                .audit
                .log(&AuditEntry::store_reset(self.storage.identity(), count))
            {
                warn!(error = %e, "failed to write audit entry for reset");
            }
        }

        Ok(removed)
    }
}

/// Confirmation shown after a successful add
pub fn added_message(record: &ExpenseRecord, currency: &str) -> String {
    format!(
        "Expense '{}' of {} added successfully!",
        record.name,
        record.amount.format_with_symbol(currency)
    )
}

/// Confirmation shown after a reset
pub fn reset_message(removed: bool) -> &'static str {
    if removed {
        "Expenses have been reset! Start fresh for the new month."
    } else {
        "Nothing to reset."
    }
}

/// Parse the raw amount field of the form
///
/// Unparseable text is a validation failure, same as a non-positive amount.
pub fn parse_amount(raw: &str) -> ExpenseResult<Money> {
    Money::parse(raw)
        .map_err(|e| ExpenseError::Validation(format!("{} {}", INVALID_INPUT_MESSAGE, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::ExpensePaths;
    use crate::models::{Category, FreeTextResolver, Identity, IdentityResolver};
    use crate::storage::{MemoryStore, StoreKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn memory_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::with_store(
            paths,
            Identity::local(),
            StoreKind::Memory,
            Box::new(MemoryStore::new()),
        );
        (temp_dir, storage)
    }

    fn record(name: &str, cents: i64, category: Category) -> ExpenseRecord {
        ExpenseRecord::new(
            name,
            Money::from_cents(cents),
            category,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        )
    }

    #[test]
    fn test_add_appends_once_and_keeps_prior() {
        let (_temp, storage) = memory_storage();
        let service = ExpenseService::new(&storage);

        let first = service.add(record("Lunch", 1250, Category::Food)).unwrap();
        let second = service.add(record("Bus", 300, Category::Transport)).unwrap();

        let records = service.list().unwrap();
        assert_eq!(records, vec![first, second.clone()]);
        assert_eq!(records.iter().filter(|r| **r == second).count(), 1);
    }

    #[test]
    fn test_lunch_bus_scenario() {
        let (_temp, storage) = memory_storage();
        let service = ExpenseService::new(&storage);
        service.add(record("Lunch", 1250, Category::Food)).unwrap();
        service.add(record("Bus", 300, Category::Transport)).unwrap();

        let names: Vec<String> = service.list().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Lunch", "Bus"]);

        let summary = service.summary().unwrap();
        assert_eq!(summary.total, Money::from_cents(1550));
        assert_eq!(summary.amount_for(Category::Food), Money::from_cents(1250));
        assert_eq!(summary.amount_for(Category::Transport), Money::from_cents(300));
        assert_eq!(summary.breakdown.len(), 2);
    }

    #[test]
    fn test_blank_name_rejected_without_state_change() {
        let (_temp, storage) = memory_storage();
        let service = ExpenseService::new(&storage);
        service.add(record("Lunch", 1250, Category::Food)).unwrap();

        let err = service.add(record("   ", 500, Category::Food)).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains(INVALID_INPUT_MESSAGE));
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let (_temp, storage) = memory_storage();
        let service = ExpenseService::new(&storage);

        assert!(service.add(record("Free", 0, Category::Other)).unwrap_err().is_validation());
        assert!(service.add(record("Refund", -100, Category::Other)).unwrap_err().is_validation());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_name_is_trimmed() {
        let (_temp, storage) = memory_storage();
        let service = ExpenseService::new(&storage);

        let stored = service.add(record("  Tea  ", 100, Category::Food)).unwrap();
        assert_eq!(stored.name, "Tea");
    }

    #[test]
    fn test_reset_twice_is_safe() {
        let (_temp, storage) = memory_storage();
        let service = ExpenseService::new(&storage);
        service.add(record("Lunch", 1250, Category::Food)).unwrap();

        assert!(service.reset().unwrap());
        assert!(!service.reset().unwrap());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_add_and_reset_are_audited() {
        let (_temp, storage) = memory_storage();
        let service = ExpenseService::new(&storage);
        service.add(record("Lunch", 1250, Category::Food)).unwrap();
        service.reset().unwrap();
        service.reset().unwrap();

        let entries = AuditLogger::new(storage.paths().audit_log()).read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[1].operation, Operation::Delete);
    }

    #[test]
    fn test_unwritable_audit_log_does_not_fail_add() {
        let (_temp, storage) = memory_storage();
        // A directory where the log file should be makes every append fail
        std::fs::create_dir_all(storage.paths().audit_log()).unwrap();
        let service = ExpenseService::new(&storage);

        let stored = service.add(record("Lunch", 1250, Category::Food)).unwrap();
        assert_eq!(service.list().unwrap(), vec![stored]);
        assert!(service.reset().unwrap());
    }

    #[test]
    fn test_oversized_amount_rejected() {
        let (_temp, storage) = memory_storage();
        let service = ExpenseService::new(&storage);

        assert!(parse_amount("10000000000000.01").unwrap_err().is_validation());
        let err = service
            .add(record("Yacht", i64::MAX, Category::Other))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_encrypted_store_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let alice = FreeTextResolver.resolve("alice").unwrap();
        let storage = Storage::open(paths.clone(), Some(alice)).unwrap();
        let service = ExpenseService::new(&storage);

        assert!(service.list().unwrap().is_empty());
        service.add(record("Lunch", 1250, Category::Food)).unwrap();

        let reopened = Storage::open(paths, Some(FreeTextResolver.resolve("alice").unwrap())).unwrap();
        assert_eq!(ExpenseService::new(&reopened).list().unwrap().len(), 1);
    }

    #[test]
    fn test_messages() {
        let lunch = record("Lunch", 1250, Category::Food);
        assert_eq!(
            added_message(&lunch, "Rs. "),
            "Expense 'Lunch' of Rs. 12.50 added successfully!"
        );
        assert!(reset_message(true).contains("reset"));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5").unwrap(), Money::from_cents(1250));
        assert!(parse_amount("abc").unwrap_err().is_validation());
    }
}
