//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Data is reloaded from the store after every action.

use tracing::warn;

use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::models::ExpenseRecord;
use crate::services::{ExpenseService, Summary};
use crate::storage::Storage;

use super::dialogs::budget::BudgetFormState;
use super::dialogs::expense::ExpenseFormState;
use super::dialogs::export::ExportFormState;
use super::widgets::{Notification, NotificationQueue};

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    BudgetLimit,
    Export,
    ConfirmReset,
}

/// Main application state
pub struct App<'a> {
    pub storage: &'a Storage,

    pub paths: &'a ExpensePaths,

    /// Settings are owned so the budget dialog can update them
    pub settings: Settings,

    pub should_quit: bool,

    pub active_dialog: ActiveDialog,

    /// Records as of the last reload
    pub records: Vec<ExpenseRecord>,

    /// Summary of `records`
    pub summary: Summary,

    /// Set when the last reload failed; no data is shown while set
    pub load_error: Option<String>,

    /// Selected row in the expense table
    pub selected_index: usize,

    pub status_message: Option<String>,

    pub notifications: NotificationQueue,

    pub expense_form: ExpenseFormState,

    pub budget_form: BudgetFormState,

    pub export_form: ExportFormState,
}

impl<'a> App<'a> {
    pub fn new(storage: &'a Storage, settings: Settings, paths: &'a ExpensePaths) -> Self {
        let mut app = Self {
            storage,
            paths,
            settings,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            records: Vec::new(),
            summary: Summary::from_records(&[]),
            load_error: None,
            selected_index: 0,
            status_message: None,
            notifications: NotificationQueue::new(),
            expense_form: ExpenseFormState::new(),
            budget_form: BudgetFormState::new(),
            export_form: ExportFormState::new(),
        };
        app.reload();
        app
    }

    /// Re-read the store and recompute the summary
    ///
    /// On failure the data is cleared and the error is shown instead.
    pub fn reload(&mut self) {
        match ExpenseService::new(self.storage).list() {
            Ok(records) => {
                self.summary = Summary::from_records(&records);
                self.records = records;
                self.load_error = None;
                if self.selected_index >= self.records.len() {
                    self.selected_index = self.records.len().saturating_sub(1);
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to load expenses");
                self.records.clear();
                self.summary = Summary::from_records(&[]);
                self.selected_index = 0;
                self.load_error = Some(e.to_string());
                self.notify(Notification::error(e.to_string()));
            }
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Open a dialog, resetting its form
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::AddExpense => self.expense_form = ExpenseFormState::new(),
            ActiveDialog::BudgetLimit => {
                self.budget_form = BudgetFormState::with_limit(self.settings.budget_limit)
            }
            ActiveDialog::Export => self.export_form = ExportFormState::new(),
            ActiveDialog::ConfirmReset | ActiveDialog::None => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.records.len() {
            self.selected_index += 1;
        }
    }

    /// Who and where, for the header
    pub fn store_description(&self) -> String {
        format!(
            "{} store, user '{}'",
            self.storage.kind(),
            self.storage.identity()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Identity, Money};
    use crate::storage::{MemoryStore, StoreKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn memory_storage(temp_dir: &TempDir) -> Storage {
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        Storage::with_store(
            paths,
            Identity::local(),
            StoreKind::Memory,
            Box::new(MemoryStore::new()),
        )
    }

    #[test]
    fn test_reload_picks_up_new_records() {
        let temp_dir = TempDir::new().unwrap();
        let storage = memory_storage(&temp_dir);
        let paths = storage.paths().clone();
        let mut app = App::new(&storage, Settings::default(), &paths);
        assert!(app.records.is_empty());

        ExpenseService::new(&storage)
            .add(ExpenseRecord::new(
                "Lunch",
                Money::from_cents(1250),
                Category::Food,
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            ))
            .unwrap();
        app.reload();

        assert_eq!(app.records.len(), 1);
        assert_eq!(app.summary.total, Money::from_cents(1250));
        assert!(app.load_error.is_none());
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let temp_dir = TempDir::new().unwrap();
        let storage = memory_storage(&temp_dir);
        let paths = storage.paths().clone();
        let mut app = App::new(&storage, Settings::default(), &paths);

        app.move_down();
        app.move_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_dialog_lifecycle() {
        let temp_dir = TempDir::new().unwrap();
        let storage = memory_storage(&temp_dir);
        let paths = storage.paths().clone();
        let mut app = App::new(&storage, Settings::default(), &paths);

        assert!(!app.has_dialog());
        app.open_dialog(ActiveDialog::AddExpense);
        assert!(app.has_dialog());
        app.close_dialog();
        assert!(!app.has_dialog());
    }
}
