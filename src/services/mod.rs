//! Service layer for the expense tracker
//!
//! Business logic on top of the storage layer: validation, appending,
//! resetting and summarizing.

pub mod expense;
pub mod summary;

pub use expense::{
    added_message, parse_amount, reset_message, ExpenseService, INVALID_INPUT_MESSAGE,
};
pub use summary::{BudgetStatus, CategoryTotal, Summary};
