//! Display formatting for terminal output
//!
//! Plain-text renderings of the expense list and the summary for the CLI.

pub mod expense;
pub mod report;
pub mod summary;

pub use expense::format_expense_table;
pub use summary::format_summary;
