//! CLI command handlers
//!
//! This module bridges the clap argument parsing with the service layer.

pub mod audit;
pub mod budget;
pub mod config;
pub mod expense;
pub mod export;

pub use audit::handle_audit_command;
pub use budget::{handle_budget_command, BudgetCommands};
pub use config::handle_config_command;
pub use expense::{
    handle_add_command, handle_list_command, handle_reset_command, handle_summary_command,
    AddArgs,
};
pub use export::{handle_export_command, DEFAULT_EXPORT_FILE};
