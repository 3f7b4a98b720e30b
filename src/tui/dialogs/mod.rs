//! Dialog modules for the TUI
//!
//! Contains modal dialogs for each action

pub mod budget;
pub mod confirm;
pub mod expense;
pub mod export;
