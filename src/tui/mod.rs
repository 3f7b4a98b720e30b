//! Terminal User Interface module
//!
//! A single-screen dashboard built on ratatui: the expense table, the
//! category breakdown and the budget gauge, with dialogs for adding an
//! expense, setting the limit, downloading CSV and resetting.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
