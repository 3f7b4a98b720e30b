//! Expense Tracker - terminal expense logger with a budget alert
//!
//! Expenses are either appended to a shared plaintext CSV file or, when a
//! user name is given, kept in an AES-GCM encrypted file private to that
//! name. The same operations back both the CLI and the TUI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and user settings (currency, budget limit)
//! - `error`: Custom error types
//! - `models`: Expense records, money, categories and identities
//! - `crypto`: Symmetric cipher and per-user key files
//! - `storage`: Plaintext CSV and encrypted record stores
//! - `services`: Adding, listing, summarizing and resetting expenses
//! - `audit`: Append-only audit log
//! - `export`: CSV download
//! - `display`: Plain-text tables for the CLI
//! - `cli`: Command handlers
//! - `tui`: Interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::paths::ExpensePaths;
//! use expense_tracker::models::Identity;
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let storage = Storage::open(paths, None)?;
//! let summary = ExpenseService::new(&storage).summary()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::ExpenseError;
