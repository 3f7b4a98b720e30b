//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: expense
//! records, their categories, money amounts and the identity that namespaces
//! a user's store.

pub mod category;
pub mod expense;
pub mod identity;
pub mod money;

pub use category::{Category, CategoryParseError};
pub use expense::{ExpenseRecord, ExpenseValidationError};
pub use identity::{FreeTextResolver, Identity, IdentityResolver};
pub use money::{Money, MoneyParseError};
