//! Expense record model
//!
//! An expense is a single line item entered through the form. Records are
//! append-only: once stored they are never edited, only wiped by a reset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// A single expense line item
///
/// Field names serialize in PascalCase (`Name`, `Amount`, `Category`, `Date`)
/// to match the CSV header and the encrypted JSON payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExpenseRecord {
    /// What the money was spent on
    pub name: String,

    /// Amount spent (always positive for records entered through the form)
    pub amount: Money,

    /// Spending category
    pub category: Category,

    /// Calendar date of the expense
    pub date: NaiveDate,
}

impl ExpenseRecord {
    /// Create a new expense record
    pub fn new(name: impl Into<String>, amount: Money, category: Category, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            amount,
            category,
            date,
        }
    }

    /// Validate the record against the form rules
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if !self.amount.is_in_range() {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) {}",
            self.date.format("%Y-%m-%d"),
            self.name,
            self.category,
            self.amount
        )
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount is too large (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::money::MAX_CENTS;

    fn lunch() -> ExpenseRecord {
        ExpenseRecord::new(
            "Lunch",
            Money::from_cents(1250),
            Category::Food,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        )
    }

    #[test]
    fn test_validate_ok() {
        assert!(lunch().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_name() {
        let mut record = lunch();
        record.name = "   ".into();
        assert_eq!(record.validate(), Err(ExpenseValidationError::EmptyName));
    }

    #[test]
    fn test_validate_amount() {
        let mut record = lunch();
        record.amount = Money::zero();
        assert!(matches!(
            record.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));

        record.amount = Money::from_cents(-100);
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_validate_amount_bound() {
        let mut record = lunch();
        record.amount = Money::from_cents(MAX_CENTS);
        assert!(record.validate().is_ok());

        record.amount = Money::from_cents(MAX_CENTS + 1);
        assert!(matches!(
            record.validate(),
            Err(ExpenseValidationError::AmountTooLarge(_))
        ));
    }

    #[test]
    fn test_largest_amount_survives_json() {
        let mut record = lunch();
        record.amount = Money::from_cents(MAX_CENTS - 7);
        let json = serde_json::to_string(&record).unwrap();
        let back: ExpenseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(lunch()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Name": "Lunch",
                "Amount": 12.5,
                "Category": "Food",
                "Date": "2024-01-05"
            })
        );
    }
}
