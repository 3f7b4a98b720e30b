//! Summary of stored expenses
//!
//! Read-side aggregation only: a total, a per-category breakdown and a
//! comparison against the budget limit.

use std::collections::HashMap;
use std::fmt;

use crate::models::{Category, ExpenseRecord, Money};

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub amount: Money,
    pub count: usize,
    /// Share of the overall total, 0-100
    pub percentage: f64,
}

/// Aggregate view over a record list
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: Money,
    pub record_count: usize,
    /// Categories with spending, in selector order
    pub breakdown: Vec<CategoryTotal>,
}

impl Summary {
    pub fn from_records(records: &[ExpenseRecord]) -> Self {
        let mut by_category: HashMap<Category, (Money, usize)> = HashMap::new();
        let mut total = Money::zero();

        for record in records {
            let entry = by_category
                .entry(record.category)
                .or_insert((Money::zero(), 0));
            entry.0 += record.amount;
            entry.1 += 1;
            total += record.amount;
        }

        let breakdown = Category::ALL
            .iter()
            .filter_map(|category| {
                by_category.get(category).map(|(amount, count)| CategoryTotal {
                    category: *category,
                    amount: *amount,
                    count: *count,
                    percentage: if total.is_zero() {
                        0.0
                    } else {
                        amount.as_f64() / total.as_f64() * 100.0
                    },
                })
            })
            .collect();

        Self {
            total,
            record_count: records.len(),
            breakdown,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Amount spent in one category (zero if none)
    pub fn amount_for(&self, category: Category) -> Money {
        self.breakdown
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.amount)
            .unwrap_or_default()
    }

    /// Compare the total against a limit
    pub fn budget_status(&self, limit: Money) -> BudgetStatus {
        BudgetStatus::check(self.total, limit)
    }
}

/// Outcome of comparing total spending with the budget limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// No limit is set (limit is zero or negative)
    NoLimit,
    /// Total is at or below the limit
    Within { limit: Money, remaining: Money },
    /// Total is strictly above the limit
    Exceeded { limit: Money, over_by: Money },
}

impl BudgetStatus {
    /// A limit of zero or less never triggers the alert
    pub fn check(total: Money, limit: Money) -> Self {
        if !limit.is_positive() {
            Self::NoLimit
        } else if total > limit {
            Self::Exceeded {
                limit,
                over_by: total - limit,
            }
        } else {
            Self::Within {
                limit,
                remaining: limit - total,
            }
        }
    }

    pub fn is_exceeded(&self) -> bool {
        matches!(self, Self::Exceeded { .. })
    }

    /// Fraction of the limit used, clamped to 0.0..=1.0 (for gauges)
    pub fn ratio(&self, total: Money) -> f64 {
        match self {
            Self::NoLimit => 0.0,
            Self::Within { limit, .. } | Self::Exceeded { limit, .. } => {
                (total.as_f64() / limit.as_f64()).clamp(0.0, 1.0)
            }
        }
    }

    /// Alert line shown under the summary
    pub fn message(&self, currency: &str) -> String {
        match self {
            Self::NoLimit => "No budget limit set.".to_string(),
            Self::Within { remaining, .. } => format!(
                "You are within your budget. {} remaining.",
                remaining.format_with_symbol(currency)
            ),
            Self::Exceeded { limit, over_by } => format!(
                "You have exceeded your budget limit of {} by {}!",
                limit.format_with_symbol(currency),
                over_by.format_with_symbol(currency)
            ),
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLimit => write!(f, "no limit"),
            Self::Within { .. } => write!(f, "within budget"),
            Self::Exceeded { .. } => write!(f, "over budget"),
        }
    }
}
