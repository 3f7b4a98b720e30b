//! Summary formatting: total, category bars and the budget alert

use crate::models::Money;
use crate::services::{BudgetStatus, Summary};

use super::report::{format_bar, format_percentage, separator};

const BAR_WIDTH: usize = 24;

pub fn format_summary(summary: &Summary, limit: Money, currency: &str) -> String {
    let mut output = String::new();

    output.push_str("Expense Summary\n");
    output.push_str(&separator(48));
    output.push('\n');
    output.push_str(&format!(
        "Total spent: {} ({} {})\n",
        summary.total.format_with_symbol(currency),
        summary.record_count,
        if summary.record_count == 1 { "expense" } else { "expenses" }
    ));

    if summary.is_empty() {
        output.push_str("No expenses recorded yet.\n");
    } else {
        output.push('\n');
        let max = summary
            .breakdown
            .iter()
            .map(|c| c.amount.as_f64())
            .fold(0.0, f64::max);

        for item in &summary.breakdown {
            output.push_str(&format!(
                "{:<14} {} {:>14} {:>5}\n",
                item.category.name(),
                format_bar(item.amount.as_f64(), max, BAR_WIDTH),
                item.amount.format_with_symbol(currency),
                format_percentage(item.percentage)
            ));
        }
    }

    output.push('\n');
    let status = BudgetStatus::check(summary.total, limit);
    if status.is_exceeded() {
        output.push_str("WARNING: ");
    }
    output.push_str(&status.message(currency));
    output.push('\n');

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseRecord};
    use chrono::NaiveDate;

    fn summary() -> Summary {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        Summary::from_records(&[
            ExpenseRecord::new("Lunch", Money::from_cents(1250), Category::Food, date),
            ExpenseRecord::new("Bus", Money::from_cents(300), Category::Transport, date),
        ])
    }

    #[test]
    fn test_summary_lists_categories() {
        let text = format_summary(&summary(), Money::zero(), "Rs. ");
        assert!(text.contains("Total spent: Rs. 15.50 (2 expenses)"));
        assert!(text.contains("Food"));
        assert!(text.contains("Transport"));
        assert!(!text.contains("Bills"));
        assert!(text.contains("No budget limit set."));
    }

    #[test]
    fn test_summary_warns_over_budget() {
        let text = format_summary(&summary(), Money::from_cents(1000), "Rs. ");
        assert!(text.contains("WARNING: You have exceeded your budget limit of Rs. 10.00"));
    }

    #[test]
    fn test_summary_within_budget() {
        let text = format_summary(&summary(), Money::from_cents(2000), "Rs. ");
        assert!(text.contains("within your budget"));
        assert!(!text.contains("WARNING"));
    }
}
