//! Expense table formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::settings::Settings;
use crate::models::ExpenseRecord;

use super::report::truncate;

const NAME_WIDTH: usize = 32;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
}

/// Render records as a table, in stored order
pub fn format_expense_table(records: &[ExpenseRecord], settings: &Settings) -> String {
    if records.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let rows = records.iter().enumerate().map(|(i, record)| ExpenseRow {
        index: i + 1,
        name: truncate(&record.name, NAME_WIDTH),
        amount: settings.format_money(record.amount),
        category: record.category.to_string(),
        date: settings.format_date(record.date),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()));

    format!("{}\n", table)
}
