//! Expense CLI commands
//!
//! The form actions as one-shot commands: add, list, summary and reset.

use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_expense_table, format_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, ExpenseRecord, Money};
use crate::services::{added_message, parse_amount, reset_message, ExpenseService};
use crate::storage::Storage;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// What the money was spent on
    pub name: String,

    /// Amount spent (e.g. "12.50")
    #[arg(allow_negative_numbers = true)]
    pub amount: String,

    /// Category (Food, Transport, Shopping, Bills, Entertainment, Other)
    #[arg(short, long, default_value = "Food")]
    pub category: Category,

    /// Date of the expense (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

pub fn handle_add_command(
    storage: &Storage,
    settings: &Settings,
    args: AddArgs,
) -> ExpenseResult<()> {
    let amount = parse_amount(&args.amount)?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let record = ExpenseRecord::new(args.name, amount, args.category, date);

    let service = ExpenseService::new(storage);
    let stored = service.add(record)?;
    println!("{}", added_message(&stored, &settings.currency_symbol));

    Ok(())
}

pub fn handle_list_command(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let records = ExpenseService::new(storage).list()?;
    print!("{}", format_expense_table(&records, settings));
    Ok(())
}

/// Print the summary; `limit` overrides the saved budget limit
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    limit: Option<String>,
) -> ExpenseResult<()> {
    let limit = match limit {
        Some(raw) => Money::parse(&raw)
            .map_err(|e| ExpenseError::Validation(format!("Invalid budget limit: {}", e)))?,
        None => settings.budget_limit,
    };

    let summary = ExpenseService::new(storage).summary()?;
    print!("{}", format_summary(&summary, limit, &settings.currency_symbol));
    Ok(())
}

/// Wipe the active store, asking first unless `yes` is set
pub fn handle_reset_command(storage: &Storage, yes: bool) -> ExpenseResult<()> {
    if !yes {
        let prompt = format!(
            "Delete all expenses for '{}' ({})? This cannot be undone. [y/N] ",
            storage.identity(),
            storage.location()
        );
        let stdin = io::stdin();
        if !confirm(&prompt, &mut stdin.lock())? {
            println!("Reset cancelled.");
            return Ok(());
        }
    }

    let removed = ExpenseService::new(storage).reset()?;
    println!("{}", reset_message(removed));
    Ok(())
}

fn confirm<R: BufRead>(prompt: &str, input: &mut R) -> ExpenseResult<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
