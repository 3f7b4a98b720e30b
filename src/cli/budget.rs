//! Budget limit CLI commands
//!
//! The limit lives in the settings file and is shared by every store.

use clap::Subcommand;

use crate::config::{paths::ExpensePaths, settings::Settings};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the budget limit
    Set {
        /// Limit amount (e.g. "5000" or "5000.00")
        amount: String,
    },

    /// Show the current budget limit
    Show,

    /// Remove the budget limit
    Clear,
}

pub fn handle_budget_command(
    paths: &ExpensePaths,
    settings: &mut Settings,
    cmd: BudgetCommands,
) -> ExpenseResult<()> {
    match cmd {
        BudgetCommands::Set { amount } => {
            let limit = Money::parse(&amount)
                .map_err(|e| ExpenseError::Validation(format!("Invalid budget limit: {}", e)))?;
            if limit.is_negative() {
                return Err(ExpenseError::Validation(
                    "Budget limit cannot be negative".into(),
                ));
            }

            settings.budget_limit = limit;
            settings.save(paths)?;
            if limit.is_zero() {
                println!("Budget limit cleared.");
            } else {
                println!("Budget limit set to {}.", settings.format_money(limit));
            }
        }
        BudgetCommands::Show => {
            if settings.budget_limit.is_positive() {
                println!("Budget limit: {}", settings.format_money(settings.budget_limit));
            } else {
                println!("No budget limit set.");
            }
        }
        BudgetCommands::Clear => {
            settings.budget_limit = Money::zero();
            settings.save(paths)?;
            println!("Budget limit cleared.");
        }
    }

    Ok(())
}
