//! `config` command: where things live and what is active

use crate::config::{paths::ExpensePaths, settings::Settings};
use crate::storage::Storage;

pub fn handle_config_command(paths: &ExpensePaths, settings: &Settings, storage: &Storage) {
    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!("Audit log:       {}", paths.audit_log().display());
    println!();
    println!("Active store:    {} ({})", storage.kind(), storage.location());
    println!("Identity:        {}", storage.identity());
    println!();
    println!("Settings:");
    println!("  Currency:      {:?}", settings.currency_symbol);
    if settings.budget_limit.is_positive() {
        println!("  Budget limit:  {}", settings.format_money(settings.budget_limit));
    } else {
        println!("  Budget limit:  none");
    }
    println!("  Date format:   {}", settings.date_format);
    if let Some(identity) = &settings.default_identity {
        println!("  Default user:  {}", identity);
    }
}
