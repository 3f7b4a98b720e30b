use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use expense_tracker::cli::{
    handle_add_command, handle_audit_command, handle_budget_command, handle_config_command,
    handle_export_command, handle_list_command, handle_reset_command, handle_summary_command,
    AddArgs, BudgetCommands, DEFAULT_EXPORT_FILE,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::models::{FreeTextResolver, IdentityResolver};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Log daily expenses and watch a monthly budget",
    long_about = "Expense Tracker logs what you spend, breaks it down by category \
                  and warns you when the total passes your budget limit. Without \
                  --user expenses go to a shared plaintext CSV file; with --user \
                  they are kept in an encrypted file private to that name."
)]
struct Cli {
    /// Keep expenses in the encrypted store for this user
    #[arg(short, long, global = true, env = "EXPENSE_USER")]
    user: Option<String>,

    /// Override the data directory
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Record an expense
    Add(AddArgs),

    /// List recorded expenses
    #[command(alias = "ls")]
    List,

    /// Show the total, category breakdown and budget status
    Summary {
        /// Budget limit for this run (overrides the saved limit)
        #[arg(short, long)]
        limit: Option<String>,
    },

    /// Budget limit commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Download expenses as CSV
    #[command(alias = "download")]
    Export {
        /// Output file, or "-" for stdout
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
        output: String,
    },

    /// Delete every expense in the active store
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "expense_tracker=debug" } else { "warn" })
    });

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log lines would corrupt the alternate screen
    if !matches!(cli.command, Some(Commands::Tui)) {
        init_tracing(cli.verbose);
    }

    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    paths.ensure_directories()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let identity = match cli.user.as_deref().or(settings.default_identity.as_deref()) {
        Some(raw) => Some(FreeTextResolver.resolve(raw)?),
        None => None,
    };
    let storage = Storage::open(paths.clone(), identity)?;

    match cli.command {
        Some(Commands::Tui) => {
            expense_tracker::tui::run_tui(&storage, settings, &paths)?;
        }
        Some(Commands::Add(args)) => {
            handle_add_command(&storage, &settings, args)?;
        }
        Some(Commands::List) => {
            handle_list_command(&storage, &settings)?;
        }
        Some(Commands::Summary { limit }) => {
            handle_summary_command(&storage, &settings, limit)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&paths, &mut settings, cmd)?;
        }
        Some(Commands::Export { output }) => {
            handle_export_command(&storage, &output)?;
        }
        Some(Commands::Reset { yes }) => {
            handle_reset_command(&storage, yes)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&paths, limit)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&paths, &settings, &storage);
        }
        None => {
            println!("Expense Tracker - log daily expenses against a budget");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
