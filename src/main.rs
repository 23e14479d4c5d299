use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ledger::cli::{handle_ledger_command, LedgerCommand, Shell};
use ledger::config::{LedgerPaths, Settings};
use ledger::display::DisplayOptions;
use ledger::input::InputCollector;
use ledger::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Terminal-based personal income and expense ledger",
    long_about = "Records dated income and expense transactions in a CSV file, \
                  shows totals for any date range, and charts daily and monthly \
                  summaries. Run without a command for the interactive menu."
)]
struct Cli {
    /// Ledger file to use instead of the configured one
    #[arg(long, global = true, env = "LEDGER_STORE")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu
    #[command(alias = "menu")]
    Shell,

    #[command(flatten)]
    Ledger(LedgerCommand),

    /// Create the ledger file and save default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let display = DisplayOptions::from_settings(&settings);

    let store = LedgerStore::new(settings.store_config(&paths, cli.store));

    match cli.command {
        None | Some(Commands::Shell) => {
            let stdin = io::stdin();
            let input = InputCollector::new(stdin.lock(), io::stdout())
                .with_date_format(settings.date_format.clone());
            Shell::new(store, input, display).run()?;
        }
        Some(Commands::Ledger(cmd)) => {
            let today = Local::now().date_naive();
            handle_ledger_command(&store, &display, today, cmd, &mut io::stdout())?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            let created = store.initialize()?;
            if created {
                println!("Created ledger at: {}", store.path().display());
            } else {
                println!("Ledger already exists at: {}", store.path().display());
            }
            println!("Settings saved to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Ledger Configuration");
            println!("====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Ledger file:      {}", store.path().display());
            println!();
            println!("Settings:");
            println!("  Date format:     {}", settings.date_format);
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
    }

    Ok(())
}
