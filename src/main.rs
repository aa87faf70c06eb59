use anyhow::Result;
use clap::{Parser, Subcommand};

use billtrack::cli::{
    handle_bill_command, handle_export_command, handle_reminder_command, BillCommands,
    ExportCommands, ReminderCommands,
};
use billtrack::config::{paths::BillTrackPaths, settings::Settings};
use billtrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "billtrack",
    version,
    about = "Terminal-based bill tracking and payment reminders",
    long_about = "BillTrack keeps your recurring and one-off bills in one place: \
                  what's upcoming, what's overdue, and what's already paid. \
                  Snooze due dates, mark bills paid, and configure per-bill \
                  reminder preferences from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Bill management commands
    #[command(subcommand)]
    Bill(BillCommands),

    /// Reminder configuration commands
    #[command(subcommand, alias = "rem")]
    Reminder(ReminderCommands),

    /// Export data to CSV or JSON
    #[command(subcommand)]
    Export(ExportCommands),

    /// Initialize storage with a demo bill set
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BillTrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Bill(cmd)) => {
            handle_bill_command(&storage, cmd)?;
        }
        Some(Commands::Reminder(cmd)) => {
            handle_reminder_command(&storage, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing BillTrack at: {}", paths.data_dir().display());
            billtrack::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("A demo bill set has been created.");
            println!("Run 'billtrack bill list' to see it.");
        }
        Some(Commands::Config) => {
            println!("BillTrack Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Date format:        {}", settings.date_format);
            println!(
                "  Default frequency:  {}",
                settings.default_reminder_frequency
            );
        }
        None => {
            println!("BillTrack - Terminal-based bill tracking");
            println!();
            println!("Run 'billtrack --help' for usage information.");
            println!("Run 'billtrack init' to create a demo bill set.");
        }
    }

    Ok(())
}
