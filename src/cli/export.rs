//! Export CLI commands

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{BillTrackError, BillTrackResult};
use crate::export::{
    export_bills_csv, export_bills_json, export_reminders_csv, export_reminders_json,
};
use crate::services::{BillService, ReminderService};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export all bills
    Bills {
        /// Output format (csv, json)
        #[arg(short, long, default_value = "csv")]
        format: String,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export all reminder configurations
    Reminders {
        /// Output format (csv, json)
        #[arg(short, long, default_value = "csv")]
        format: String,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

enum ExportFormat {
    Csv,
    Json,
}

fn parse_format(s: &str) -> BillTrackResult<ExportFormat> {
    match s.to_lowercase().as_str() {
        "csv" => Ok(ExportFormat::Csv),
        "json" => Ok(ExportFormat::Json),
        other => Err(BillTrackError::Validation(format!(
            "Invalid format: '{}'. Valid formats: csv, json",
            other
        ))),
    }
}

fn open_output(path: Option<&PathBuf>) -> BillTrackResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                BillTrackError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> BillTrackResult<()> {
    match cmd {
        ExportCommands::Bills { format, output } => {
            let bills = BillService::new(storage).all_bills()?;
            let writer = open_output(output.as_ref())?;
            match parse_format(&format)? {
                ExportFormat::Csv => export_bills_csv(&bills, writer)?,
                ExportFormat::Json => export_bills_json(&bills, writer)?,
            }
            if let Some(path) = output {
                println!("Exported {} bills to {}", bills.len(), path.display());
            }
        }

        ExportCommands::Reminders { format, output } => {
            let reminders = ReminderService::new(storage).list()?;
            let writer = open_output(output.as_ref())?;
            match parse_format(&format)? {
                ExportFormat::Csv => export_reminders_csv(&reminders, writer)?,
                ExportFormat::Json => export_reminders_json(&reminders, writer)?,
            }
            if let Some(path) = output {
                println!("Exported {} reminders to {}", reminders.len(), path.display());
            }
        }
    }

    Ok(())
}
