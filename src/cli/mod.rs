//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod bill;
pub mod export;
pub mod reminder;

pub use bill::{handle_bill_command, BillCommands};
pub use export::{handle_export_command, ExportCommands};
pub use reminder::{handle_reminder_command, ReminderCommands};
