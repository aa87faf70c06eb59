//! Reminder CLI commands

use clap::Subcommand;

use crate::display::format_reminder_list;
use crate::error::{BillTrackError, BillTrackResult};
use crate::models::{BillId, NotificationChannel, ReminderFrequency, ReminderId};
use crate::services::ReminderService;
use crate::storage::Storage;

use super::bill::parse_date;

/// Reminder subcommands
#[derive(Subcommand)]
pub enum ReminderCommands {
    /// Create or update the reminder configuration for a bill
    Set {
        /// Bill id
        bill_id: BillId,
        /// Reminder frequency (daily, weekly, monthly, quarterly, yearly)
        #[arg(short, long, default_value = "monthly")]
        frequency: String,
        /// Date reminders start (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,
        /// Custom message
        #[arg(short, long)]
        message: Option<String>,
        /// Delivery channel (email, sms, push)
        #[arg(short, long, default_value = "email")]
        channel: String,
    },
    /// Show a bill's reminder configuration
    Show {
        /// Bill id
        bill_id: BillId,
    },
    /// List all reminder configurations
    List,
    /// Delete a reminder configuration
    Delete {
        /// Reminder id
        id: ReminderId,
    },
}

/// Handle a reminder command
pub fn handle_reminder_command(storage: &Storage, cmd: ReminderCommands) -> BillTrackResult<()> {
    let service = ReminderService::new(storage);

    match cmd {
        ReminderCommands::Set {
            bill_id,
            frequency,
            start,
            message,
            channel,
        } => {
            let frequency = ReminderFrequency::parse(&frequency).ok_or_else(|| {
                BillTrackError::Validation(format!(
                    "Invalid frequency: '{}'. Valid frequencies: daily, weekly, monthly, \
                     quarterly, yearly",
                    frequency
                ))
            })?;
            let channel = NotificationChannel::parse(&channel).ok_or_else(|| {
                BillTrackError::Validation(format!(
                    "Invalid channel: '{}'. Valid channels: email, sms, push",
                    channel
                ))
            })?;

            let reminder = service.set_for_bill(
                bill_id,
                frequency,
                parse_date(&start)?,
                message.as_deref().unwrap_or(""),
                channel,
            )?;
            println!("Reminder #{} set for bill #{}: {}", reminder.id, bill_id, reminder);
        }

        ReminderCommands::Show { bill_id } => match service.get_by_bill(bill_id)? {
            Some(reminder) => print!("{}", format_reminder_list(std::slice::from_ref(&reminder))),
            None => println!("Bill #{} has no reminder configured.", bill_id),
        },

        ReminderCommands::List => {
            let reminders = service.list()?;
            print!("{}", format_reminder_list(&reminders));
        }

        ReminderCommands::Delete { id } => {
            service.delete(id)?;
            println!("Deleted reminder #{}", id);
        }
    }

    Ok(())
}
