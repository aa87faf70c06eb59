//! CSV export functionality
//!
//! Exports bills and reminder configurations to CSV.

use std::io::Write;

use crate::error::{BillTrackError, BillTrackResult};
use crate::models::{Bill, ReminderConfig};

/// Export bills to CSV
pub fn export_bills_csv<W: Write>(bills: &[Bill], writer: W) -> BillTrackResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "id",
            "name",
            "category",
            "due_date",
            "amount",
            "reminder_frequency",
            "notes",
            "recurring",
            "status",
            "overdue_days",
        ])
        .map_err(|e| BillTrackError::Export(e.to_string()))?;

    for bill in bills {
        let due = bill
            .due_date
            .map(|d| d.to_string())
            .unwrap_or_default();

        csv_writer
            .write_record([
                bill.id.to_string(),
                bill.name.clone(),
                bill.category.to_string(),
                due,
                bill.amount.to_string(),
                bill.reminder_frequency.to_string(),
                bill.notes.clone(),
                bill.recurring.to_string(),
                bill.status.to_string(),
                bill.overdue_days.to_string(),
            ])
            .map_err(|e| BillTrackError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BillTrackError::Export(e.to_string()))
}

/// Export reminder configurations to CSV
pub fn export_reminders_csv<W: Write>(
    reminders: &[ReminderConfig],
    writer: W,
) -> BillTrackResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["id", "bill_id", "frequency", "start_date", "channel", "message"])
        .map_err(|e| BillTrackError::Export(e.to_string()))?;

    for reminder in reminders {
        csv_writer
            .write_record([
                reminder.id.to_string(),
                reminder.bill_id.to_string(),
                reminder.frequency.to_string(),
                reminder.start_date.to_string(),
                reminder.channel.to_string(),
                reminder.message.clone(),
            ])
            .map_err(|e| BillTrackError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BillTrackError::Export(e.to_string()))
}
