//! Reminder configuration service
//!
//! Business logic for per-bill reminder policies. Delivery of reminders is
//! out of scope; this service only manages the stored configuration and
//! keeps the bill-to-reminder link consistent.

use chrono::{NaiveDate, Utc};

use crate::error::{BillTrackError, BillTrackResult};
use crate::models::{BillId, NotificationChannel, ReminderConfig, ReminderFrequency, ReminderId};
use crate::storage::Storage;

/// Service for reminder configuration management
pub struct ReminderService<'a> {
    storage: &'a Storage,
}

impl<'a> ReminderService<'a> {
    /// Create a new reminder service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create or update the reminder configuration for a bill
    ///
    /// The bill must exist. An existing configuration keeps its id; a new
    /// one gets the next id from the reminder repository's own counter and
    /// the bill is linked to it.
    pub fn set_for_bill(
        &self,
        bill_id: BillId,
        frequency: ReminderFrequency,
        start_date: NaiveDate,
        message: &str,
        channel: NotificationChannel,
    ) -> BillTrackResult<ReminderConfig> {
        if self.storage.bills.get(bill_id)?.is_none() {
            return Err(BillTrackError::bill_not_found(bill_id.to_string()));
        }

        let reminder = match self.storage.reminders.get_by_bill(bill_id)? {
            Some(mut existing) => {
                existing.frequency = frequency;
                existing.start_date = start_date;
                existing.message = message.to_string();
                existing.channel = channel;
                existing.updated_at = Utc::now();
                existing
            }
            None => {
                let id = self.storage.reminders.allocate_id()?;
                let mut reminder = ReminderConfig::new(id, bill_id, frequency, start_date);
                reminder.message = message.to_string();
                reminder.channel = channel;
                reminder
            }
        };

        self.storage.reminders.upsert(reminder.clone())?;
        self.storage.reminders.save()?;

        // Keep the bill's side of the link current
        self.storage
            .bills
            .update_with(bill_id, |b| b.reminder_id = Some(reminder.id))?;
        self.storage.bills.save()?;

        Ok(reminder)
    }

    /// Get a reminder configuration by id
    pub fn get(&self, id: ReminderId) -> BillTrackResult<ReminderConfig> {
        self.storage
            .reminders
            .get(id)?
            .ok_or_else(|| BillTrackError::reminder_not_found(id.to_string()))
    }

    /// Get the reminder configuration for a bill, if any
    pub fn get_by_bill(&self, bill_id: BillId) -> BillTrackResult<Option<ReminderConfig>> {
        self.storage.reminders.get_by_bill(bill_id)
    }

    /// Get all reminder configurations, ordered by id
    pub fn list(&self) -> BillTrackResult<Vec<ReminderConfig>> {
        self.storage.reminders.get_all()
    }

    /// Delete a reminder configuration and unlink its bill
    pub fn delete(&self, id: ReminderId) -> BillTrackResult<()> {
        let reminder = self.get(id)?;

        self.storage.reminders.delete(id)?;
        self.storage.reminders.save()?;

        // The bill may already be gone; unlink only if it still exists
        self.storage
            .bills
            .update_with(reminder.bill_id, |b| b.reminder_id = None)?;
        self.storage.bills.save()?;

        Ok(())
    }
}
