//! Reminder configuration model
//!
//! A bill optionally owns one reminder configuration describing how often
//! and through which channel the user wants to be nudged. The configuration
//! points back at its bill by id only; deleting the bill deletes the
//! configuration, never the other way around.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BillId, ReminderId};

/// How often a reminder fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReminderFrequency {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl ReminderFrequency {
    /// Parse a frequency from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            "quarterly" => Some(Self::Quarterly),
            "yearly" | "annual" | "annually" => Some(Self::Yearly),
            _ => None,
        }
    }
}

impl fmt::Display for ReminderFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "Daily"),
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Quarterly => write!(f, "Quarterly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

/// Delivery channel preference for reminders
///
/// Delivery itself is out of scope; this is a stored preference only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    #[default]
    Email,
    Sms,
    Push,
}

impl NotificationChannel {
    /// Parse a channel from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "email" => Some(Self::Email),
            "sms" | "text" => Some(Self::Sms),
            "push" => Some(Self::Push),
            _ => None,
        }
    }
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => write!(f, "Email"),
            Self::Sms => write!(f, "SMS"),
            Self::Push => write!(f, "Push"),
        }
    }
}

/// Per-bill reminder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// Unique identifier, assigned by the reminder repository
    pub id: ReminderId,

    /// The bill this configuration belongs to (lookup only, not ownership)
    pub bill_id: BillId,

    /// How often to remind
    pub frequency: ReminderFrequency,

    /// Date the reminders start
    pub start_date: NaiveDate,

    /// Custom message to include with the reminder
    #[serde(default)]
    pub message: String,

    /// Preferred delivery channel
    #[serde(default)]
    pub channel: NotificationChannel,

    /// When the configuration was created
    pub created_at: DateTime<Utc>,

    /// When the configuration was last modified
    pub updated_at: DateTime<Utc>,
}

impl ReminderConfig {
    /// Create a new reminder configuration for a bill
    pub fn new(
        id: ReminderId,
        bill_id: BillId,
        frequency: ReminderFrequency,
        start_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            bill_id,
            frequency,
            start_date,
            message: String::new(),
            channel: NotificationChannel::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl fmt::Display for ReminderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} via {} starting {}",
            self.frequency, self.channel, self.start_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_parse() {
        assert_eq!(ReminderFrequency::parse("monthly"), Some(ReminderFrequency::Monthly));
        assert_eq!(ReminderFrequency::parse("WEEKLY"), Some(ReminderFrequency::Weekly));
        assert_eq!(ReminderFrequency::parse("annually"), Some(ReminderFrequency::Yearly));
        assert_eq!(ReminderFrequency::parse("fortnightly"), None);
    }

    #[test]
    fn test_channel_parse() {
        assert_eq!(NotificationChannel::parse("email"), Some(NotificationChannel::Email));
        assert_eq!(NotificationChannel::parse("text"), Some(NotificationChannel::Sms));
        assert_eq!(NotificationChannel::parse("carrier pigeon"), None);
    }

    #[test]
    fn test_new_reminder() {
        let start = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        let reminder = ReminderConfig::new(
            ReminderId::new(1),
            BillId::new(3),
            ReminderFrequency::Weekly,
            start,
        );
        assert_eq!(reminder.bill_id, BillId::new(3));
        assert_eq!(reminder.frequency, ReminderFrequency::Weekly);
        assert!(reminder.message.is_empty());
        assert_eq!(reminder.channel, NotificationChannel::Email);
    }

    #[test]
    fn test_serialization() {
        let start = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        let reminder = ReminderConfig::new(
            ReminderId::new(2),
            BillId::new(7),
            ReminderFrequency::Monthly,
            start,
        );
        let json = serde_json::to_string(&reminder).unwrap();
        let back: ReminderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, reminder.id);
        assert_eq!(back.bill_id, reminder.bill_id);
        assert_eq!(back.start_date, reminder.start_date);
    }
}
