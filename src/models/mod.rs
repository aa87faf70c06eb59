//! Core data models for BillTrack
//!
//! This module contains the data structures that represent the bill-tracking
//! domain: bills, categories, payment statuses, and reminder configurations.

pub mod bill;
pub mod category;
pub mod ids;
pub mod money;
pub mod reminder;

pub use bill::{Bill, BillValidationError, NewBill, PaymentStatus};
pub use category::BillCategory;
pub use ids::{BillId, ReminderId};
pub use money::Money;
pub use reminder::{NotificationChannel, ReminderConfig, ReminderFrequency};
