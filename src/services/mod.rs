//! Service layer for BillTrack
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, lifecycle transitions, and the filtered queries.

pub mod bills;
pub mod reminders;

pub use bills::BillService;
pub use reminders::ReminderService;
