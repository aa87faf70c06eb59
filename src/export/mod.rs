//! Export module for BillTrack
//!
//! Writes bills and reminder configurations to CSV or JSON.

pub mod csv;
pub mod json;

pub use csv::{export_bills_csv, export_reminders_csv};
pub use json::{export_bills_json, export_reminders_json};
