//! Display formatting for terminal output

pub mod bill;
pub mod reminder;

pub use bill::{format_bill_details, format_bill_list};
pub use reminder::format_reminder_list;
