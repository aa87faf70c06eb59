//! Storage initialization
//!
//! Handles first-run setup and demo data creation

use chrono::NaiveDate;

use crate::config::paths::BillTrackPaths;
use crate::error::BillTrackError;
use crate::models::{BillCategory, BillId, Money, NewBill, PaymentStatus, ReminderFrequency};

use super::bills::BillRepository;

/// Initialize storage for a fresh installation
///
/// Seeds a small demo bill set so listings aren't empty on first run.
pub fn initialize_storage(paths: &BillTrackPaths) -> Result<(), BillTrackError> {
    paths.ensure_directories()?;

    if !paths.bills_file().exists() {
        seed_demo_bills(paths)?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &BillTrackPaths) -> bool {
    !paths.bills_file().exists()
}

fn demo_bill(
    id: u32,
    name: &str,
    category: BillCategory,
    due: Option<NaiveDate>,
    cents: i64,
    frequency: ReminderFrequency,
    notes: &str,
    recurring: bool,
    status: PaymentStatus,
    overdue_days: u32,
) -> crate::models::Bill {
    let mut draft = NewBill::new(name, category, due, Money::from_cents(cents));
    draft.reminder_frequency = frequency;
    draft.notes = notes.to_string();
    draft.recurring = recurring;
    draft.status = status;
    draft.overdue_days = overdue_days;
    draft.into_bill(BillId::new(id))
}

/// Write the demo bill set
fn seed_demo_bills(paths: &BillTrackPaths) -> Result<(), BillTrackError> {
    let bills = vec![
        demo_bill(
            1,
            "Electricity Bill",
            BillCategory::Utilities,
            NaiveDate::from_ymd_opt(2024, 8, 15),
            10050,
            ReminderFrequency::Monthly,
            "Pay before due date",
            false,
            PaymentStatus::Upcoming,
            0,
        ),
        demo_bill(
            2,
            "Internet Bill",
            BillCategory::InternetCharges,
            None,
            6000,
            ReminderFrequency::Monthly,
            "",
            true,
            PaymentStatus::Paid,
            0,
        ),
        demo_bill(
            3,
            "Rent",
            BillCategory::HouseRent,
            NaiveDate::from_ymd_opt(2024, 7, 30),
            120000,
            ReminderFrequency::Monthly,
            "Rent for June",
            false,
            PaymentStatus::Overdue,
            5,
        ),
        demo_bill(
            4,
            "Groceries",
            BillCategory::Groceries,
            None,
            20000,
            ReminderFrequency::Weekly,
            "Weekly groceries",
            false,
            PaymentStatus::Paid,
            0,
        ),
    ];

    let repo = BillRepository::new(paths.bills_file());
    repo.load()?;
    repo.replace_all(bills)?;
    repo.save()
}
