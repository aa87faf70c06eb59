//! Bill model
//!
//! Represents a trackable financial obligation with a due date, amount, and
//! payment status. Lifecycle transitions (snooze, mark paid) live here as
//! mutators; classification against "today" is provided as predicates so the
//! service layer can pass a fixed date and stay deterministic under test.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use super::category::BillCategory;
use super::ids::{BillId, ReminderId};
use super::money::Money;
use super::reminder::ReminderFrequency;

/// Payment status of a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// The bill is expected but not yet due-or-paid
    #[default]
    Upcoming,
    /// The bill is unpaid and flagged past due
    Overdue,
    /// The bill has been paid; a paid bill carries no due date
    Paid,
}

impl PaymentStatus {
    /// Parse a status from user input
    ///
    /// Case-insensitive. "pending" is accepted as a synonym for overdue.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "upcoming" => Some(Self::Upcoming),
            "overdue" | "pending" => Some(Self::Overdue),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upcoming => write!(f, "Upcoming"),
            Self::Overdue => write!(f, "Overdue"),
            Self::Paid => write!(f, "Paid"),
        }
    }
}

/// Fields for a bill that has not been stored yet
///
/// The repository assigns the id when the draft is added.
#[derive(Debug, Clone)]
pub struct NewBill {
    pub name: String,
    pub category: BillCategory,
    pub due_date: Option<NaiveDate>,
    pub amount: Money,
    pub reminder_frequency: ReminderFrequency,
    pub attachment: Option<PathBuf>,
    pub notes: String,
    pub recurring: bool,
    pub status: PaymentStatus,
    pub overdue_days: u32,
}

impl NewBill {
    /// Create a draft with the required fields; the rest default
    pub fn new(
        name: impl Into<String>,
        category: BillCategory,
        due_date: Option<NaiveDate>,
        amount: Money,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            due_date,
            amount,
            reminder_frequency: ReminderFrequency::default(),
            attachment: None,
            notes: String::new(),
            recurring: false,
            status: PaymentStatus::default(),
            overdue_days: 0,
        }
    }

    /// Validate the draft with the same rules as a stored bill
    pub fn validate(&self) -> Result<(), BillValidationError> {
        validate_fields(&self.name, self.category, self.status, self.due_date)
    }

    /// Materialize the draft into a stored bill with the given id
    pub fn into_bill(self, id: BillId) -> Bill {
        let now = Utc::now();
        Bill {
            id,
            name: self.name,
            category: self.category,
            due_date: self.due_date,
            amount: self.amount,
            reminder_frequency: self.reminder_frequency,
            attachment: self.attachment,
            notes: self.notes,
            recurring: self.recurring,
            status: self.status,
            overdue_days: self.overdue_days,
            reminder_id: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A trackable financial obligation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    /// Unique identifier, assigned by the bill repository and never reused
    pub id: BillId,

    /// Name or title of the bill (e.g., "Electricity")
    pub name: String,

    /// Category of the bill
    pub category: BillCategory,

    /// Due date; `None` exactly when the bill is paid
    pub due_date: Option<NaiveDate>,

    /// Amount to be paid
    pub amount: Money,

    /// Frequency for reminders related to the bill
    #[serde(default)]
    pub reminder_frequency: ReminderFrequency,

    /// Optional attachment reference (opaque path, pass-through only)
    pub attachment: Option<PathBuf>,

    /// Additional notes
    #[serde(default)]
    pub notes: String,

    /// Whether the bill recurs
    pub recurring: bool,

    /// Payment status
    #[serde(default)]
    pub status: PaymentStatus,

    /// Days past due; zero unless the bill is unpaid and past due
    #[serde(default)]
    pub overdue_days: u32,

    /// The bill's reminder configuration, if one has been set up
    pub reminder_id: Option<ReminderId>,

    /// When the bill was created
    pub created_at: DateTime<Utc>,

    /// When the bill was last modified
    pub updated_at: DateTime<Utc>,
}

impl Bill {
    /// Whether this bill belongs to the overdue set as of `today`
    ///
    /// A bill is overdue when it is flagged `Overdue`, or when its due date
    /// has passed. A far-future due date never makes a bill overdue; a paid
    /// bill has no due date and is never overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == PaymentStatus::Overdue || self.due_date.is_some_and(|due| due < today)
    }

    /// Whether this bill belongs to the upcoming set
    pub fn is_upcoming(&self) -> bool {
        self.status == PaymentStatus::Upcoming
    }

    /// Days this bill is past due as of `today`; zero for paid or not-yet-due bills
    pub fn overdue_days_as_of(&self, today: NaiveDate) -> u32 {
        if self.status == PaymentStatus::Paid {
            return 0;
        }
        match self.due_date {
            Some(due) if due < today => (today - due).num_days() as u32,
            _ => 0,
        }
    }

    /// Postpone the due date without changing the payment status
    ///
    /// The overdue-day count is recomputed from the new date, so snoozing
    /// into the future clears it. The service layer rejects snoozing a paid
    /// bill before this is reached.
    pub fn snooze(&mut self, new_due: NaiveDate, today: NaiveDate) {
        self.due_date = Some(new_due);
        self.overdue_days = self.overdue_days_as_of(today);
        self.updated_at = Utc::now();
    }

    /// Terminal transition: mark the bill paid and clear the due date
    ///
    /// Idempotent; marking an already-paid bill changes nothing observable.
    pub fn mark_paid(&mut self) {
        self.status = PaymentStatus::Paid;
        self.due_date = None;
        self.overdue_days = 0;
        self.updated_at = Utc::now();
    }

    /// Validate the bill
    pub fn validate(&self) -> Result<(), BillValidationError> {
        validate_fields(&self.name, self.category, self.status, self.due_date)
    }
}

fn validate_fields(
    name: &str,
    category: BillCategory,
    status: PaymentStatus,
    due_date: Option<NaiveDate>,
) -> Result<(), BillValidationError> {
    if name.trim().is_empty() {
        return Err(BillValidationError::EmptyName);
    }

    if name.len() > 100 {
        return Err(BillValidationError::NameTooLong(name.len()));
    }

    if !category.is_concrete() {
        return Err(BillValidationError::WildcardCategory);
    }

    // due_date is None exactly when the bill is paid
    match (status, due_date) {
        (PaymentStatus::Paid, Some(_)) => Err(BillValidationError::PaidWithDueDate),
        (PaymentStatus::Paid, None) => Ok(()),
        (_, None) => Err(BillValidationError::UnpaidWithoutDueDate),
        (_, Some(_)) => Ok(()),
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({})", self.id, self.name, self.status)
    }
}

/// Validation errors for bills
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillValidationError {
    EmptyName,
    NameTooLong(usize),
    WildcardCategory,
    PaidWithDueDate,
    UnpaidWithoutDueDate,
}

impl fmt::Display for BillValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Bill name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Bill name too long ({} chars, max 100)", len)
            }
            Self::WildcardCategory => {
                write!(f, "'All' is a filter, not a category a bill can be stored under")
            }
            Self::PaidWithDueDate => write!(f, "A paid bill cannot have a due date"),
            Self::UnpaidWithoutDueDate => write!(f, "An unpaid bill must have a due date"),
        }
    }
}

impl std::error::Error for BillValidationError {}
