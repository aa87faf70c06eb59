//! Bill CLI commands
//!
//! Bridges clap argument parsing with the bill service.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display::{format_bill_details, format_bill_list};
use crate::error::{BillTrackError, BillTrackResult};
use crate::models::{
    BillCategory, BillId, Money, NewBill, PaymentStatus, ReminderFrequency,
};
use crate::query::BillFilter;
use crate::services::{BillService, ReminderService};
use crate::storage::Storage;

/// Bill subcommands
#[derive(Subcommand)]
pub enum BillCommands {
    /// Add a new bill
    Add {
        /// Bill name
        name: String,
        /// Category (utilities, debt, rent, groceries, internet, retirement, cellphone)
        #[arg(short, long)]
        category: String,
        /// Amount (e.g., "100.50")
        #[arg(short, long)]
        amount: String,
        /// Due date (YYYY-MM-DD); omit only for already-paid bills
        #[arg(short, long)]
        due: Option<String>,
        /// Payment status (upcoming, overdue, paid)
        #[arg(short, long, default_value = "upcoming")]
        status: String,
        /// Reminder frequency (daily, weekly, monthly, quarterly, yearly)
        #[arg(short, long, default_value = "monthly")]
        frequency: String,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
        /// Attachment path (stored as-is, never opened)
        #[arg(long)]
        attachment: Option<String>,
        /// Mark the bill as recurring
        #[arg(short, long)]
        recurring: bool,
    },
    /// List bills, optionally filtered
    List {
        /// Filter by category ("all" lists every category)
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by exact name (case-insensitive)
        #[arg(short, long)]
        name: Option<String>,
        /// Start of due-date range (YYYY-MM-DD); needs --to to take effect
        #[arg(long)]
        from: Option<String>,
        /// End of due-date range (YYYY-MM-DD); needs --from to take effect
        #[arg(long)]
        to: Option<String>,
    },
    /// Show bill details
    Show {
        /// Bill id
        id: BillId,
    },
    /// List overdue bills (flagged overdue or past their due date)
    Overdue {
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
    /// List upcoming bills
    Upcoming {
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
    /// Overview of bills with an exact status in a date window
    Overview {
        /// Category ("all" for every category)
        #[arg(short, long)]
        category: String,
        /// Window start, exclusive (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        /// Window end, exclusive (YYYY-MM-DD)
        #[arg(long)]
        to: String,
        /// Payment status (upcoming, overdue, paid)
        #[arg(short, long)]
        status: String,
    },
    /// Postpone a bill's due date
    Snooze {
        /// Bill id
        id: BillId,
        /// New due date (YYYY-MM-DD)
        date: String,
    },
    /// Mark a bill as paid
    Pay {
        /// Bill id
        id: BillId,
    },
    /// Edit a bill
    Edit {
        /// Bill id
        id: BillId,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a bill (and its reminder configuration)
    Delete {
        /// Bill id
        id: BillId,
    },
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(s: &str) -> BillTrackResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        BillTrackError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD", s))
    })
}

fn parse_category(s: &str) -> BillTrackResult<BillCategory> {
    BillCategory::parse(s).ok_or_else(|| {
        BillTrackError::Validation(format!(
            "Invalid category: '{}'. Valid categories: all, utilities, debt_payments, \
             house_rent, groceries, internet_charges, retirement_charges, cell_phone_charges",
            s
        ))
    })
}

fn parse_status(s: &str) -> BillTrackResult<PaymentStatus> {
    PaymentStatus::parse(s).ok_or_else(|| {
        BillTrackError::Validation(format!(
            "Invalid status: '{}'. Valid statuses: upcoming, overdue, paid",
            s
        ))
    })
}

fn parse_amount(s: &str) -> BillTrackResult<Money> {
    Money::parse(s).map_err(|e| {
        BillTrackError::Validation(format!(
            "Invalid amount: '{}'. Use format like '100.50'. Error: {}",
            s, e
        ))
    })
}

fn build_filter(
    category: Option<String>,
    name: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> BillTrackResult<BillFilter> {
    Ok(BillFilter {
        category: category.as_deref().map(parse_category).transpose()?,
        name,
        from: from.as_deref().map(parse_date).transpose()?,
        to: to.as_deref().map(parse_date).transpose()?,
    })
}

/// Handle a bill command
pub fn handle_bill_command(storage: &Storage, cmd: BillCommands) -> BillTrackResult<()> {
    let service = BillService::new(storage);
    let today = Local::now().date_naive();

    match cmd {
        BillCommands::Add {
            name,
            category,
            amount,
            due,
            status,
            frequency,
            notes,
            attachment,
            recurring,
        } => {
            let mut draft = NewBill::new(
                name,
                parse_category(&category)?,
                due.as_deref().map(parse_date).transpose()?,
                parse_amount(&amount)?,
            );
            draft.status = parse_status(&status)?;
            draft.reminder_frequency = ReminderFrequency::parse(&frequency).ok_or_else(|| {
                BillTrackError::Validation(format!(
                    "Invalid frequency: '{}'. Valid frequencies: daily, weekly, monthly, \
                     quarterly, yearly",
                    frequency
                ))
            })?;
            draft.notes = notes.unwrap_or_default();
            draft.attachment = attachment.map(Into::into);
            draft.recurring = recurring;

            let bill = service.add_bill(draft)?;
            println!("Added bill #{}: {}", bill.id, bill.name);
            println!("  Category: {}", bill.category);
            println!("  Amount:   {}", bill.amount);
            if let Some(due) = bill.due_date {
                println!("  Due:      {}", due);
            }
        }

        BillCommands::List {
            category,
            name,
            from,
            to,
        } => {
            let filter = build_filter(category, name, from, to)?;
            let bills = service.filtered_bills(&filter)?;
            print!("{}", format_bill_list(&bills, today));
        }

        BillCommands::Show { id } => {
            let bill = service.get_bill(id)?;
            let reminder = ReminderService::new(storage).get_by_bill(id)?;
            print!("{}", format_bill_details(&bill, reminder.as_ref(), today));
        }

        BillCommands::Overdue {
            category,
            name,
            from,
            to,
        } => {
            let filter = build_filter(category, name, from, to)?;
            let bills = service.overdue_bills(&filter, today)?;
            print!("{}", format_bill_list(&bills, today));
        }

        BillCommands::Upcoming {
            category,
            name,
            from,
            to,
        } => {
            let filter = build_filter(category, name, from, to)?;
            let bills = service.upcoming_bills(&filter)?;
            print!("{}", format_bill_list(&bills, today));
        }

        BillCommands::Overview {
            category,
            from,
            to,
            status,
        } => {
            let bills = service.bills_overview(
                parse_category(&category)?,
                parse_date(&from)?,
                parse_date(&to)?,
                parse_status(&status)?,
            )?;
            print!("{}", format_bill_list(&bills, today));
        }

        BillCommands::Snooze { id, date } => {
            let new_due = parse_date(&date)?;
            let bill = service.snooze_bill(id, new_due, today)?;
            println!("Snoozed bill #{}: {} now due {}", bill.id, bill.name, new_due);
        }

        BillCommands::Pay { id } => {
            let bill = service.mark_bill_paid(id)?;
            println!("Marked bill #{} as paid: {}", bill.id, bill.name);
        }

        BillCommands::Edit {
            id,
            name,
            amount,
            notes,
        } => {
            if name.is_none() && amount.is_none() && notes.is_none() {
                println!("No changes specified. Use --name, --amount, or --notes.");
                return Ok(());
            }

            let amount = amount.as_deref().map(parse_amount).transpose()?;
            let bill = service.update_bill(id, name.as_deref(), amount, notes.as_deref())?;
            println!("Updated bill #{}: {}", bill.id, bill.name);
        }

        BillCommands::Delete { id } => {
            service.delete_bill(id)?;
            println!("Deleted bill #{}", id);
        }
    }

    Ok(())
}
