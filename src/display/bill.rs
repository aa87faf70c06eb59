//! Bill display formatting
//!
//! Formats bills for terminal output in table and detail views.

use chrono::NaiveDate;

use crate::models::{Bill, ReminderConfig};

/// Format a list of bills as a table
pub fn format_bill_list(bills: &[Bill], today: NaiveDate) -> String {
    if bills.is_empty() {
        return "No bills found.\n".to_string();
    }

    let name_width = bills
        .iter()
        .map(|b| b.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let category_width = bills
        .iter()
        .map(|b| b.category.to_string().len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<name_width$}  {:<category_width$}  {:>10}  {:<10}  {:<8}  {}\n",
        "ID",
        "Name",
        "Category",
        "Amount",
        "Due",
        "Status",
        "Overdue",
        name_width = name_width,
        category_width = category_width,
    ));

    output.push_str(&format!(
        "{:->4}  {:-<name_width$}  {:-<category_width$}  {:->10}  {:-<10}  {:-<8}  {:-<7}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        category_width = category_width,
    ));

    for bill in bills {
        let due = match bill.due_date {
            Some(date) => date.to_string(),
            None => "-".to_string(),
        };

        let overdue_days = bill.overdue_days_as_of(today);
        let overdue = if overdue_days > 0 {
            format!("{}d", overdue_days)
        } else {
            String::new()
        };

        output.push_str(&format!(
            "{:>4}  {:<name_width$}  {:<category_width$}  {:>10}  {:<10}  {:<8}  {}\n",
            bill.id.to_string(),
            bill.name,
            bill.category.to_string(),
            bill.amount.to_string(),
            due,
            bill.status.to_string(),
            overdue,
            name_width = name_width,
            category_width = category_width,
        ));
    }

    output
}

/// Format a single bill's details
pub fn format_bill_details(bill: &Bill, reminder: Option<&ReminderConfig>, today: NaiveDate) -> String {
    let mut output = String::new();

    output.push_str(&format!("Bill #{}: {}\n", bill.id, bill.name));
    output.push_str(&format!("  Category:       {}\n", bill.category));
    output.push_str(&format!("  Amount:         {}\n", bill.amount));
    output.push_str(&format!(
        "  Due date:       {}\n",
        bill.due_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string())
    ));
    output.push_str(&format!("  Status:         {}\n", bill.status));

    let overdue_days = bill.overdue_days_as_of(today);
    if overdue_days > 0 {
        output.push_str(&format!("  Days overdue:   {}\n", overdue_days));
    }

    output.push_str(&format!(
        "  Recurring:      {}\n",
        if bill.recurring { "Yes" } else { "No" }
    ));
    output.push_str(&format!("  Frequency:      {}\n", bill.reminder_frequency));

    if let Some(attachment) = &bill.attachment {
        output.push_str(&format!("  Attachment:     {}\n", attachment.display()));
    }

    if !bill.notes.is_empty() {
        output.push_str(&format!("  Notes:          {}\n", bill.notes));
    }

    match reminder {
        Some(reminder) => {
            output.push_str(&format!("  Reminder:       {}\n", reminder));
            if !reminder.message.is_empty() {
                output.push_str(&format!("  Message:        {}\n", reminder.message));
            }
        }
        None => output.push_str("  Reminder:       not configured\n"),
    }

    output
}
