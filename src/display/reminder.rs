//! Reminder display formatting

use crate::models::ReminderConfig;

/// Format a list of reminder configurations as a table
pub fn format_reminder_list(reminders: &[ReminderConfig]) -> String {
    if reminders.is_empty() {
        return "No reminders configured.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:>6}  {:<10}  {:<10}  {:<7}  {}\n",
        "ID", "Bill", "Frequency", "Start", "Channel", "Message"
    ));
    output.push_str(&format!(
        "{:->4}  {:->6}  {:-<10}  {:-<10}  {:-<7}  {:-<20}\n",
        "", "", "", "", "", ""
    ));

    for reminder in reminders {
        output.push_str(&format!(
            "{:>4}  {:>6}  {:<10}  {:<10}  {:<7}  {}\n",
            reminder.id.to_string(),
            reminder.bill_id.to_string(),
            reminder.frequency.to_string(),
            reminder.start_date.to_string(),
            reminder.channel.to_string(),
            reminder.message,
        ));
    }

    output
}
