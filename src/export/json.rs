//! JSON export functionality

use std::io::Write;

use serde::Serialize;

use crate::error::{BillTrackError, BillTrackResult};
use crate::models::{Bill, ReminderConfig};

#[derive(Serialize)]
struct BillExport<'a> {
    bills: &'a [Bill],
}

#[derive(Serialize)]
struct ReminderExport<'a> {
    reminders: &'a [ReminderConfig],
}

/// Export bills as pretty-printed JSON
pub fn export_bills_json<W: Write>(bills: &[Bill], writer: W) -> BillTrackResult<()> {
    serde_json::to_writer_pretty(writer, &BillExport { bills })
        .map_err(|e| BillTrackError::Export(e.to_string()))
}

/// Export reminder configurations as pretty-printed JSON
pub fn export_reminders_json<W: Write>(
    reminders: &[ReminderConfig],
    writer: W,
) -> BillTrackResult<()> {
    serde_json::to_writer_pretty(writer, &ReminderExport { reminders })
        .map_err(|e| BillTrackError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillCategory, BillId, Money, NewBill};
    use chrono::NaiveDate;

    #[test]
    fn test_export_bills_json_round_trips() {
        let bill = NewBill::new(
            "Electricity Bill",
            BillCategory::Utilities,
            NaiveDate::from_ymd_opt(2024, 8, 15),
            Money::from_cents(10050),
        )
        .into_bill(BillId::new(1));

        let mut buffer = Vec::new();
        export_bills_json(&[bill], &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["bills"][0]["name"], "Electricity Bill");
        assert_eq!(value["bills"][0]["id"], 1);
    }
}
