//! Bill service
//!
//! Business logic for bill management: creation, queries over the
//! lifecycle sets, and the snooze / mark-paid transitions. Classification
//! is relative to a `today` the caller supplies, so behavior is
//! deterministic under test.

use chrono::NaiveDate;

use crate::error::{BillTrackError, BillTrackResult};
use crate::models::{
    Bill, BillCategory, BillId, Money, NewBill, NotificationChannel, PaymentStatus,
    ReminderConfig, ReminderFrequency,
};
use crate::query::{self, BillFilter};
use crate::storage::Storage;

/// Service for bill management
pub struct BillService<'a> {
    storage: &'a Storage,
}

impl<'a> BillService<'a> {
    /// Create a new bill service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new bill
    ///
    /// The repository assigns the id from its monotonic counter; the first
    /// bill in an empty store gets id 1.
    pub fn add_bill(&self, mut draft: NewBill) -> BillTrackResult<Bill> {
        draft.name = draft.name.trim().to_string();

        draft
            .validate()
            .map_err(|e| BillTrackError::Validation(e.to_string()))?;

        let bill = self.storage.bills.add(draft)?;
        self.storage.bills.save()?;

        Ok(bill)
    }

    /// Get a bill by id
    pub fn get_bill(&self, id: BillId) -> BillTrackResult<Bill> {
        self.storage
            .bills
            .get(id)?
            .ok_or_else(|| BillTrackError::bill_not_found(id.to_string()))
    }

    /// Get all bills, ordered by id
    pub fn all_bills(&self) -> BillTrackResult<Vec<Bill>> {
        self.storage.bills.get_all()
    }

    /// Get all bills in a category (`All` returns everything)
    pub fn bills_by_category(&self, category: BillCategory) -> BillTrackResult<Vec<Bill>> {
        let filter = BillFilter::by_category(category);
        Ok(filter.apply(self.storage.bills.get_all()?))
    }

    /// List bills matching an arbitrary filter
    pub fn filtered_bills(&self, filter: &BillFilter) -> BillTrackResult<Vec<Bill>> {
        Ok(filter.apply(self.storage.bills.get_all()?))
    }

    /// The overdue set as of `today`, narrowed by the shared filter pipeline
    ///
    /// A bill is overdue when it is flagged `Overdue` or its due date has
    /// passed; an absent filter passes the whole set through.
    pub fn overdue_bills(
        &self,
        filter: &BillFilter,
        today: NaiveDate,
    ) -> BillTrackResult<Vec<Bill>> {
        let seed: Vec<Bill> = self
            .storage
            .bills
            .get_all()?
            .into_iter()
            .filter(|b| b.is_overdue(today))
            .collect();

        Ok(filter.apply(seed))
    }

    /// The upcoming set, narrowed by the shared filter pipeline
    pub fn upcoming_bills(&self, filter: &BillFilter) -> BillTrackResult<Vec<Bill>> {
        let seed: Vec<Bill> = self
            .storage
            .bills
            .get_all()?
            .into_iter()
            .filter(|b| b.is_upcoming())
            .collect();

        Ok(filter.apply(seed))
    }

    /// The strict overview query: exact status and category (or `All`),
    /// due date strictly inside `(from, to)`
    pub fn bills_overview(
        &self,
        category: BillCategory,
        from: NaiveDate,
        to: NaiveDate,
        status: PaymentStatus,
    ) -> BillTrackResult<Vec<Bill>> {
        Ok(query::overview(
            self.storage.bills.get_all()?,
            category,
            from,
            to,
            status,
        ))
    }

    /// Postpone a bill's due date
    ///
    /// Payment status is unchanged. Snoozing a paid bill is rejected since
    /// a paid bill carries no due date.
    pub fn snooze_bill(
        &self,
        id: BillId,
        new_due: NaiveDate,
        today: NaiveDate,
    ) -> BillTrackResult<Bill> {
        let bill = self.get_bill(id)?;
        if bill.status == PaymentStatus::Paid {
            return Err(BillTrackError::Validation(format!(
                "Bill {} is already paid and cannot be snoozed",
                id
            )));
        }

        let updated = self
            .storage
            .bills
            .update_with(id, |b| b.snooze(new_due, today))?
            .ok_or_else(|| BillTrackError::bill_not_found(id.to_string()))?;

        self.storage.bills.save()?;
        Ok(updated)
    }

    /// Mark a bill as paid
    ///
    /// Idempotent: paying an already-paid bill succeeds and changes nothing.
    pub fn mark_bill_paid(&self, id: BillId) -> BillTrackResult<Bill> {
        let updated = self
            .storage
            .bills
            .update_with(id, |b| b.mark_paid())?
            .ok_or_else(|| BillTrackError::bill_not_found(id.to_string()))?;

        self.storage.bills.save()?;
        Ok(updated)
    }

    /// Snooze every unpaid bill matching the filter to a new due date
    ///
    /// Runs the same pipeline as the list queries over the full collection;
    /// paid bills are skipped rather than rejected. Returns the bills that
    /// were moved.
    pub fn snooze_bills_matching(
        &self,
        filter: &BillFilter,
        new_due: NaiveDate,
        today: NaiveDate,
    ) -> BillTrackResult<Vec<Bill>> {
        let matching = filter.apply(self.storage.bills.get_all()?);
        let mut snoozed = Vec::new();

        for bill in matching {
            if bill.status == PaymentStatus::Paid {
                continue;
            }
            if let Some(updated) = self
                .storage
                .bills
                .update_with(bill.id, |b| b.snooze(new_due, today))?
            {
                snoozed.push(updated);
            }
        }

        self.storage.bills.save()?;
        Ok(snoozed)
    }

    /// Mark every bill matching the filter as paid
    ///
    /// Returns the bills in their paid state; already-paid matches are
    /// included unchanged since the transition is idempotent.
    pub fn mark_bills_paid_matching(&self, filter: &BillFilter) -> BillTrackResult<Vec<Bill>> {
        let matching = filter.apply(self.storage.bills.get_all()?);
        let mut paid = Vec::new();

        for bill in matching {
            if let Some(updated) = self.storage.bills.update_with(bill.id, |b| b.mark_paid())? {
                paid.push(updated);
            }
        }

        self.storage.bills.save()?;
        Ok(paid)
    }

    /// Update a bill's editable fields
    pub fn update_bill(
        &self,
        id: BillId,
        name: Option<&str>,
        amount: Option<Money>,
        notes: Option<&str>,
    ) -> BillTrackResult<Bill> {
        if let Some(new_name) = name {
            let new_name = new_name.trim();
            if new_name.is_empty() {
                return Err(BillTrackError::Validation("Bill name cannot be empty".into()));
            }
            if new_name.len() > 100 {
                return Err(BillTrackError::Validation(format!(
                    "Bill name too long ({} chars, max 100)",
                    new_name.len()
                )));
            }
        }

        let updated = self
            .storage
            .bills
            .update_with(id, |b| {
                if let Some(new_name) = name {
                    b.name = new_name.trim().to_string();
                }
                if let Some(new_amount) = amount {
                    b.amount = new_amount;
                }
                if let Some(new_notes) = notes {
                    b.notes = new_notes.to_string();
                }
                b.updated_at = chrono::Utc::now();
            })?
            .ok_or_else(|| BillTrackError::bill_not_found(id.to_string()))?;

        self.storage.bills.save()?;
        Ok(updated)
    }

    /// Delete a bill and its reminder configuration
    pub fn delete_bill(&self, id: BillId) -> BillTrackResult<()> {
        if !self.storage.bills.delete(id)? {
            return Err(BillTrackError::bill_not_found(id.to_string()));
        }

        // The reminder points at the bill by id only; drop it with the bill
        self.storage.reminders.delete_by_bill(id)?;

        self.storage.bills.save()?;
        self.storage.reminders.save()?;
        Ok(())
    }

    /// Create or update the reminder configuration for a bill
    pub fn update_reminder_settings(
        &self,
        bill_id: BillId,
        frequency: ReminderFrequency,
        start_date: NaiveDate,
        message: &str,
        channel: NotificationChannel,
    ) -> BillTrackResult<ReminderConfig> {
        super::reminders::ReminderService::new(self.storage).set_for_bill(
            bill_id, frequency, start_date, message, channel,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BillTrackPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BillTrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft(
        name: &str,
        category: BillCategory,
        status: PaymentStatus,
        due: Option<NaiveDate>,
    ) -> NewBill {
        let mut draft = NewBill::new(name, category, due, Money::from_cents(10000));
        draft.status = status;
        draft
    }

    fn seed_demo(service: &BillService) {
        service
            .add_bill(draft(
                "Electricity Bill",
                BillCategory::Utilities,
                PaymentStatus::Upcoming,
                Some(date(2024, 8, 15)),
            ))
            .unwrap();
        service
            .add_bill(draft(
                "Internet Bill",
                BillCategory::InternetCharges,
                PaymentStatus::Paid,
                None,
            ))
            .unwrap();
        service
            .add_bill(draft(
                "Rent",
                BillCategory::HouseRent,
                PaymentStatus::Overdue,
                Some(date(2024, 7, 30)),
            ))
            .unwrap();
    }

    #[test]
    fn test_add_bill_assigns_sequential_ids() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);

        let first = service
            .add_bill(draft(
                "Electricity Bill",
                BillCategory::Utilities,
                PaymentStatus::Upcoming,
                Some(date(2024, 8, 15)),
            ))
            .unwrap();
        assert_eq!(first.id, BillId::new(1));

        let second = service
            .add_bill(draft(
                "Water",
                BillCategory::Utilities,
                PaymentStatus::Upcoming,
                Some(date(2024, 8, 20)),
            ))
            .unwrap();
        assert_eq!(second.id, BillId::new(2));
    }

    #[test]
    fn test_add_bill_rejects_invalid_drafts() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);

        let result = service.add_bill(draft(
            "  ",
            BillCategory::Utilities,
            PaymentStatus::Upcoming,
            Some(date(2024, 8, 15)),
        ));
        assert!(matches!(result, Err(BillTrackError::Validation(_))));

        let result = service.add_bill(draft(
            "Ghost",
            BillCategory::All,
            PaymentStatus::Upcoming,
            Some(date(2024, 8, 15)),
        ));
        assert!(matches!(result, Err(BillTrackError::Validation(_))));

        // Unpaid without a due date breaks the invariant
        let result = service.add_bill(draft(
            "No Date",
            BillCategory::Utilities,
            PaymentStatus::Upcoming,
            None,
        ));
        assert!(matches!(result, Err(BillTrackError::Validation(_))));
    }

    #[test]
    fn test_overdue_bills_without_filters_returns_whole_set() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        seed_demo(&service);

        let today = date(2024, 8, 9);
        let overdue = service.overdue_bills(&BillFilter::default(), today).unwrap();

        // Rent is flagged Overdue and past due; nothing else qualifies
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].name, "Rent");
    }

    #[test]
    fn test_overdue_includes_past_due_upcoming_bills() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        seed_demo(&service);

        // Past the electricity due date, it is overdue despite its status flag
        let today = date(2024, 8, 20);
        let overdue = service.overdue_bills(&BillFilter::default(), today).unwrap();
        let names: Vec<&str> = overdue.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Electricity Bill", "Rent"]);
    }

    #[test]
    fn test_upcoming_bills() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        seed_demo(&service);

        let upcoming = service.upcoming_bills(&BillFilter::default()).unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Electricity Bill");
    }

    #[test]
    fn test_overdue_bills_with_filter() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        seed_demo(&service);

        let today = date(2024, 8, 9);
        let filter = BillFilter {
            category: Some(BillCategory::HouseRent),
            name: Some("rent".into()),
            from: Some(date(2024, 7, 29)),
            to: Some(date(2024, 8, 1)),
        };
        let overdue = service.overdue_bills(&filter, today).unwrap();
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].name, "Rent");
    }

    #[test]
    fn test_bills_overview_scenario() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        seed_demo(&service);

        let result = service
            .bills_overview(
                BillCategory::Utilities,
                date(2024, 8, 14),
                date(2024, 8, 16),
                PaymentStatus::Upcoming,
            )
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Electricity Bill");
        assert_eq!(result[0].status, PaymentStatus::Upcoming);
        assert_eq!(result[0].category, BillCategory::Utilities);
    }

    #[test]
    fn test_snooze_updates_only_target_bill() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        seed_demo(&service);

        let today = date(2024, 8, 9);
        let snoozed = service
            .snooze_bill(BillId::new(3), date(2024, 8, 12), today)
            .unwrap();

        assert_eq!(snoozed.due_date, Some(date(2024, 8, 12)));
        assert_eq!(snoozed.status, PaymentStatus::Overdue);

        // Other bills untouched
        let electricity = service.get_bill(BillId::new(1)).unwrap();
        assert_eq!(electricity.due_date, Some(date(2024, 8, 15)));
    }

    #[test]
    fn test_snooze_unknown_id_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        seed_demo(&service);

        let result = service.snooze_bill(BillId::new(99), date(2024, 8, 12), date(2024, 8, 9));
        assert!(matches!(result, Err(ref e) if e.is_not_found()));
    }

    #[test]
    fn test_snooze_paid_bill_is_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        seed_demo(&service);

        let result = service.snooze_bill(BillId::new(2), date(2024, 8, 12), date(2024, 8, 9));
        assert!(matches!(result, Err(BillTrackError::Validation(_))));
    }

    #[test]
    fn test_mark_paid_and_idempotence() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        seed_demo(&service);

        let paid = service.mark_bill_paid(BillId::new(1)).unwrap();
        assert_eq!(paid.status, PaymentStatus::Paid);
        assert_eq!(paid.due_date, None);

        // A second call succeeds and leaves the same end state
        let again = service.mark_bill_paid(BillId::new(1)).unwrap();
        assert_eq!(again.status, PaymentStatus::Paid);
        assert_eq!(again.due_date, None);
        assert_eq!(again.overdue_days, 0);
    }

    #[test]
    fn test_mark_paid_unknown_id_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);

        let result = service.mark_bill_paid(BillId::new(1));
        assert!(matches!(result, Err(ref e) if e.is_not_found()));
    }

    #[test]
    fn test_returned_collections_uphold_invariant() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        seed_demo(&service);
        service.mark_bill_paid(BillId::new(3)).unwrap();

        for bill in service.all_bills().unwrap() {
            assert_eq!(
                bill.due_date.is_none(),
                bill.status == PaymentStatus::Paid,
                "invariant violated for bill {}",
                bill.id
            );
        }
    }

    #[test]
    fn test_snooze_bills_matching_skips_paid() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        seed_demo(&service);

        let today = date(2024, 8, 9);
        let snoozed = service
            .snooze_bills_matching(&BillFilter::default(), date(2024, 9, 1), today)
            .unwrap();

        // The paid internet bill is left alone
        let names: Vec<&str> = snoozed.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Electricity Bill", "Rent"]);

        let internet = service.get_bill(BillId::new(2)).unwrap();
        assert_eq!(internet.due_date, None);
    }

    #[test]
    fn test_mark_bills_paid_matching() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        seed_demo(&service);

        let filter = BillFilter::by_category(BillCategory::HouseRent);
        let paid = service.mark_bills_paid_matching(&filter).unwrap();
        assert_eq!(paid.len(), 1);
        assert_eq!(paid[0].status, PaymentStatus::Paid);

        // Only the rent bill changed
        let electricity = service.get_bill(BillId::new(1)).unwrap();
        assert_eq!(electricity.status, PaymentStatus::Upcoming);
    }

    #[test]
    fn test_update_bill() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        seed_demo(&service);

        let updated = service
            .update_bill(
                BillId::new(1),
                Some("Power Bill"),
                Some(Money::from_cents(11000)),
                Some("rates went up"),
            )
            .unwrap();

        assert_eq!(updated.name, "Power Bill");
        assert_eq!(updated.amount.cents(), 11000);
        assert_eq!(updated.notes, "rates went up");
    }

    #[test]
    fn test_delete_bill_removes_reminder() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        seed_demo(&service);

        service
            .update_reminder_settings(
                BillId::new(1),
                ReminderFrequency::Weekly,
                date(2024, 8, 1),
                "pay up",
                NotificationChannel::Email,
            )
            .unwrap();
        assert_eq!(storage.reminders.count().unwrap(), 1);

        service.delete_bill(BillId::new(1)).unwrap();
        assert_eq!(storage.reminders.count().unwrap(), 0);
        assert!(matches!(
            service.get_bill(BillId::new(1)),
            Err(ref e) if e.is_not_found()
        ));
    }

    #[test]
    fn test_bills_by_category_all_returns_everything() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BillService::new(&storage);
        seed_demo(&service);

        let all = service.bills_by_category(BillCategory::All).unwrap();
        assert_eq!(all.len(), 3);

        let utilities = service.bills_by_category(BillCategory::Utilities).unwrap();
        assert_eq!(utilities.len(), 1);
    }
}
