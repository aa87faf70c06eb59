//! Bill query engine
//!
//! One reusable filter pipeline backs every list-shaped query: category,
//! then name, then date range, each stage narrowing the previous stage's
//! output. The overview query is a deliberately separate, stricter variant
//! (exact status, exclusive date bounds) and is not unified with the
//! pipeline.

use chrono::NaiveDate;

use crate::models::{Bill, BillCategory, PaymentStatus};

/// Optional criteria for the shared filter pipeline
///
/// Stages apply in a fixed order: category, name, date range. A stage whose
/// criterion is absent passes everything through. The date-range stage only
/// applies when both bounds are present; when it applies, bills without a
/// due date are excluded.
#[derive(Debug, Clone, Default)]
pub struct BillFilter {
    /// Category to retain; `All` retains every category even when supplied
    pub category: Option<BillCategory>,

    /// Bill name to retain, compared case-insensitively (exact, no wildcard)
    pub name: Option<String>,

    /// Inclusive lower bound on the due date
    pub from: Option<NaiveDate>,

    /// Inclusive upper bound on the due date
    pub to: Option<NaiveDate>,
}

impl BillFilter {
    /// Filter on category only
    pub fn by_category(category: BillCategory) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    /// Check if a bill passes every stage of the pipeline
    pub fn matches(&self, bill: &Bill) -> bool {
        self.matches_category(bill) && self.matches_name(bill) && self.matches_date_range(bill)
    }

    /// Stage 1: category, with the `All` bypass
    pub fn matches_category(&self, bill: &Bill) -> bool {
        match self.category {
            Some(category) => category.accepts(bill.category),
            None => true,
        }
    }

    /// Stage 2: case-insensitive name equality
    pub fn matches_name(&self, bill: &Bill) -> bool {
        match &self.name {
            Some(name) => bill.name.eq_ignore_ascii_case(name),
            None => true,
        }
    }

    /// Stage 3: due date within `[from, to]`, only when both bounds are set
    ///
    /// With one bound or none the stage is a no-op, not an error. A bill
    /// with no due date cannot fall inside any range.
    pub fn matches_date_range(&self, bill: &Bill) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => match bill.due_date {
                Some(due) => due >= from && due <= to,
                None => false,
            },
            _ => true,
        }
    }

    /// Run the pipeline over a collection, retaining matches in order
    pub fn apply(&self, bills: Vec<Bill>) -> Vec<Bill> {
        bills.into_iter().filter(|b| self.matches(b)).collect()
    }
}

/// The overview query: exact status, exact category (or `All`), and a due
/// date strictly between `from` and `to` (both bounds exclusive)
///
/// Bills without a due date never match, which also keeps paid bills out
/// unless the caller asks for `Paid` explicitly - and then only bills that
/// somehow retain a date would match, of which there are none by invariant.
pub fn overview(
    bills: Vec<Bill>,
    category: BillCategory,
    from: NaiveDate,
    to: NaiveDate,
    status: PaymentStatus,
) -> Vec<Bill> {
    bills
        .into_iter()
        .filter(|bill| {
            category.accepts(bill.category)
                && bill.status == status
                && bill
                    .due_date
                    .map_or(false, |due| due > from && due < to)
        })
        .collect()
}
