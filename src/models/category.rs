//! Bill category model
//!
//! Categories are a closed set so that filtering never falls back to
//! string comparison. `All` is a filter wildcard only; stored bills must
//! carry a concrete category.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillCategory {
    /// Wildcard used by queries to match every category
    All,
    /// Utility bills (electricity, water, gas)
    Utilities,
    /// Debt repayments
    DebtPayments,
    /// House rent
    HouseRent,
    /// Grocery purchases
    Groceries,
    /// Internet services
    InternetCharges,
    /// Retirement savings contributions
    RetirementCharges,
    /// Cell phone usage
    CellPhoneCharges,
}

impl BillCategory {
    /// Parse a category from user input
    ///
    /// Case-insensitive; spaces, hyphens, and underscores are ignored, so
    /// "House Rent", "house_rent", and "HouseRent" all parse.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "all" => Some(Self::All),
            "utilities" => Some(Self::Utilities),
            "debtpayments" | "debt" => Some(Self::DebtPayments),
            "houserent" | "rent" => Some(Self::HouseRent),
            "groceries" => Some(Self::Groceries),
            "internetcharges" | "internet" => Some(Self::InternetCharges),
            "retirementcharges" | "retirement" => Some(Self::RetirementCharges),
            "cellphonecharges" | "cellphone" => Some(Self::CellPhoneCharges),
            _ => None,
        }
    }

    /// Check whether a bill in category `other` passes this filter category
    ///
    /// `All` passes everything; any concrete category requires equality.
    pub fn accepts(&self, other: BillCategory) -> bool {
        *self == Self::All || *self == other
    }

    /// Whether this value may be stored on a bill
    pub fn is_concrete(&self) -> bool {
        *self != Self::All
    }

    /// All concrete categories, for listings and validation messages
    pub fn concrete_categories() -> &'static [BillCategory] {
        &[
            Self::Utilities,
            Self::DebtPayments,
            Self::HouseRent,
            Self::Groceries,
            Self::InternetCharges,
            Self::RetirementCharges,
            Self::CellPhoneCharges,
        ]
    }
}

impl fmt::Display for BillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Utilities => write!(f, "Utilities"),
            Self::DebtPayments => write!(f, "Debt Payments"),
            Self::HouseRent => write!(f, "House Rent"),
            Self::Groceries => write!(f, "Groceries"),
            Self::InternetCharges => write!(f, "Internet Charges"),
            Self::RetirementCharges => write!(f, "Retirement Charges"),
            Self::CellPhoneCharges => write!(f, "Cell Phone Charges"),
        }
    }
}
