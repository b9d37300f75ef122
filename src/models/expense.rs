//! Expense record model
//!
//! An expense is immutable once inserted: there is no update operation, and
//! removal only happens through the store's bulk delete.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;
use super::month::MonthKey;
use crate::error::TrackerError;

/// Textual form used for entry dates everywhere: prompts, backups, display
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Identifier assigned by the store on insert
///
/// Monotonically increasing and never reused, even across a bulk delete.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// Wrap a raw id value
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// The raw id value
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the store
    pub id: ExpenseId,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Amount spent
    pub amount: Money,

    /// Expense category
    pub category: Category,
}

impl Expense {
    /// The month-year grouping key for this expense
    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    /// The date in its DD-MM-YYYY textual form
    pub fn date_text(&self) -> String {
        format_entry_date(self.date)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.id,
            self.date_text(),
            self.amount,
            self.category
        )
    }
}

/// Parse an entry date, requiring a real calendar date in DD-MM-YYYY form
pub fn parse_entry_date(input: &str) -> Result<NaiveDate, TrackerError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| TrackerError::invalid_date(input.trim()))
}

/// Format a date in the DD-MM-YYYY entry form
pub fn format_entry_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_dates() {
        let d = parse_entry_date("01-01-2024").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        let leap = parse_entry_date("29-02-2024").unwrap();
        assert_eq!(leap, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(parse_entry_date("31-02-2024").unwrap_err().is_invalid_date());
        assert!(parse_entry_date("29-02-2023").unwrap_err().is_invalid_date());
        assert!(parse_entry_date("00-01-2024").unwrap_err().is_invalid_date());
    }

    #[test]
    fn test_parse_rejects_wrong_forms() {
        assert!(parse_entry_date("15/03/2024").unwrap_err().is_invalid_date());
        assert!(parse_entry_date("2024-03-15").unwrap_err().is_invalid_date());
        assert!(parse_entry_date("tomorrow").unwrap_err().is_invalid_date());
        assert!(parse_entry_date("").unwrap_err().is_invalid_date());
    }

    #[test]
    fn test_format_round_trip() {
        let d = parse_entry_date("05-11-2023").unwrap();
        assert_eq!(format_entry_date(d), "05-11-2023");
    }

    #[test]
    fn test_month_key() {
        let expense = Expense {
            id: ExpenseId::from_raw(1),
            date: parse_entry_date("15-01-2024").unwrap(),
            amount: Money::from_units(30),
            category: Category::Food,
        };
        assert_eq!(expense.month_key().to_string(), "01-2024");
    }

    #[test]
    fn test_display() {
        let expense = Expense {
            id: ExpenseId::from_raw(7),
            date: parse_entry_date("01-02-2024").unwrap(),
            amount: Money::from_units(100),
            category: Category::Rent,
        };
        assert_eq!(expense.to_string(), "7 01-02-2024 100.00 Rent");
    }

    #[test]
    fn test_serialization_round_trip() {
        let expense = Expense {
            id: ExpenseId::from_raw(3),
            date: parse_entry_date("15-01-2024").unwrap(),
            amount: Money::from_cents(4250),
            category: Category::Custom("Gifts".into()),
        };

        let json = serde_json::to_string(&expense).unwrap();
        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, back);
    }
}
