//! Budget summary computations
//!
//! Pure functions over a snapshot of records; the monthly budget is an
//! explicit argument owned by the calling session, never ambient state.

use crate::models::{Expense, Money};

/// Sum of all recorded amounts; zero for an empty snapshot
pub fn total_spent(records: &[Expense]) -> Money {
    records.iter().map(|e| e.amount).sum()
}

/// What is left of the monthly budget; may be negative
pub fn remaining_budget(records: &[Expense], monthly_budget: Money) -> Money {
    monthly_budget - total_spent(records)
}

/// True iff spending has exceeded the monthly budget
pub fn is_over_budget(records: &[Expense], monthly_budget: Money) -> bool {
    remaining_budget(records, monthly_budget).is_negative()
}
