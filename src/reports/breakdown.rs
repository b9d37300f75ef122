//! Spending breakdowns by category and by month
//!
//! Grouping only; no ordering promises beyond what each function documents.

use std::collections::HashMap;

use crate::models::{Category, Expense, Money, MonthKey};

/// Per-category share of overall spending
#[derive(Debug, Clone)]
pub struct CategoryShare {
    /// The category
    pub category: Category,
    /// Total amount recorded against it
    pub total: Money,
    /// Share of overall spending, 0.0–100.0
    pub percentage: f64,
}

/// Group and sum amounts by category
///
/// Categories with no records are absent from the result, not present with
/// zero.
pub fn sum_by_category(records: &[Expense]) -> HashMap<Category, Money> {
    let mut totals: HashMap<Category, Money> = HashMap::new();
    for expense in records {
        *totals.entry(expense.category.clone()).or_default() += expense.amount;
    }
    totals
}

/// Group and sum amounts by exact month-year pair
///
/// Months appear in first-appearance order; callers needing chronological
/// order must sort explicitly (MonthKey orders chronologically).
pub fn sum_by_month(records: &[Expense]) -> Vec<(MonthKey, Money)> {
    let mut totals: Vec<(MonthKey, Money)> = Vec::new();
    let mut index: HashMap<MonthKey, usize> = HashMap::new();

    for expense in records {
        let key = expense.month_key();
        match index.get(&key) {
            Some(&i) => totals[i].1 += expense.amount,
            None => {
                index.insert(key, totals.len());
                totals.push((key, expense.amount));
            }
        }
    }

    totals
}

/// Per-category totals with their percentage of overall spending
///
/// Sorted largest total first. Percentages are computed over absolute
/// amounts, so a snapshot containing refunds still sums sensibly.
pub fn category_shares(records: &[Expense]) -> Vec<CategoryShare> {
    let totals = sum_by_category(records);
    let overall: i64 = totals.values().map(|m| m.abs().cents()).sum();

    let mut shares: Vec<CategoryShare> = totals
        .into_iter()
        .map(|(category, total)| {
            let percentage = if overall == 0 {
                0.0
            } else {
                (total.abs().cents() as f64 / overall as f64) * 100.0
            };
            CategoryShare {
                category,
                total,
                percentage,
            }
        })
        .collect();

    shares.sort_by(|a, b| b.total.abs().cmp(&a.total.abs()));
    shares
}
