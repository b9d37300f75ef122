//! Category spending chart
//!
//! Renders per-category spending shares as horizontal bars for the terminal.

use crate::models::Expense;
use crate::reports::category_shares;

/// Widest bar, in character cells
const MAX_BAR_WIDTH: i64 = 40;

/// Format spending shares by category as a bar chart, largest first
pub fn format_category_chart(records: &[Expense]) -> String {
    let shares = category_shares(records);
    if shares.is_empty() {
        return "No expenses to plot.\n".to_string();
    }

    let max_cents = shares[0].total.abs().cents().max(1);
    let name_width = shares
        .iter()
        .map(|s| s.category.name().len())
        .max()
        .unwrap_or(0);

    let mut output = String::from("Expenses by Category\n\n");

    for share in &shares {
        let bar_len = ((share.total.abs().cents() * MAX_BAR_WIDTH) / max_cents).max(1) as usize;
        output.push_str(&format!(
            "{:<name_w$}  {:>10}  {} {:.1}%\n",
            share.category.name(),
            share.total.to_string(),
            "█".repeat(bar_len),
            share.percentage,
            name_w = name_width,
        ));
    }

    output
}
