//! Display formatting for terminal output
//!
//! Formats record snapshots for the interactive surface: the expense table
//! and the category chart.

pub mod chart;
pub mod expense;

pub use chart::format_category_chart;
pub use expense::format_expense_table;
