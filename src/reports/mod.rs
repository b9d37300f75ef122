//! Aggregation layer for FlowTrack
//!
//! Stateless computations producing summaries from a record snapshot. All
//! functions take the snapshot as a slice and mutate nothing.

pub mod breakdown;
pub mod summary;

pub use breakdown::{category_shares, sum_by_category, sum_by_month, CategoryShare};
pub use summary::{is_over_budget, remaining_budget, total_spent};
