//! Expense list formatting
//!
//! Renders the record listing as a terminal table.

use tabled::{settings::Style, Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id.value(),
            date: expense.date_text(),
            amount: expense.amount.to_string(),
            category: expense.category.name().to_string(),
        }
    }
}

/// Format all records as a table, in the order given
pub fn format_expense_table(records: &[Expense]) -> String {
    if records.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = records.iter().map(ExpenseRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_entry_date, Category, ExpenseId, Money};

    fn expense(id: u64, date: &str, units: i64, category: Category) -> Expense {
        Expense {
            id: ExpenseId::from_raw(id),
            date: parse_entry_date(date).unwrap(),
            amount: Money::from_units(units),
            category,
        }
    }

    #[test]
    fn test_empty_listing() {
        assert_eq!(format_expense_table(&[]), "No expenses recorded.\n");
    }

    #[test]
    fn test_table_contains_columns_and_rows() {
        let records = vec![
            expense(1, "01-01-2024", 50, Category::Food),
            expense(2, "01-02-2024", 100, Category::Rent),
        ];

        let table = format_expense_table(&records);
        for needle in ["ID", "Date", "Amount", "Category"] {
            assert!(table.contains(needle), "missing header {needle}");
        }
        assert!(table.contains("01-01-2024"));
        assert!(table.contains("50.00"));
        assert!(table.contains("Rent"));
    }
}
