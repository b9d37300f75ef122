//! CSV export
//!
//! Writes the backup table: a header row followed by one row per record,
//! dates in DD-MM-YYYY form, amounts as plain decimals.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

/// Header row of the backup table
pub const CSV_HEADER: [&str; 4] = ["ID", "Date", "Amount", "Category"];

/// Export records as CSV to a writer
///
/// Fails with [`TrackerError::NothingToExport`] when the snapshot is empty;
/// nothing is written in that case.
pub fn export_csv<W: Write>(records: &[Expense], writer: W) -> TrackerResult<()> {
    if records.is_empty() {
        return Err(TrackerError::NothingToExport);
    }

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for expense in records {
        csv_writer
            .write_record(&[
                expense.id.to_string(),
                expense.date_text(),
                expense.amount.to_string(),
                expense.category.name().to_string(),
            ])
            .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

/// Export records to a CSV file
///
/// The emptiness check happens before the file is created, so an empty
/// snapshot leaves no file behind.
pub fn export_csv_file<P: AsRef<Path>>(records: &[Expense], path: P) -> TrackerResult<()> {
    if records.is_empty() {
        return Err(TrackerError::NothingToExport);
    }

    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        TrackerError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;

    export_csv(records, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_entry_date, Category, ExpenseId, Money};
    use tempfile::TempDir;

    fn expense(id: u64, date: &str, units: i64, category: Category) -> Expense {
        Expense {
            id: ExpenseId::from_raw(id),
            date: parse_entry_date(date).unwrap(),
            amount: Money::from_units(units),
            category,
        }
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let records = vec![
            expense(1, "01-01-2024", 50, Category::Food),
            expense(2, "01-02-2024", 100, Category::Rent),
        ];

        let mut out = Vec::new();
        export_csv(&records, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ID,Date,Amount,Category");
        assert_eq!(lines[1], "1,01-01-2024,50.00,Food");
        assert_eq!(lines[2], "2,01-02-2024,100.00,Rent");
    }

    #[test]
    fn test_export_quotes_free_text_categories() {
        let records = vec![expense(
            1,
            "01-01-2024",
            25,
            Category::Custom("Vet, bills".into()),
        )];

        let mut out = Vec::new();
        export_csv(&records, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"Vet, bills\""));
    }

    #[test]
    fn test_export_empty_is_an_error() {
        let mut out = Vec::new();
        let err = export_csv(&[], &mut out).unwrap_err();
        assert!(matches!(err, TrackerError::NothingToExport));
        assert!(out.is_empty());
    }

    #[test]
    fn test_export_file_not_created_when_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses_backup.csv");

        let err = export_csv_file(&[], &path).unwrap_err();
        assert!(matches!(err, TrackerError::NothingToExport));
        assert!(!path.exists());
    }

    #[test]
    fn test_export_file_round_trip_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses_backup.csv");

        let records = vec![expense(3, "05-11-2023", 12, Category::Transport)];
        export_csv_file(&records, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("ID,Date,Amount,Category"));
        assert!(text.contains("3,05-11-2023,12.00,Transport"));
    }
}
