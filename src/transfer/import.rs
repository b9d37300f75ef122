//! CSV import
//!
//! Restores records from a backup table by re-inserting each row through the
//! store, so dates are re-validated and ids are freshly assigned. A bad row
//! is reported and skipped; the remaining rows still import.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, ExpenseId, Money};
use crate::storage::ExpenseStore;

/// Result of a completed import
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Ids assigned to the rows that imported successfully
    pub imported_ids: Vec<ExpenseId>,
    /// Per-row error messages, keyed by 1-based data row number
    pub errors: Vec<(usize, String)>,
}

impl ImportReport {
    /// Number of rows imported
    pub fn imported(&self) -> usize {
        self.imported_ids.len()
    }

    /// True when every row imported
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Import records from CSV, inserting each row through the store
///
/// Expects the backup layout `ID,Date,Amount,Category` with a header row;
/// the `ID` column is ignored (ids are reassigned by the store). Row-level
/// validation failures are collected in the report. Underlying persistence
/// failures abort the import, since they are not a property of one row.
pub fn import_csv<R: Read>(store: &ExpenseStore, reader: R) -> TrackerResult<ImportReport> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut report = ImportReport::default();

    for (idx, result) in csv_reader.records().enumerate() {
        let row_number = idx + 1;

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                report
                    .errors
                    .push((row_number, format!("Unreadable row: {}", e)));
                continue;
            }
        };

        if record.len() < 4 {
            report
                .errors
                .push((row_number, "Expected 4 fields (ID,Date,Amount,Category)".into()));
            continue;
        }

        let date_text = record.get(1).unwrap_or("");
        let amount_text = record.get(2).unwrap_or("");
        let category_text = record.get(3).unwrap_or("");

        let amount = match Money::parse(amount_text) {
            Ok(amount) => amount,
            Err(_) => {
                report.errors.push((
                    row_number,
                    TrackerError::invalid_amount(amount_text).to_string(),
                ));
                continue;
            }
        };

        match store.insert(date_text, amount, Category::parse(category_text)) {
            Ok(expense) => report.imported_ids.push(expense.id),
            Err(err) if err.is_invalid_date() => {
                report.errors.push((row_number, err.to_string()));
            }
            Err(err) => return Err(err),
        }
    }

    Ok(report)
}

/// Import records from a CSV file
pub fn import_csv_file<P: AsRef<Path>>(
    store: &ExpenseStore,
    path: P,
) -> TrackerResult<ImportReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        TrackerError::Import(format!("Failed to open {}: {}", path.display(), e))
    })?;

    import_csv(store, BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use crate::transfer::export::export_csv;
    use tempfile::TempDir;

    fn create_test_store(temp_dir: &TempDir) -> ExpenseStore {
        let store = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        store.load().unwrap();
        store
    }

    fn triple(e: &Expense) -> (String, i64, String) {
        (
            e.date_text(),
            e.amount.cents(),
            e.category.name().to_string(),
        )
    }

    #[test]
    fn test_round_trip_preserves_record_contents() {
        let source_dir = TempDir::new().unwrap();
        let source = create_test_store(&source_dir);
        source
            .insert("01-01-2024", Money::from_units(50), Category::Food)
            .unwrap();
        source
            .insert("15-01-2024", Money::from_units(30), Category::Food)
            .unwrap();
        source
            .insert("01-02-2024", Money::from_units(100), Category::Rent)
            .unwrap();

        let mut backup = Vec::new();
        export_csv(&source.scan().unwrap(), &mut backup).unwrap();

        let restored_dir = TempDir::new().unwrap();
        let restored = create_test_store(&restored_dir);
        let report = import_csv(&restored, backup.as_slice()).unwrap();

        assert!(report.is_clean());
        assert_eq!(report.imported(), 3);

        let mut original: Vec<_> = source.scan().unwrap().iter().map(triple).collect();
        let mut round_tripped: Vec<_> = restored.scan().unwrap().iter().map(triple).collect();
        original.sort();
        round_tripped.sort();
        assert_eq!(original, round_tripped);
    }

    #[test]
    fn test_ids_are_reassigned_not_copied() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        store
            .insert("01-01-2024", Money::from_units(5), Category::Others)
            .unwrap();

        let backup = "ID,Date,Amount,Category\n99,02-01-2024,10.00,Food\n";
        let report = import_csv(&store, backup.as_bytes()).unwrap();

        assert_eq!(report.imported(), 1);
        assert_eq!(report.imported_ids[0].value(), 2);
    }

    #[test]
    fn test_bad_row_does_not_abort_the_rest() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        let backup = "ID,Date,Amount,Category\n\
                      1,01-01-2024,50.00,Food\n\
                      2,31-02-2024,10.00,Food\n\
                      3,01-02-2024,100.00,Rent\n";
        let report = import_csv(&store, backup.as_bytes()).unwrap();

        assert_eq!(report.imported(), 2);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].0, 2);
        assert!(report.errors[0].1.contains("Invalid date"));
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_invalid_amount_is_a_row_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        let backup = "ID,Date,Amount,Category\n1,01-01-2024,lots,Food\n";
        let report = import_csv(&store, backup.as_bytes()).unwrap();

        assert_eq!(report.imported(), 0);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].1.contains("Invalid amount"));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_short_row_is_a_row_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        let backup = "ID,Date,Amount,Category\n1,01-01-2024,50.00,Food\n2,01-02-2024\n";
        let report = import_csv(&store, backup.as_bytes()).unwrap();

        assert_eq!(report.imported(), 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].0, 2);
    }

    #[test]
    fn test_free_text_category_survives_import() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        let backup = "ID,Date,Amount,Category\n1,01-01-2024,25.00,Vet bills\n";
        let report = import_csv(&store, backup.as_bytes()).unwrap();

        assert!(report.is_clean());
        assert_eq!(
            store.scan().unwrap()[0].category,
            Category::Custom("Vet bills".into())
        );
    }

    #[test]
    fn test_missing_file_is_an_import_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        let err = import_csv_file(&store, temp_dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, TrackerError::Import(_)));
    }
}
