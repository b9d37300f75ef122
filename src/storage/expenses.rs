//! Expense repository for JSON storage
//!
//! A single-writer store: every successful insert and delete-all is durably
//! persisted before it returns, so a crash after a successful return never
//! loses the reported state.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{parse_entry_date, Category, Expense, ExpenseId, Money};

use super::file_io::{read_json, write_json_atomic};

/// Serializable store state
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    /// Next id to assign; never reset, so ids are never reused
    next_id: u64,
    /// Records in insertion order
    expenses: Vec<Expense>,
}

impl Default for ExpenseData {
    fn default() -> Self {
        Self {
            next_id: 1,
            expenses: Vec::new(),
        }
    }
}

/// Repository for expense persistence
///
/// Records are immutable once inserted: there is no update and no
/// single-record delete, only the bulk [`ExpenseStore::delete_all`].
pub struct ExpenseStore {
    path: PathBuf,
    state: RwLock<ExpenseData>,
}

impl ExpenseStore {
    /// Create a new expense store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: RwLock::new(ExpenseData::default()),
        }
    }

    /// Load expenses from disk (an absent file means an empty store)
    pub fn load(&self) -> TrackerResult<()> {
        let mut data: ExpenseData = read_json(&self.path)?;

        // A hand-edited file may undercount next_id; ids must never be reused
        let max_id = data
            .expenses
            .iter()
            .map(|e| e.id.value())
            .max()
            .unwrap_or(0);
        if data.next_id <= max_id {
            data.next_id = max_id + 1;
        }

        let mut state = self
            .state
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *state = data;
        Ok(())
    }

    /// Validate and insert a new expense, persisting before returning
    ///
    /// The date must be a real calendar date in DD-MM-YYYY form. The category
    /// is stored as given; membership in the fixed set is the picker's
    /// concern, not the store's. On a persistence failure the in-memory state
    /// is rolled back and the store is unchanged.
    pub fn insert(&self, date: &str, amount: Money, category: Category) -> TrackerResult<Expense> {
        let date = parse_entry_date(date)?;

        let mut state = self
            .state
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let expense = Expense {
            id: ExpenseId::from_raw(state.next_id),
            date,
            amount,
            category,
        };

        state.next_id += 1;
        state.expenses.push(expense.clone());

        if let Err(e) = write_json_atomic(&self.path, &*state) {
            state.expenses.pop();
            state.next_id -= 1;
            return Err(e);
        }

        Ok(expense)
    }

    /// All records in insertion order
    pub fn scan(&self) -> TrackerResult<Vec<Expense>> {
        let state = self
            .state
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(state.expenses.clone())
    }

    /// Remove every record, returning how many were removed
    ///
    /// Idempotent: deleting from an empty store returns 0. The id counter is
    /// not reset, so later inserts continue from the historical maximum.
    pub fn delete_all(&self) -> TrackerResult<usize> {
        let mut state = self
            .state
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let removed = state.expenses.len();
        if removed == 0 {
            return Ok(0);
        }

        let drained = std::mem::take(&mut state.expenses);

        if let Err(e) = write_json_atomic(&self.path, &*state) {
            state.expenses = drained;
            return Err(e);
        }

        Ok(removed)
    }

    /// Number of records currently stored
    pub fn count(&self) -> TrackerResult<usize> {
        let state = self
            .state
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(state.expenses.len())
    }
}
