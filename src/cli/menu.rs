//! Interactive menu loop
//!
//! The numbered menu surface over the store, reports, and transfer codec.
//! Every operation error is caught at the menu boundary, reported, and
//! control returns to the menu; end of input ends the session.

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::auth::{CredentialCheck, PasswordGate};
use crate::display::{format_category_chart, format_expense_table};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Money};
use crate::reports;
use crate::storage::ExpenseStore;
use crate::transfer;

use super::prompt;

/// Backup file offered by the export and import prompts
const DEFAULT_BACKUP_FILE: &str = "expenses_backup.csv";

/// One interactive session over an unlocked store
///
/// The monthly budget lives here, not in the store: it is a session value,
/// changeable at runtime and never persisted.
pub struct Session<'a> {
    store: &'a ExpenseStore,
    audit: &'a AuditLogger,
    budget: Money,
}

impl<'a> Session<'a> {
    /// Create a session with the given starting budget
    pub fn new(store: &'a ExpenseStore, audit: &'a AuditLogger, budget: Money) -> Self {
        Self {
            store,
            audit,
            budget,
        }
    }

    /// Run the password gate, then the menu loop
    pub fn run<C: CredentialCheck>(&mut self, gate: &PasswordGate<C>) -> TrackerResult<()> {
        let unlocked = gate.unlock(|remaining| {
            if remaining < gate.max_attempts() {
                println!("Incorrect password. {} attempts left.", remaining);
            }
            prompt::prompt_secret("Enter Password: ")
        });

        match unlocked {
            Ok(()) => println!("Access Granted."),
            Err(TrackerError::AccessDenied) => {
                println!("Access Denied.");
                return Ok(());
            }
            Err(e) => return Err(e),
        }

        self.menu_loop()
    }

    fn menu_loop(&mut self) -> TrackerResult<()> {
        loop {
            print_menu();
            let Some(choice) = prompt::prompt_line("Enter your choice: ")? else {
                break;
            };

            match choice.as_str() {
                "1" => report(self.add_expense()),
                "2" => report(self.view_all()),
                "3" => report(self.show_remaining_budget()),
                "4" => report(self.plot_expenses()),
                "5" => report(self.remove_all_expenses()),
                "6" => report(self.export_to_csv()),
                "7" => report(self.import_from_csv()),
                "8" => report(self.monthly_report()),
                "9" => {
                    println!("Goodbye.");
                    break;
                }
                _ => println!("Invalid choice! Please try again."),
            }
        }
        Ok(())
    }

    fn add_expense(&mut self) -> TrackerResult<()> {
        let date = prompt::prompt_required("Enter date (DD-MM-YYYY): ")?;
        let amount_text = prompt::prompt_required("Enter amount: ")?;
        let amount = Money::parse(&amount_text)
            .map_err(|_| TrackerError::invalid_amount(amount_text.as_str()))?;
        let category = select_category()?;

        let expense = self.store.insert(&date, amount, category)?;
        self.log_audit(
            Operation::Insert,
            format!(
                "expense {}: {} {} on {}",
                expense.id,
                expense.amount,
                expense.category,
                expense.date_text()
            ),
        );
        println!("Expense added successfully!");
        Ok(())
    }

    fn view_all(&mut self) -> TrackerResult<()> {
        let records = self.store.scan()?;
        println!("{}", format_expense_table(&records));
        Ok(())
    }

    fn show_remaining_budget(&mut self) -> TrackerResult<()> {
        let records = self.store.scan()?;
        println!(
            "Remaining Budget: {}",
            reports::remaining_budget(&records, self.budget)
        );
        if reports::is_over_budget(&records, self.budget) {
            println!("Warning: You have exceeded your monthly budget!");
        }

        if prompt::prompt_confirm("Change monthly budget? (y/n) [n]: ")? {
            let text = prompt::prompt_required("Enter new monthly budget: ")?;
            let budget =
                Money::parse(&text).map_err(|_| TrackerError::invalid_amount(text.as_str()))?;
            self.budget = budget;
            println!("Monthly budget changed to {}.", budget);
        }
        Ok(())
    }

    fn plot_expenses(&mut self) -> TrackerResult<()> {
        let records = self.store.scan()?;
        println!("{}", format_category_chart(&records));
        Ok(())
    }

    fn remove_all_expenses(&mut self) -> TrackerResult<()> {
        if !prompt::prompt_confirm("Are you sure you want to delete all expenses? (y/n) [n]: ")? {
            println!("Operation cancelled.");
            return Ok(());
        }

        let removed = self.store.delete_all()?;
        self.log_audit(Operation::DeleteAll, format!("{} records removed", removed));
        println!("All records deleted successfully! ({} removed)", removed);
        Ok(())
    }

    fn export_to_csv(&mut self) -> TrackerResult<()> {
        let records = self.store.scan()?;
        let path = prompt::prompt_with_default(
            &format!("Export to file [{}]: ", DEFAULT_BACKUP_FILE),
            DEFAULT_BACKUP_FILE,
        )?;

        match transfer::export_csv_file(&records, &path) {
            Ok(()) => {
                self.log_audit(
                    Operation::Export,
                    format!("{} records to '{}'", records.len(), path),
                );
                println!("Data exported to '{}'.", path);
            }
            Err(TrackerError::NothingToExport) => println!("No data to export."),
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn import_from_csv(&mut self) -> TrackerResult<()> {
        let path = prompt::prompt_with_default(
            &format!("Import from file [{}]: ", DEFAULT_BACKUP_FILE),
            DEFAULT_BACKUP_FILE,
        )?;

        let report = transfer::import_csv_file(self.store, &path)?;
        self.log_audit(
            Operation::Import,
            format!(
                "{} imported, {} errors from '{}'",
                report.imported(),
                report.errors.len(),
                path
            ),
        );

        println!("Imported {} expense(s).", report.imported());
        for (row, message) in &report.errors {
            println!("Row {}: {}", row, message);
        }
        Ok(())
    }

    fn monthly_report(&mut self) -> TrackerResult<()> {
        let records = self.store.scan()?;
        if records.is_empty() {
            println!("No expenses recorded.");
            return Ok(());
        }

        // Grouping itself is order-free; sort here for a readable report
        let mut totals = reports::sum_by_month(&records);
        totals.sort_by_key(|(month, _)| *month);

        for (month, total) in totals {
            println!("Month: {}, Total Expense: {}", month, total);
        }
        Ok(())
    }

    fn log_audit(&self, operation: Operation, detail: String) {
        if let Err(e) = self.audit.log(&AuditEntry::new(operation, detail)) {
            eprintln!("Warning: failed to write audit log: {}", e);
        }
    }
}

/// Print an operation outcome without leaving the menu loop
fn report(result: TrackerResult<()>) {
    if let Err(e) = result {
        println!("Error: {}", e);
    }
}

fn print_menu() {
    println!();
    println!("=== Personal Expense Tracker ===");
    println!("1. Add Expense");
    println!("2. View All Expenses");
    println!("3. View Remaining Budget");
    println!("4. Plot Expenses");
    println!("5. Remove All Expenses");
    println!("6. Export Expenses to CSV");
    println!("7. Import Expenses from CSV");
    println!("8. Monthly Expense Report");
    println!("9. Exit");
}

/// Pick a category from the fixed set
///
/// This helper is the only place category membership is enforced; the store
/// accepts free text when called directly.
fn select_category() -> TrackerResult<Category> {
    println!("Select a category:");
    for (i, category) in Category::PRESETS.iter().enumerate() {
        println!("{}. {}", i + 1, category);
    }

    loop {
        let choice = prompt::prompt_required("Enter your choice: ")?;
        match category_from_choice(&choice) {
            Some(category) => return Ok(category),
            None => println!(
                "Invalid choice! Enter a number from 1 to {}.",
                Category::PRESETS.len()
            ),
        }
    }
}

/// Map a picker answer to its category
fn category_from_choice(input: &str) -> Option<Category> {
    let n: usize = input.trim().parse().ok()?;
    Category::PRESETS.get(n.checked_sub(1)?).cloned()
}
