//! Transfer codec for backup and restore
//!
//! Converts the record collection to and from a flat CSV table. Import goes
//! back through the store's insert path so every row is re-validated.

pub mod export;
pub mod import;

pub use export::{export_csv, export_csv_file, CSV_HEADER};
pub use import::{import_csv, import_csv_file, ImportReport};
