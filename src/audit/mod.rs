//! Audit logging for FlowTrack
//!
//! Records mutating and transfer operations (insert, delete-all, export,
//! import) in an append-only, line-delimited JSON log next to the data
//! directory. Failures to write the log never fail the operation itself.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
