//! Audit entry data structures
//!
//! Defines the structure of audit log entries: the operation kind, a UTC
//! timestamp, and a free-text detail line.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// An expense was inserted
    Insert,
    /// All expenses were removed
    DeleteAll,
    /// Records were exported to a backup file
    Export,
    /// Records were imported from a backup file
    Import,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Insert => write!(f, "INSERT"),
            Operation::DeleteAll => write!(f, "DELETE_ALL"),
            Operation::Export => write!(f, "EXPORT"),
            Operation::Import => write!(f, "IMPORT"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation happened
    pub timestamp: DateTime<Utc>,

    /// What kind of operation it was
    pub operation: Operation,

    /// Human-readable description of the operation
    pub detail: String,
}

impl AuditEntry {
    /// Create a new entry stamped with the current time
    pub fn new(operation: Operation, detail: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            detail: detail.into(),
        }
    }
}
