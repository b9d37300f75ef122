//! Path management for FlowTrack
//!
//! Provides XDG-compliant path resolution for the data directory.
//!
//! ## Path Resolution Order
//!
//! 1. An explicit base directory (the `--data-dir` flag, or tests)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/flowtrack` or `~/.config/flowtrack`
//! 3. Windows: `%APPDATA%\flowtrack`

use std::path::PathBuf;

use crate::error::TrackerError;

/// Manages all paths used by FlowTrack
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Base directory for all FlowTrack data
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Create a new TrackerPaths instance using the platform default location
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TrackerError> {
        Ok(Self {
            base_dir: resolve_default_path()?,
        })
    }

    /// Create TrackerPaths with a custom base directory
    ///
    /// Used by the `--data-dir` flag and by tests.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/flowtrack/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/flowtrack/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TrackerError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TrackerError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| {
                    TrackerError::Io("Could not determine home directory".into())
                })
        })?;
    Ok(config_base.join("flowtrack"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TrackerError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TrackerError::Io("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("flowtrack"))
}
