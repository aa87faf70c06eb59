//! Path management for BillTrack
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `BILLTRACK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/billtrack` or `~/.config/billtrack`
//! 3. Windows: `%APPDATA%\billtrack`

use std::path::PathBuf;

use crate::error::BillTrackError;

/// Manages all paths used by BillTrack
#[derive(Debug, Clone)]
pub struct BillTrackPaths {
    /// Base directory for all BillTrack data
    base_dir: PathBuf,
}

impl BillTrackPaths {
    /// Create a new BillTrackPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BillTrackError> {
        let base_dir = if let Ok(custom) = std::env::var("BILLTRACK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BillTrackPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to bills.json
    pub fn bills_file(&self) -> PathBuf {
        self.data_dir().join("bills.json")
    }

    /// Get the path to reminders.json
    pub fn reminders_file(&self) -> PathBuf {
        self.data_dir().join("reminders.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), BillTrackError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BillTrackError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BillTrackError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if BillTrack has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BillTrackError> {
    // Unix (Linux/macOS): XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| {
                    BillTrackError::Config("Could not determine home directory".into())
                })
        })?;
    Ok(config_base.join("billtrack"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BillTrackError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BillTrackError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("billtrack"))
}
