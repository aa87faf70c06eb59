//! Storage layer for BillTrack
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The repositories here are the concrete bill-store and
//! reminder-store collaborators the service layer is built against.

pub mod bills;
pub mod file_io;
pub mod init;
pub mod reminders;

pub use bills::BillRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::{initialize_storage, needs_initialization};
pub use reminders::ReminderRepository;

use crate::config::paths::BillTrackPaths;
use crate::error::BillTrackError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: BillTrackPaths,
    pub bills: BillRepository,
    pub reminders: ReminderRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BillTrackPaths) -> Result<Self, BillTrackError> {
        paths.ensure_directories()?;

        Ok(Self {
            bills: BillRepository::new(paths.bills_file()),
            reminders: ReminderRepository::new(paths.reminders_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BillTrackPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), BillTrackError> {
        self.bills.load()?;
        self.reminders.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), BillTrackError> {
        self.bills.save()?;
        self.reminders.save()?;
        Ok(())
    }
}
