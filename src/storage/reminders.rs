//! Reminder configuration repository for JSON storage
//!
//! Same shape as the bill repository, with its own independent id counter
//! and a by-bill lookup for the weak bill-to-reminder association.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BillTrackError;
use crate::models::{BillId, ReminderConfig, ReminderId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable reminder data structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct ReminderData {
    #[serde(default = "first_id")]
    next_id: u32,
    reminders: Vec<ReminderConfig>,
}

fn first_id() -> u32 {
    1
}

impl Default for ReminderData {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            reminders: Vec::new(),
        }
    }
}

#[derive(Debug)]
struct ReminderState {
    next_id: u32,
    reminders: HashMap<ReminderId, ReminderConfig>,
}

impl Default for ReminderState {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            reminders: HashMap::new(),
        }
    }
}

/// Repository for reminder configuration persistence
pub struct ReminderRepository {
    path: PathBuf,
    state: RwLock<ReminderState>,
}

impl ReminderRepository {
    /// Create a new reminder repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: RwLock::new(ReminderState::default()),
        }
    }

    fn read_state(&self) -> Result<std::sync::RwLockReadGuard<'_, ReminderState>, BillTrackError> {
        self.state
            .read()
            .map_err(|e| BillTrackError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_state(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, ReminderState>, BillTrackError> {
        self.state
            .write()
            .map_err(|e| BillTrackError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load reminders from disk
    pub fn load(&self) -> Result<(), BillTrackError> {
        let file_data: ReminderData = read_json(&self.path)?;

        let mut state = self.write_state()?;
        state.reminders.clear();

        let mut max_id = 0;
        for reminder in file_data.reminders {
            max_id = max_id.max(reminder.id.value());
            state.reminders.insert(reminder.id, reminder);
        }
        state.next_id = file_data.next_id.max(max_id + 1);

        Ok(())
    }

    /// Save reminders to disk
    pub fn save(&self) -> Result<(), BillTrackError> {
        let state = self.read_state()?;

        let mut reminders: Vec<_> = state.reminders.values().cloned().collect();
        reminders.sort_by_key(|r| r.id);

        let file_data = ReminderData {
            next_id: state.next_id,
            reminders,
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Allocate the next reminder id
    pub fn allocate_id(&self) -> Result<ReminderId, BillTrackError> {
        let mut state = self.write_state()?;
        let id = ReminderId::new(state.next_id);
        state.next_id += 1;
        Ok(id)
    }

    /// Insert or update a reminder configuration
    pub fn upsert(&self, reminder: ReminderConfig) -> Result<(), BillTrackError> {
        let mut state = self.write_state()?;
        state.reminders.insert(reminder.id, reminder);
        Ok(())
    }

    /// Get a reminder by ID
    pub fn get(&self, id: ReminderId) -> Result<Option<ReminderConfig>, BillTrackError> {
        let state = self.read_state()?;
        Ok(state.reminders.get(&id).cloned())
    }

    /// Get the reminder configuration for a bill, if any
    pub fn get_by_bill(&self, bill_id: BillId) -> Result<Option<ReminderConfig>, BillTrackError> {
        let state = self.read_state()?;
        Ok(state
            .reminders
            .values()
            .find(|r| r.bill_id == bill_id)
            .cloned())
    }

    /// Get all reminders, ordered by id
    pub fn get_all(&self) -> Result<Vec<ReminderConfig>, BillTrackError> {
        let state = self.read_state()?;
        let mut reminders: Vec<_> = state.reminders.values().cloned().collect();
        reminders.sort_by_key(|r| r.id);
        Ok(reminders)
    }

    /// Delete a reminder
    pub fn delete(&self, id: ReminderId) -> Result<bool, BillTrackError> {
        let mut state = self.write_state()?;
        Ok(state.reminders.remove(&id).is_some())
    }

    /// Delete the reminder belonging to a bill, if any
    ///
    /// Called when the bill itself is deleted so no configuration is left
    /// pointing at a dead id.
    pub fn delete_by_bill(&self, bill_id: BillId) -> Result<bool, BillTrackError> {
        let mut state = self.write_state()?;
        let found = state
            .reminders
            .values()
            .find(|r| r.bill_id == bill_id)
            .map(|r| r.id);

        match found {
            Some(id) => Ok(state.reminders.remove(&id).is_some()),
            None => Ok(false),
        }
    }

    /// Count reminders
    pub fn count(&self) -> Result<usize, BillTrackError> {
        let state = self.read_state()?;
        Ok(state.reminders.len())
    }
}
