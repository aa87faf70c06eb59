//! Bill repository for JSON storage
//!
//! Manages loading and saving bills to bills.json. Ids come from a
//! monotonic counter persisted alongside the data, never from the
//! collection size, so deleting bills can never cause an id collision.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BillTrackError;
use crate::models::{Bill, BillId, NewBill};

use super::file_io::{read_json, write_json_atomic};

/// Serializable bill data structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct BillData {
    #[serde(default = "first_id")]
    next_id: u32,
    bills: Vec<Bill>,
}

fn first_id() -> u32 {
    1
}

impl Default for BillData {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            bills: Vec::new(),
        }
    }
}

/// In-memory state guarded by one lock so id allocation and inserts
/// can't interleave
#[derive(Debug)]
struct BillState {
    next_id: u32,
    bills: HashMap<BillId, Bill>,
}

impl Default for BillState {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            bills: HashMap::new(),
        }
    }
}

/// Repository for bill persistence
pub struct BillRepository {
    path: PathBuf,
    state: RwLock<BillState>,
}

impl BillRepository {
    /// Create a new bill repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: RwLock::new(BillState::default()),
        }
    }

    fn read_state(&self) -> Result<std::sync::RwLockReadGuard<'_, BillState>, BillTrackError> {
        self.state
            .read()
            .map_err(|e| BillTrackError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_state(&self) -> Result<std::sync::RwLockWriteGuard<'_, BillState>, BillTrackError> {
        self.state
            .write()
            .map_err(|e| BillTrackError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load bills from disk
    pub fn load(&self) -> Result<(), BillTrackError> {
        let file_data: BillData = read_json(&self.path)?;

        let mut state = self.write_state()?;
        state.bills.clear();

        let mut max_id = 0;
        for bill in file_data.bills {
            max_id = max_id.max(bill.id.value());
            state.bills.insert(bill.id, bill);
        }

        // Guard against a hand-edited file whose counter lags the data
        state.next_id = file_data.next_id.max(max_id + 1);

        Ok(())
    }

    /// Save bills to disk
    pub fn save(&self) -> Result<(), BillTrackError> {
        let state = self.read_state()?;

        let mut bills: Vec<_> = state.bills.values().cloned().collect();
        bills.sort_by_key(|b| b.id);

        let file_data = BillData {
            next_id: state.next_id,
            bills,
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Add a new bill, assigning it the next id
    pub fn add(&self, draft: NewBill) -> Result<Bill, BillTrackError> {
        let mut state = self.write_state()?;

        let id = BillId::new(state.next_id);
        state.next_id += 1;

        let bill = draft.into_bill(id);
        state.bills.insert(id, bill.clone());
        Ok(bill)
    }

    /// Get a bill by ID
    pub fn get(&self, id: BillId) -> Result<Option<Bill>, BillTrackError> {
        let state = self.read_state()?;
        Ok(state.bills.get(&id).cloned())
    }

    /// Get all bills, ordered by id
    pub fn get_all(&self) -> Result<Vec<Bill>, BillTrackError> {
        let state = self.read_state()?;
        let mut bills: Vec<_> = state.bills.values().cloned().collect();
        bills.sort_by_key(|b| b.id);
        Ok(bills)
    }

    /// Mutate a single bill under one write lock
    ///
    /// Returns the updated bill, or `None` if the id is unknown. The keyed
    /// update replaces the get-all/mutate/replace-all cycle, so concurrent
    /// callers cannot lose each other's writes.
    pub fn update_with<F>(&self, id: BillId, mutate: F) -> Result<Option<Bill>, BillTrackError>
    where
        F: FnOnce(&mut Bill),
    {
        let mut state = self.write_state()?;
        match state.bills.get_mut(&id) {
            Some(bill) => {
                mutate(bill);
                Ok(Some(bill.clone()))
            }
            None => Ok(None),
        }
    }

    /// Replace the entire collection
    ///
    /// Used by seeding and restore paths; the id counter is advanced past
    /// the highest incoming id so future adds stay collision-free.
    pub fn replace_all(&self, bills: Vec<Bill>) -> Result<(), BillTrackError> {
        let mut state = self.write_state()?;

        state.bills.clear();
        let mut max_id = 0;
        for bill in bills {
            max_id = max_id.max(bill.id.value());
            state.bills.insert(bill.id, bill);
        }
        state.next_id = state.next_id.max(max_id + 1);

        Ok(())
    }

    /// Delete a bill
    pub fn delete(&self, id: BillId) -> Result<bool, BillTrackError> {
        let mut state = self.write_state()?;
        Ok(state.bills.remove(&id).is_some())
    }

    /// Check if a bill exists
    pub fn exists(&self, id: BillId) -> Result<bool, BillTrackError> {
        let state = self.read_state()?;
        Ok(state.bills.contains_key(&id))
    }

    /// Count bills
    pub fn count(&self) -> Result<usize, BillTrackError> {
        let state = self.read_state()?;
        Ok(state.bills.len())
    }
}
