//! In-memory storage backend for tests and ephemeral runs.

use std::cell::RefCell;

use crate::error::Result;
use crate::record::Employee;
use crate::storage::RecordStorage;

/// Keeps the "persisted" records in process memory.
///
/// Single-threaded by design, like the rest of the store; interior
/// mutability lets `save` keep the same `&self` contract as the file
/// backend.
#[derive(Default)]
pub struct Memory {
    records: RefCell<Vec<Employee>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend with records, as if they had been persisted by an
    /// earlier run.
    pub fn with_records(records: Vec<Employee>) -> Self {
        Self {
            records: RefCell::new(records),
        }
    }
}

impl RecordStorage for Memory {
    fn load(&self) -> Result<Vec<Employee>> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[Employee]) -> Result<()> {
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}
