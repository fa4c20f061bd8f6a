//! Storage backend trait definition.

use crate::error::Result;
use crate::record::Employee;

/// Persistence backend for the employee store.
///
/// Implementations own the full persisted representation of the record
/// list. The store always hands `save` the complete live collection, in
/// store order; there is no incremental log.
pub trait RecordStorage {
    /// Read all persisted records, in persisted order.
    ///
    /// A missing file is not an error: first runs start empty. Rows that
    /// cannot be decoded are skipped rather than failing the load.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Storage` when the backing file exists but
    /// cannot be read.
    fn load(&self) -> Result<Vec<Employee>>;

    /// Overwrite the persisted representation with `records`.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Storage` when the write fails. The previous
    /// contents must survive a failed write.
    fn save(&self, records: &[Employee]) -> Result<()>;
}
