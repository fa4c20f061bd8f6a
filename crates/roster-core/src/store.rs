//! The live employee collection and its CRUD operations.
//!
//! `EmployeeStore` is an explicitly owned struct: it holds the in-memory
//! record list, the sequence counter, and a persistence backend. Every
//! successful mutation synchronously rewrites the whole persisted file
//! through the backend - a deliberate simplicity/durability trade-off.

use log::{info, warn};

use crate::error::Result;
use crate::query::{self, SortKey};
use crate::record::{parse_display_id, Employee, EmployeeUpdate, NewEmployee};
use crate::storage::RecordStorage;
use crate::validate;

/// Filter and ordering options for `EmployeeStore::list`.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Case-insensitive substring filter over display id and name.
    pub search: Option<String>,

    /// Sort key; `None` keeps store order.
    pub sort_by: Option<SortKey>,

    /// Reverse the sort direction.
    pub descending: bool,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sort_by = Some(key);
        self
    }

    pub fn descending(mut self, descending: bool) -> Self {
        self.descending = descending;
        self
    }
}

/// The in-memory collection of employee records plus the id generator.
pub struct EmployeeStore {
    records: Vec<Employee>,
    next_sequence_id: u64,
    backend: Box<dyn RecordStorage>,
}

impl EmployeeStore {
    /// Open a store over `backend`, loading any persisted records.
    ///
    /// Loading is best-effort: a backend that fails to load degrades to an
    /// empty store, with the failure logged. The sequence generator is
    /// advanced to one past the highest identifier found, so ids are never
    /// reissued across a reload.
    pub fn open(backend: Box<dyn RecordStorage>) -> Self {
        let records = match backend.load() {
            Ok(records) => records,
            Err(err) => {
                warn!("load failed, starting with an empty store: {}", err);
                Vec::new()
            }
        };
        let next_sequence_id = records
            .iter()
            .map(|employee| employee.sequence_id)
            .max()
            .map_or(1, |highest| highest + 1);
        Self {
            records,
            next_sequence_id,
            backend,
        }
    }

    /// Validate `new`, allocate the next identifier, append, and persist.
    ///
    /// # Errors
    ///
    /// `RosterError::Validation` when a field is malformed (the store is
    /// left untouched), `RosterError::Storage` when the flush fails.
    pub fn create(&mut self, new: NewEmployee) -> Result<Employee> {
        let name = validate::parse_name(&new.name)?;
        let joining_date = validate::parse_date(&new.joining_date)?;
        let salary = validate::parse_salary(&new.salary)?;
        let department = new
            .department
            .as_deref()
            .and_then(validate::parse_department);

        let employee = Employee {
            sequence_id: self.next_sequence_id,
            name,
            joining_date,
            salary,
            department,
        };
        self.next_sequence_id += 1;
        self.records.push(employee.clone());
        self.flush()?;
        info!("created employee {}", employee.display_id());
        Ok(employee)
    }

    /// Look up a record by display id. Absence is a value, not an error.
    pub fn find(&self, display_id: &str) -> Option<&Employee> {
        let sequence_id = parse_display_id(display_id)?;
        self.records
            .iter()
            .find(|employee| employee.sequence_id == sequence_id)
    }

    /// Apply a partial update to the record with `display_id`.
    ///
    /// Fields that are absent or empty after trimming keep their prior
    /// value; non-empty fields are validated and fully replace it. Every
    /// supplied field is parsed before the record is touched, so a
    /// validation failure leaves the store unchanged.
    ///
    /// Returns `Ok(None)` when no record matches.
    pub fn update(
        &mut self,
        display_id: &str,
        update: &EmployeeUpdate,
    ) -> Result<Option<Employee>> {
        let index = match parse_display_id(display_id).and_then(|sequence_id| {
            self.records
                .iter()
                .position(|employee| employee.sequence_id == sequence_id)
        }) {
            Some(index) => index,
            None => return Ok(None),
        };

        let name = match supplied(&update.name) {
            Some(text) => Some(validate::parse_name(text)?),
            None => None,
        };
        let joining_date = match supplied(&update.joining_date) {
            Some(text) => Some(validate::parse_date(text)?),
            None => None,
        };
        let salary = match supplied(&update.salary) {
            Some(text) => Some(validate::parse_salary(text)?),
            None => None,
        };
        let department = supplied(&update.department).and_then(validate::parse_department);

        let employee = &mut self.records[index];
        if let Some(name) = name {
            employee.name = name;
        }
        if let Some(joining_date) = joining_date {
            employee.joining_date = joining_date;
        }
        if let Some(salary) = salary {
            employee.salary = salary;
        }
        if let Some(department) = department {
            employee.department = Some(department);
        }
        let updated = employee.clone();
        self.flush()?;
        info!("updated employee {}", updated.display_id());
        Ok(Some(updated))
    }

    /// Remove the record with `display_id` and persist.
    ///
    /// Returns the removed record, or `Ok(None)` when no record matches.
    pub fn delete(&mut self, display_id: &str) -> Result<Option<Employee>> {
        let index = match parse_display_id(display_id).and_then(|sequence_id| {
            self.records
                .iter()
                .position(|employee| employee.sequence_id == sequence_id)
        }) {
            Some(index) => index,
            None => return Ok(None),
        };

        let removed = self.records.remove(index);
        self.flush()?;
        info!("deleted employee {}", removed.display_id());
        Ok(Some(removed))
    }

    /// All live records in store order, optionally filtered and sorted.
    pub fn list(&self, query: &ListQuery) -> Vec<Employee> {
        let mut result = match &query.search {
            Some(term) => query::search(&self.records, term),
            None => self.records.clone(),
        };
        if let Some(key) = query.sort_by {
            query::sort_employees(&mut result, key, query.descending);
        }
        result
    }

    /// Read access to the live records, in store order.
    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn flush(&self) -> Result<()> {
        self.backend.save(&self.records)
    }
}

/// A field counts as supplied only when present and non-empty after
/// trimming; everything else means "keep the stored value".
fn supplied(field: &Option<String>) -> Option<&str> {
    match field {
        Some(value) if !value.trim().is_empty() => Some(value.as_str()),
        _ => None,
    }
}
