//! Employee data model and display-identifier derivation.
//!
//! The numeric `sequence_id` is the real key: it is comparable, sortable,
//! and what the store allocates. The user-facing display id (`E001`,
//! `E002`, ...) is derived from it deterministically and parsed back to
//! the numeric key for lookups, which makes lookups insensitive to the
//! case of the `E` prefix.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used wherever an employee date crosses a text boundary.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// One employee's stored data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Monotonically increasing, assigned once at creation, never reused.
    pub sequence_id: u64,

    /// Non-empty display name.
    pub name: String,

    /// Calendar date, no time component.
    pub joining_date: NaiveDate,

    /// Finite and non-negative.
    pub salary: f64,

    /// Free-text department, optional.
    pub department: Option<String>,
}

impl Employee {
    /// The stable, user-facing identifier string for this record.
    pub fn display_id(&self) -> String {
        format_display_id(self.sequence_id)
    }

    /// Joining date rendered as `dd/mm/yyyy`.
    pub fn formatted_date(&self) -> String {
        self.joining_date.format(DATE_FORMAT).to_string()
    }
}

/// Derive the display id for a sequence number.
///
/// Zero-padded to three digits; wider numbers keep all their digits.
pub fn format_display_id(sequence_id: u64) -> String {
    format!("E{:03}", sequence_id)
}

/// Parse a display id back to its numeric sequence key.
///
/// Accepts the `E` prefix in either case followed by decimal digits.
/// Returns `None` for anything else.
pub fn parse_display_id(text: &str) -> Option<u64> {
    let rest = text
        .trim()
        .strip_prefix('E')
        .or_else(|| text.trim().strip_prefix('e'))?;
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok()
}

/// Raw text fields for creating an employee.
///
/// Fields are validated by the store at creation time, so this type can
/// carry unchecked CLI input.
#[derive(Debug, Clone, Default)]
pub struct NewEmployee {
    pub name: String,
    pub joining_date: String,
    pub salary: String,
    pub department: Option<String>,
}

impl NewEmployee {
    pub fn new(
        name: impl Into<String>,
        joining_date: impl Into<String>,
        salary: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            joining_date: joining_date.into(),
            salary: salary.into(),
            department: None,
        }
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }
}

/// Partial raw-text update for an employee.
///
/// A field that is `None` or empty after trimming leaves the stored value
/// untouched; a non-empty field fully replaces it.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub joining_date: Option<String>,
    pub salary: Option<String>,
    pub department: Option<String>,
}

impl EmployeeUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn joining_date(mut self, joining_date: impl Into<String>) -> Self {
        self.joining_date = Some(joining_date.into());
        self
    }

    pub fn salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = Some(salary.into());
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// True when no field would change anything.
    pub fn is_empty(&self) -> bool {
        [
            &self.name,
            &self.joining_date,
            &self.salary,
            &self.department,
        ]
        .iter()
        .all(|field| match field {
            Some(value) => value.trim().is_empty(),
            None => true,
        })
    }
}
