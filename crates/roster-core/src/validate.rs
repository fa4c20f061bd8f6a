//! Parsing user-supplied fields into typed values.
//!
//! Pure functions with no side effects beyond signaling: validation never
//! mutates the store, and callers decide whether to re-prompt or abort.

use chrono::NaiveDate;

use crate::error::{Result, RosterError};

/// Parse an employee name. Rejects input that is empty after trimming.
pub fn parse_name(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RosterError::Validation("name cannot be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Parse a `dd/mm/yyyy` date.
///
/// Day and month must be zero-padded to two digits and the year to four;
/// the result must denote a real calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();
    let parts: Vec<&str> = trimmed.split('/').collect();
    let shape_ok = parts.len() == 3
        && parts[0].len() == 2
        && parts[1].len() == 2
        && parts[2].len() == 4
        && parts
            .iter()
            .all(|part| part.bytes().all(|b| b.is_ascii_digit()));
    if !shape_ok {
        return Err(RosterError::Validation(format!(
            "invalid date {:?} (expected dd/mm/yyyy)",
            trimmed
        )));
    }

    let fields: std::result::Result<Vec<u32>, _> =
        parts.iter().map(|part| part.parse::<u32>()).collect();
    let fields = fields.map_err(|_| {
        RosterError::Validation(format!("invalid date {:?}", trimmed))
    })?;

    NaiveDate::from_ymd_opt(fields[2] as i32, fields[1], fields[0]).ok_or_else(|| {
        RosterError::Validation(format!("{:?} is not a real calendar date", trimmed))
    })
}

/// Parse a salary. Must be a finite decimal number >= 0.
pub fn parse_salary(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|_| {
        RosterError::Validation(format!("invalid salary {:?} (expected a number)", trimmed))
    })?;
    if !value.is_finite() {
        return Err(RosterError::Validation(format!(
            "salary {:?} is not a finite number",
            trimmed
        )));
    }
    if value < 0.0 {
        return Err(RosterError::Validation("salary cannot be negative".to_string()));
    }
    Ok(value)
}

/// Normalize a department. Empty after trimming means "no department".
pub fn parse_department(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
