//! Delimited flat-file persistence.
//!
//! One row per record, comma-separated:
//! `display_id,name,joining_date,salary,department`. Rows with exactly
//! four fields decode with no department. Fields containing the
//! delimiter, a double quote, or a newline are wrapped in double quotes
//! with embedded quotes doubled.
//!
//! Saves are staged in a sibling temp file and renamed into place, so a
//! failed write never truncates the previous contents.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{Result, RosterError};
use crate::fs::replace_file;
use crate::record::{parse_display_id, Employee};
use crate::storage::RecordStorage;
use crate::validate;

const DELIMITER: char = ',';

/// Flat-file storage backend.
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStorage for CsvFile {
    fn load(&self) -> Result<Vec<Employee>> {
        if !self.path.exists() {
            debug!("no roster file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|err| {
            RosterError::Storage(format!(
                "failed to read {}: {}",
                self.path.display(),
                err
            ))
        })?;

        let mut records = Vec::new();
        for (row_number, fields) in split_rows(&contents).into_iter().enumerate() {
            match decode_fields(&fields) {
                Ok(employee) => records.push(employee),
                Err(reason) => warn!(
                    "skipping row {} of {}: {}",
                    row_number + 1,
                    self.path.display(),
                    reason
                ),
            }
        }
        debug!(
            "loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    fn save(&self, records: &[Employee]) -> Result<()> {
        let mut contents = String::new();
        for employee in records {
            contents.push_str(&encode_row(employee));
            contents.push('\n');
        }

        let temp_path = self.path.with_extension("csv.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|err| {
            RosterError::Storage(format!(
                "failed to create {}: {}",
                temp_path.display(),
                err
            ))
        })?;
        file.write_all(contents.as_bytes())
            .and_then(|_| file.sync_all())
            .map_err(|err| {
                let _ = fs::remove_file(&temp_path);
                RosterError::Storage(format!(
                    "failed to write {}: {}",
                    temp_path.display(),
                    err
                ))
            })?;
        drop(file);

        replace_file(&temp_path, &self.path).map_err(|err| {
            RosterError::Storage(format!(
                "failed to replace {}: {}",
                self.path.display(),
                err
            ))
        })?;

        debug!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

fn encode_row(employee: &Employee) -> String {
    let fields = [
        employee.display_id(),
        employee.name.clone(),
        employee.formatted_date(),
        employee.salary.to_string(),
        employee.department.clone().unwrap_or_default(),
    ];
    fields
        .iter()
        .map(|field| quote_field(field))
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string())
}

fn quote_field(field: &str) -> String {
    if field.contains(DELIMITER) || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Split file contents into rows of fields, honoring quoted fields.
///
/// Row boundaries are newlines outside quotes; empty rows are dropped. An
/// unterminated quote swallows the rest of the file into one row, which
/// then fails the field-count check and is skipped by the caller.
fn split_rows(contents: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut row_started = false;
    let mut in_quotes = false;

    let mut chars = contents.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
            continue;
        }
        match c {
            '"' if current.is_empty() => {
                in_quotes = true;
                row_started = true;
            }
            DELIMITER => {
                fields.push(std::mem::take(&mut current));
                row_started = true;
            }
            '\n' => {
                if row_started || !current.is_empty() {
                    fields.push(std::mem::take(&mut current));
                    rows.push(std::mem::take(&mut fields));
                }
                row_started = false;
            }
            '\r' => {}
            _ => {
                current.push(c);
                row_started = true;
            }
        }
    }
    if row_started || !current.is_empty() {
        fields.push(current);
        rows.push(fields);
    }
    rows
}

fn decode_fields(fields: &[String]) -> std::result::Result<Employee, String> {
    let department = match fields.len() {
        4 => None,
        5 => validate::parse_department(&fields[4]),
        n => return Err(format!("expected 4 or 5 fields, found {}", n)),
    };

    let sequence_id = parse_display_id(&fields[0])
        .ok_or_else(|| format!("bad employee id {:?}", fields[0]))?;
    let name = validate::parse_name(&fields[1]).map_err(|err| err.to_string())?;
    let joining_date = validate::parse_date(&fields[2]).map_err(|err| err.to_string())?;
    let salary = validate::parse_salary(&fields[3]).map_err(|err| err.to_string())?;

    Ok(Employee {
        sequence_id,
        name,
        joining_date,
        salary,
        department,
    })
}
