//! Output formatting helpers for the CLI.
//!
//! This module renders employees and reports in the three output modes
//! (JSON, plain, pretty table).

mod json;
mod text;

// Re-export public API
pub use json::{employee_json, employees_json, report_json};
pub use text::{print_employee, print_employee_list, print_report};
