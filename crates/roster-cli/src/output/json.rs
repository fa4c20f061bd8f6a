//! JSON output formatting.

use roster_core::query;
use roster_core::Employee;

/// Convert an employee to JSON for output.
pub fn employee_json(employee: &Employee) -> serde_json::Value {
    serde_json::json!({
        "id": employee.display_id(),
        "sequence_id": employee.sequence_id,
        "name": employee.name,
        "joining_date": employee.formatted_date(),
        "salary": employee.salary,
        "department": employee.department,
    })
}

/// Convert multiple employees to a JSON array for output.
pub fn employees_json(employees: &[Employee]) -> serde_json::Value {
    serde_json::Value::Array(employees.iter().map(employee_json).collect())
}

/// The full report view: department totals plus both extreme pairs.
pub fn report_json(records: &[Employee]) -> serde_json::Value {
    let departments: serde_json::Map<String, serde_json::Value> =
        query::department_totals(records)
            .iter()
            .map(|(name, totals)| {
                (
                    name.clone(),
                    serde_json::json!({
                        "total_salary": totals.total_salary,
                        "count": totals.count,
                    }),
                )
            })
            .collect();
    let by_date = query::extreme_by_date(records);
    let by_salary = query::extreme_by_salary(records);

    serde_json::json!({
        "employee_count": records.len(),
        "departments": departments,
        "earliest_joined": by_date.map(|(earliest, _)| employee_json(earliest)),
        "latest_joined": by_date.map(|(_, latest)| employee_json(latest)),
        "lowest_salary": by_salary.map(|(lowest, _)| employee_json(lowest)),
        "highest_salary": by_salary.map(|(_, highest)| employee_json(highest)),
    })
}
