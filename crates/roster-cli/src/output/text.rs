//! Text and table output formatting.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use roster_core::query;
use roster_core::Employee;

use crate::ui::{badge, header, kv, Badge, OutputMode, UiContext};

use super::json::{employee_json, employees_json, report_json};

/// Print a list of employees in the resolved output mode.
pub fn print_employee_list(
    ui: &UiContext,
    command: &str,
    employees: &[Employee],
    quiet: bool,
) -> anyhow::Result<()> {
    match ui.mode {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&employees_json(employees))?);
        }
        OutputMode::Plain => {
            for employee in employees {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    employee.display_id(),
                    employee.name,
                    employee.formatted_date(),
                    employee.salary,
                    employee.department.as_deref().unwrap_or("")
                );
            }
        }
        OutputMode::Pretty => {
            if !quiet {
                let context = format!("{} employees", employees.len());
                println!("{}", header(ui, command, Some(&context)));
            }
            if employees.is_empty() {
                println!("{}", badge(ui, Badge::Info, "No employees."));
            } else {
                println!("{}", employee_table(ui, employees));
            }
        }
    }
    Ok(())
}

/// Print one employee as key-value lines (or JSON).
pub fn print_employee(ui: &UiContext, employee: &Employee) -> anyhow::Result<()> {
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&employee_json(employee))?);
        return Ok(());
    }
    println!("{}", kv(ui, "Employee ID", &employee.display_id()));
    println!("{}", kv(ui, "Name", &employee.name));
    println!("{}", kv(ui, "Joining Date", &employee.formatted_date()));
    println!("{}", kv(ui, "Salary", &format!("{:.2}", employee.salary)));
    println!(
        "{}",
        kv(ui, "Department", employee.department.as_deref().unwrap_or("-"))
    );
    Ok(())
}

/// Print the aggregate report: department totals and both extreme pairs.
pub fn print_report(ui: &UiContext, records: &[Employee], quiet: bool) -> anyhow::Result<()> {
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&report_json(records))?);
        return Ok(());
    }

    if records.is_empty() {
        if ui.mode.is_pretty() {
            println!("{}", badge(ui, Badge::Info, "No employees."));
        } else {
            println!("employee_count=0");
        }
        return Ok(());
    }

    if ui.mode.is_pretty() && !quiet {
        let context = format!("{} employees", records.len());
        println!("{}", header(ui, "report", Some(&context)));
    }

    let totals = query::department_totals(records);
    if ui.mode.is_pretty() {
        if !totals.is_empty() {
            println!("{}", department_table(ui, &totals));
        }
    } else {
        for (department, totals) in &totals {
            println!(
                "department={} total_salary={:.2} count={}",
                department, totals.total_salary, totals.count
            );
        }
    }

    if let Some((earliest, latest)) = query::extreme_by_date(records) {
        println!("{}", kv(ui, "Earliest joined", &employee_summary(earliest)));
        println!("{}", kv(ui, "Latest joined", &employee_summary(latest)));
    }
    if let Some((lowest, highest)) = query::extreme_by_salary(records) {
        println!("{}", kv(ui, "Lowest salary", &salary_summary(lowest)));
        println!("{}", kv(ui, "Highest salary", &salary_summary(highest)));
    }
    Ok(())
}

fn employee_summary(employee: &Employee) -> String {
    format!(
        "{} {} ({})",
        employee.display_id(),
        employee.name,
        employee.formatted_date()
    )
}

fn salary_summary(employee: &Employee) -> String {
    format!(
        "{} {} ({:.2})",
        employee.display_id(),
        employee.name,
        employee.salary
    )
}

fn employee_table(ui: &UiContext, employees: &[Employee]) -> Table {
    let mut table = new_table(ui);
    table.set_header(vec!["ID", "Name", "Joining Date", "Department", "Salary"]);
    for employee in employees {
        table.add_row(vec![
            Cell::new(employee.display_id()),
            Cell::new(&employee.name),
            Cell::new(employee.formatted_date()),
            Cell::new(employee.department.as_deref().unwrap_or("-")),
            Cell::new(format!("{:.2}", employee.salary)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

fn department_table(
    ui: &UiContext,
    totals: &std::collections::BTreeMap<String, query::DepartmentTotals>,
) -> Table {
    let mut table = new_table(ui);
    table.set_header(vec!["Department", "Total Salary", "Employees"]);
    for (department, entry) in totals {
        table.add_row(vec![
            Cell::new(department),
            Cell::new(format!("{:.2}", entry.total_salary)).set_alignment(CellAlignment::Right),
            Cell::new(entry.count).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

fn new_table(ui: &UiContext) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(ui.width as u16);
    table
}
