//! Update command handler with leave-blank-to-keep prompting.

use roster_core::{validate, EmployeeUpdate};

use crate::app::AppContext;
use crate::cli::UpdateArgs;
use crate::helpers::prompt_update_field;
use crate::output::print_employee;
use crate::ui::{badge, Badge, OutputMode};

pub fn handle_update(ctx: &AppContext, args: &UpdateArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    if store.find(&args.id).is_none() {
        anyhow::bail!("no employee with id {:?}", args.id);
    }

    let ui = ctx.ui_context(false, None);
    let flags_given = args.name.is_some()
        || args.date.is_some()
        || args.salary.is_some()
        || args.department.is_some();

    let update = if flags_given {
        EmployeeUpdate {
            name: args.name.clone(),
            joining_date: args.date.clone(),
            salary: args.salary.clone(),
            department: args.department.clone(),
        }
    } else if ui.is_interactive() && !args.no_input {
        println!("Leave a field blank to keep its current value.");
        EmployeeUpdate {
            name: prompt_update_field("New name", |input| {
                check(validate::parse_name(input))
            })?,
            joining_date: prompt_update_field("New joining date (dd/mm/yyyy)", |input| {
                check(validate::parse_date(input))
            })?,
            salary: prompt_update_field("New salary", |input| {
                check(validate::parse_salary(input))
            })?,
            department: prompt_update_field("New department", |_| Ok(()))?,
        }
    } else {
        anyhow::bail!("nothing to update: pass at least one field flag");
    };

    if update.is_empty() {
        if !ctx.quiet() {
            println!("Nothing changed.");
        }
        return Ok(());
    }

    match store.update(&args.id, &update)? {
        Some(employee) => {
            if !ctx.quiet() {
                match ui.mode {
                    OutputMode::Pretty => {
                        println!(
                            "{}",
                            badge(
                                &ui,
                                Badge::Ok,
                                &format!("Updated employee {}", employee.display_id())
                            )
                        );
                        print_employee(&ui, &employee)?;
                    }
                    OutputMode::Plain | OutputMode::Json => {
                        println!("status=ok");
                        println!("employee_id={}", employee.display_id());
                    }
                }
            }
            Ok(())
        }
        None => anyhow::bail!("no employee with id {:?}", args.id),
    }
}

fn check<T>(result: roster_core::Result<T>) -> Result<(), String> {
    result.map(|_| ()).map_err(|err| err.to_string())
}
