//! Add command handler with interactive prompting.

use roster_core::NewEmployee;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::{prompt_date, prompt_department, prompt_name, prompt_salary};
use crate::output::print_employee;
use crate::ui::{badge, hint, Badge, OutputMode};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let ui = ctx.ui_context(false, None);
    let interactive = ui.is_interactive() && !args.no_input;

    let name = match &args.name {
        Some(value) => value.clone(),
        None if interactive => prompt_name()?,
        None => anyhow::bail!("--name is required when prompts are disabled"),
    };
    let date = match &args.date {
        Some(value) => value.clone(),
        None if interactive => prompt_date()?,
        None => anyhow::bail!("--date is required when prompts are disabled"),
    };
    let salary = match &args.salary {
        Some(value) => value.clone(),
        None if interactive => prompt_salary()?,
        None => anyhow::bail!("--salary is required when prompts are disabled"),
    };
    let department = match &args.department {
        Some(value) => Some(value.clone()),
        None if interactive => prompt_department()?,
        None => None,
    };

    let mut new_employee = NewEmployee::new(name, date, salary);
    if let Some(department) = department {
        new_employee = new_employee.with_department(department);
    }

    let employee = store.create(new_employee)?;

    if !ctx.quiet() {
        match ui.mode {
            OutputMode::Pretty => {
                println!(
                    "{}",
                    badge(
                        &ui,
                        Badge::Ok,
                        &format!("Added employee {}", employee.display_id())
                    )
                );
                print_employee(&ui, &employee)?;
                println!(
                    "{}",
                    hint(
                        &ui,
                        &format!(
                            "roster show {}  \u{00B7}  roster list",
                            employee.display_id()
                        )
                    )
                );
            }
            OutputMode::Plain | OutputMode::Json => {
                println!("status=ok");
                println!("employee_id={}", employee.display_id());
            }
        }
    }
    Ok(())
}
