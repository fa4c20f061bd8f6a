//! Delete command handler with confirmation.

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::helpers::confirm;
use crate::ui::{badge, Badge, OutputMode};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let ui = ctx.ui_context(false, None);

    let employee = match store.find(&args.id) {
        Some(employee) => employee.clone(),
        None => anyhow::bail!("no employee with id {:?}", args.id),
    };

    if !args.yes {
        if !ui.is_interactive() {
            anyhow::bail!("refusing to delete without --yes when prompts are unavailable");
        }
        let prompt = format!(
            "Delete employee {} ({})?",
            employee.display_id(),
            employee.name
        );
        if !confirm(&prompt)? {
            if !ctx.quiet() {
                println!("Delete cancelled.");
            }
            return Ok(());
        }
    }

    store.delete(&args.id)?;

    if !ctx.quiet() {
        match ui.mode {
            OutputMode::Pretty => {
                println!(
                    "{}",
                    badge(
                        &ui,
                        Badge::Ok,
                        &format!("Deleted employee {}", employee.display_id())
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
