use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::print_employee;

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let ui = ctx.ui_context(args.json, None);

    match store.find(&args.id) {
        Some(employee) => print_employee(&ui, employee),
        None => anyhow::bail!("no employee with id {:?}", args.id),
    }
}
