use roster_core::ListQuery;

use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::output::print_employee_list;

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let employees = store.list(&ListQuery::new().search(args.query.clone()));

    let ui = ctx.ui_context(args.json, args.format.as_deref());
    print_employee_list(&ui, "search", &employees, ctx.quiet())
}
