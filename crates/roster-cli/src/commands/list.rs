use roster_core::ListQuery;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::print_employee_list;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;

    let mut query = ListQuery::new();
    if let Some(ref term) = args.search {
        query = query.search(term.clone());
    }
    if let Some(ref key) = args.sort_by {
        query = query.sort_by(key.parse()?).descending(args.desc);
    }
    let employees = store.list(&query);

    let ui = ctx.ui_context(args.json, args.format.as_deref());
    print_employee_list(&ui, "list", &employees, ctx.quiet())
}
