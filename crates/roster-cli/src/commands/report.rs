use crate::app::AppContext;
use crate::cli::ReportArgs;
use crate::output::print_report;

pub fn handle_report(ctx: &AppContext, args: &ReportArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let ui = ctx.ui_context(args.json, None);
    print_report(&ui, store.records(), ctx.quiet())
}
