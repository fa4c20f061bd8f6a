//! Roster CLI - a console-driven employee record manager.
//!
//! This is the command-line interface for Roster. Each subcommand maps
//! 1:1 onto a core operation; the core crate owns the records, this crate
//! owns prompting and presentation.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod output;
mod ui;

use clap::Parser;

use app::AppContext;
use cli::{Cli, Commands};
use ui::{badge, Badge, UiContext};

fn main() {
    let _logger = init_logging();
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    let result = match &cli.command {
        Commands::Add(args) => commands::handle_add(&ctx, args),
        Commands::List(args) => commands::handle_list(&ctx, args),
        Commands::Show(args) => commands::handle_show(&ctx, args),
        Commands::Update(args) => commands::handle_update(&ctx, args),
        Commands::Delete(args) => commands::handle_delete(&ctx, args),
        Commands::Search(args) => commands::handle_search(&ctx, args),
        Commands::Report(args) => commands::handle_report(&ctx, args),
        Commands::Completions { shell } => commands::handle_completions(*shell),
    };

    if let Err(err) = result {
        let ui = UiContext::from_env(false, None);
        eprintln!("{}", badge(&ui, Badge::Err, &format!("{:#}", err)));
        std::process::exit(1);
    }
}

/// Start stderr logging at the level named by `ROSTER_LOG`.
///
/// Logging must never abort a command: a bad spec just means no logs.
fn init_logging() -> Option<flexi_logger::LoggerHandle> {
    let spec = std::env::var("ROSTER_LOG").unwrap_or_else(|_| "info".to_string());
    flexi_logger::Logger::try_with_str(&spec)
        .ok()?
        .log_to_stderr()
        .start()
        .ok()
}
