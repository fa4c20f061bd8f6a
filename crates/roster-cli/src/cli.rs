use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use roster_core::VERSION;

/// Roster - a console-driven employee record manager
#[derive(Parser)]
#[command(name = "roster")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the roster file
    #[arg(short, long, global = true, env = "ROSTER_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new employee
    Add(AddArgs),

    /// List employees, optionally filtered and sorted
    List(ListArgs),

    /// Show a single employee by id
    Show(ShowArgs),

    /// Update fields of an existing employee
    Update(UpdateArgs),

    /// Delete an employee
    Delete(DeleteArgs),

    /// Search employees by id or name
    Search(SearchArgs),

    /// Department totals and joining/salary extremes
    Report(ReportArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Employee name
    #[arg(long)]
    pub name: Option<String>,

    /// Joining date (dd/mm/yyyy)
    #[arg(long)]
    pub date: Option<String>,

    /// Salary
    #[arg(long)]
    pub salary: Option<String>,

    /// Department
    #[arg(long)]
    pub department: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Filter by id or name substring
    #[arg(long, value_name = "TERM")]
    pub search: Option<String>,

    /// Sort key (id, name, date, salary)
    #[arg(long, value_name = "KEY")]
    pub sort_by: Option<String>,

    /// Sort in descending order
    #[arg(long)]
    pub desc: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Employee id (e.g., E001)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `update` command
#[derive(Args)]
pub struct UpdateArgs {
    /// Employee id (e.g., E001)
    #[arg(value_name = "ID")]
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New joining date (dd/mm/yyyy)
    #[arg(long)]
    pub date: Option<String>,

    /// New salary
    #[arg(long)]
    pub salary: Option<String>,

    /// New department
    #[arg(long)]
    pub department: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Employee id (e.g., E001)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Search term (id or name substring)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `report` command
#[derive(Args)]
pub struct ReportArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
