//! Roster — employee registry CLI.
//!
//! # Usage
//!
//! ```text
//! roster [--file <path>] add base|hourly|sales|lead --id <id> --salary <n> --department <name> [...]
//! roster remove <id>
//! roster get <id> [--json]
//! roster list [--json]
//! roster budget <department>
//! roster departments
//! roster top-managers
//! roster prune --salary-above <n>
//! ```
//!
//! The data file defaults to `~/.roster/company.jsonl`; `--file` or
//! `ROSTER_FILE` overrides it. Log verbosity follows `RUST_LOG`.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use commands::{
    add::AddCommand,
    query::{BudgetArgs, GetArgs, ListArgs},
    remove::{PruneArgs, RemoveArgs},
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Manage an employee roster stored as JSON lines",
    long_about = None,
)]
struct Cli {
    /// Data file to operate on (defaults to ~/.roster/company.jsonl).
    #[arg(long, short = 'f', global = true, env = "ROSTER_FILE", value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Register a new employee.
    Add {
        #[command(subcommand)]
        command: AddCommand,
    },

    /// Remove an employee by id.
    Remove(RemoveArgs),

    /// Show a single employee.
    Get(GetArgs),

    /// List every employee in id order.
    List(ListArgs),

    /// Total salary of a department.
    Budget(BudgetArgs),

    /// List departments that have at least one employee.
    Departments,

    /// Show the managers sharing the highest factor.
    TopManagers,

    /// Remove every employee whose salary exceeds a threshold.
    Prune(PruneArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let path = match cli.file {
        Some(path) => path,
        None => roster_store::paths::data_path().context("could not determine data file")?,
    };
    tracing::debug!(path = %path.display(), "using data file");

    match cli.command {
        Commands::Add { command } => commands::add::run(&path, command),
        Commands::Remove(args) => args.run(&path),
        Commands::Get(args) => args.run(&path),
        Commands::List(args) => args.run(&path),
        Commands::Budget(args) => args.run(&path),
        Commands::Departments => commands::query::departments(&path),
        Commands::TopManagers => commands::query::top_managers(&path),
        Commands::Prune(args) => args.run(&path),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
