use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use flowtrack::audit::AuditLogger;
use flowtrack::auth::{PasswordGate, StaticPassword};
use flowtrack::cli::Session;
use flowtrack::config::TrackerPaths;
use flowtrack::models::Money;
use flowtrack::storage::ExpenseStore;

/// Stand-in secret for the stub credential check
const DEFAULT_PASSWORD: &str = "mypassword";

/// Process default monthly budget; changeable at runtime, never persisted
const DEFAULT_BUDGET: &str = "10000";

#[derive(Parser)]
#[command(
    name = "flowtrack",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "FlowTrack records dated expenses with an amount and category, \
                  keeps them in a durable local store, and reports remaining \
                  budget, category breakdowns, and monthly totals. Backups are \
                  plain CSV files."
)]
struct Cli {
    /// Base directory for stored data (defaults to the platform config dir)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Monthly budget for this session
    #[arg(long, default_value = DEFAULT_BUDGET)]
    budget: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    paths.ensure_directories()?;

    let budget = Money::parse(&cli.budget)
        .map_err(|e| anyhow::anyhow!("invalid --budget value: {}", e))?;

    let store = ExpenseStore::new(paths.expenses_file());
    store.load()?;

    let audit = AuditLogger::new(paths.audit_log());
    let gate = PasswordGate::new(StaticPassword::new(DEFAULT_PASSWORD));

    let mut session = Session::new(&store, &audit, budget);
    session.run(&gate)?;

    Ok(())
}
