//! Ledger initialization
//!
//! Usage: reech init --db <PATH>

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Path to the ledger database (created if missing)
    #[arg(long)]
    pub db: PathBuf,
}

/// Execute init command
pub fn execute(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = args.db.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let conn = reech_store::db::open_ledger(&args.db)?;
    let applied = reech_store::migrations::applied_migrations(&conn)?;

    println!(
        "Ledger ready at {} ({} migrations)",
        args.db.display(),
        applied.len()
    );
    Ok(())
}
