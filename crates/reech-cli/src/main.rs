//! Reech CLI
//!
//! Command-line interface for a local Reech ledger

use clap::{Parser, Subcommand};
use reech_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "reech")]
#[command(about = "Reech - seafood supply-chain ledger", long_about = None)]
struct Cli {
    /// Emit JSON log lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create or migrate a ledger database
    Init(commands::init::InitArgs),
    /// Run one contract entry point in its own transaction
    Invoke(commands::invoke::InvokeArgs),
}

fn main() {
    let cli = Cli::parse();

    init(if cli.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    let result = match cli.command {
        Commands::Init(args) => commands::init::execute(args),
        Commands::Invoke(args) => commands::invoke::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
