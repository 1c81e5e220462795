//! Contract invocation
//!
//! Usage: reech invoke --db <PATH> --caller <ID> [--role <ROLE>]
//!        [--attr NAME=VALUE]... <FUNCTION> [ARGS]...

use clap::Args;
use reech_core::identity::StaticIdentity;
use reech_core::{Contract, ContractConfig, Invocation, Response};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InvokeArgs {
    /// Path to an initialized ledger database
    #[arg(long)]
    pub db: PathBuf,

    /// Contract configuration (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Caller identity
    #[arg(long)]
    pub caller: String,

    /// Value of the caller's `role` attribute
    #[arg(long)]
    pub role: Option<String>,

    /// Value of the caller's `hf.EnrollmentID` attribute
    #[arg(long)]
    pub enrollment_id: Option<String>,

    /// Extra identity attribute, repeatable
    #[arg(long = "attr", value_name = "NAME=VALUE", value_parser = parse_attr)]
    pub attrs: Vec<(String, String)>,

    /// Entry point, e.g. RegisterFisher
    pub function: String,

    /// Positional arguments, passed as strings
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

fn parse_attr(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

fn identity(args: &InvokeArgs) -> StaticIdentity {
    let mut identity = StaticIdentity::new(args.caller.clone());
    if let Some(role) = &args.role {
        identity = identity.with_role(role.clone());
    }
    if let Some(enrollment_id) = &args.enrollment_id {
        identity = identity.with_enrollment_id(enrollment_id.clone());
    }
    for (name, value) in &args.attrs {
        identity = identity.with_attribute(name.clone(), value.clone());
    }
    identity
}

/// Execute invoke command
pub fn execute(args: InvokeArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.db.exists() {
        return Err(format!(
            "no ledger at {}; run `reech init --db {}` first",
            args.db.display(),
            args.db.display()
        )
        .into());
    }

    let config = match &args.config {
        Some(path) => ContractConfig::from_path(path)?,
        None => ContractConfig::default(),
    };
    let contract = Contract::from_config(&config);
    let caller = identity(&args);
    let invocation = Invocation::parse(&args.function, &args.args)
        .map_err(reech_core::ExError::from)?;

    let mut conn = reech_store::db::open_ledger(&args.db)?;
    let execution = reech_engine::execute(&mut conn, &contract, &caller, &invocation)?;

    match execution.response {
        Response::Committed => println!("committed"),
        Response::Payload(json) => println!("{}", json),
    }
    Ok(())
}
