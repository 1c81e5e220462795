use reech_core::identity::StaticIdentity;
use reech_core::{invoke, Contract, Invocation, MemoryLedger, Response, Result, TxContext};

#[allow(dead_code)]
pub fn authority() -> StaticIdentity {
    StaticIdentity::new("A001").with_role("authority")
}

/// A fisher whose enrollment id matches `id`
#[allow(dead_code)]
pub fn fisher(id: &str) -> StaticIdentity {
    StaticIdentity::new(id)
        .with_role("fisher")
        .with_enrollment_id(id)
}

#[allow(dead_code)]
pub fn processor() -> StaticIdentity {
    StaticIdentity::new("P001").with_role("processor")
}

#[allow(dead_code)]
pub fn buyer() -> StaticIdentity {
    StaticIdentity::new("U001").with_role("buyer")
}

/// Parse and run one named entry point against `ledger`
#[allow(dead_code)]
pub fn call(
    contract: &Contract,
    ledger: &mut MemoryLedger,
    caller: &StaticIdentity,
    function: &str,
    args: &[&str],
) -> Result<Response> {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    let invocation = Invocation::parse(function, &args)?;
    let mut ctx = TxContext::new(ledger, caller);
    invoke(contract, &mut ctx, &invocation)
}

/// Run a read and return its JSON payload
#[allow(dead_code)]
pub fn read(
    contract: &Contract,
    ledger: &mut MemoryLedger,
    function: &str,
    args: &[&str],
) -> Result<String> {
    let anyone = StaticIdentity::new("reader");
    let response = call(contract, ledger, &anyone, function, args)?;
    Ok(response.payload().unwrap_or_default().to_string())
}

/// Log a catch as its own fisher
#[allow(dead_code)]
pub fn log_catch(
    contract: &Contract,
    ledger: &mut MemoryLedger,
    catch_id: &str,
    fisher_id: &str,
    weight: &str,
    date: &str,
) {
    call(
        contract,
        ledger,
        &fisher(fisher_id),
        "LogCatch",
        &[catch_id, fisher_id, "Tuna", weight, date],
    )
    .expect("catch should log");
}
