//! One invocation, one SQLite transaction.

#![allow(clippy::result_large_err)]

use reech_core::errors::ExError;
use reech_core::identity::IdentityOracle;
use reech_core::{invoke, Contract, Invocation, Response, TxContext};
use reech_core_types::{InvocationContext, TxId};
use reech_store::errors::{from_rusqlite, Result};
use reech_store::SqliteLedger;
use rusqlite::{Connection, TransactionBehavior};
use tracing::debug;
use uuid::Uuid;

/// Outcome of a committed invocation
#[derive(Debug, Clone)]
pub struct Execution {
    pub response: Response,
    pub context: InvocationContext,
}

/// Run `invocation` inside its own transaction
///
/// Writes take the write lock up front (`IMMEDIATE`) so a concurrent writer
/// waits at `BEGIN` rather than failing on lock upgrade. The transaction
/// commits only if the contract returns `Ok`; any error rolls it back, so a
/// failed invocation leaves no trace in the database.
///
/// # Errors
///
/// Returns the contract's error converted to `ExError`, annotated with the
/// entry point, the record id and the request/transaction ids; or a
/// `Persistence` error if the transaction cannot begin or commit.
pub fn execute(
    conn: &mut Connection,
    contract: &Contract,
    identity: &dyn IdentityOracle,
    invocation: &Invocation,
) -> Result<Execution> {
    let context = InvocationContext::new().with_tx_id(TxId::new(Uuid::now_v7().to_string()));
    let behavior = if invocation.is_write() {
        TransactionBehavior::Immediate
    } else {
        TransactionBehavior::Deferred
    };

    let tx = conn
        .transaction_with_behavior(behavior)
        .map_err(|e| annotate(from_rusqlite(e), invocation, &context))?;

    let outcome = {
        let mut ledger = SqliteLedger::new(&tx);
        let mut ctx = TxContext::new(&mut ledger, identity);
        invoke(contract, &mut ctx, invocation)
    };

    match outcome {
        Ok(response) => {
            tx.commit()
                .map_err(|e| annotate(from_rusqlite(e), invocation, &context))?;
            debug!(
                op = invocation.name(),
                tx_id = ?context.tx_id,
                "transaction committed"
            );
            Ok(Execution { response, context })
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback() {
                tracing::warn!(error = %rollback_err, "rollback failed");
            }
            debug!(op = invocation.name(), "transaction rolled back");
            Err(annotate(err.into(), invocation, &context))
        }
    }
}

fn annotate(err: ExError, invocation: &Invocation, context: &InvocationContext) -> ExError {
    let mut err = err
        .with_op(invocation.name())
        .with_request_id(context.request_id.clone());
    if let Some(tx_id) = &context.tx_id {
        err = err.with_tx_id(tx_id.clone());
    }
    if err.entity_id().is_none() {
        if let Some(id) = invocation.entity_id() {
            err = err.with_entity_id(id);
        }
    }
    err
}
