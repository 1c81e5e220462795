//! Invocation boundary
//!
//! `invoke()` is the single entry point a host calls once per transaction.
//! It owns the start/end log pair for the call; operations underneath log
//! detail at debug level only.
//!
//! ## Atomicity Contract
//!
//! - **All-or-nothing per operation**: every write happens after the last
//!   check that can fail, so a failed call leaves no partial record behind
//! - **No panics**: invalid input returns typed errors
//! - **No carried state**: nothing survives from one call to the next except
//!   what was written to the ledger
//!
//! ## Example
//!
//! ```
//! use reech_core::identity::StaticIdentity;
//! use reech_core::{invoke, Contract, Invocation, MemoryLedger, Response, TxContext};
//!
//! let contract = Contract::default();
//! let mut ledger = MemoryLedger::new();
//! let authority = StaticIdentity::new("A1").with_role("authority");
//! let mut ctx = TxContext::new(&mut ledger, &authority);
//!
//! let args = ["F001", "John Doe", "GOV123"].map(String::from);
//! let register = Invocation::parse("RegisterFisher", &args).unwrap();
//! assert_eq!(invoke(&contract, &mut ctx, &register).unwrap(), Response::Committed);
//!
//! let get = Invocation::parse("GetFisher", &["F001".to_string()]).unwrap();
//! let payload = invoke(&contract, &mut ctx, &get).unwrap();
//! assert!(payload.payload().unwrap().contains(r#""role":"fisher""#));
//! ```

use std::time::Instant;

use crate::commands::Invocation;
use crate::contract::{Contract, TxContext};
use crate::errors::{ReechError, Result};
use crate::identity::{IdentityOracle, ROLE_ATTRIBUTE};
use crate::ops::{aggregate_ops, asset_ops, harvest_ops, order_ops, participant_ops};
use crate::report;
use crate::{log_op_end, log_op_error, log_op_start};

/// What a successful invocation hands back to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A write committed; there is no payload
    Committed,
    /// JSON returned by a read
    Payload(String),
}

impl Response {
    pub fn payload(&self) -> Option<&str> {
        match self {
            Response::Committed => None,
            Response::Payload(json) => Some(json),
        }
    }
}

/// Run one invocation against the ledger bound in `ctx`
///
/// # Errors
///
/// Returns whatever the underlying operation returns; see `ReechError` for
/// the taxonomy. Errors are logged here at warn level with their stable code.
pub fn invoke(
    contract: &Contract,
    ctx: &mut TxContext<'_>,
    invocation: &Invocation,
) -> Result<Response> {
    let op = invocation.name();
    let start = Instant::now();
    log_op_start!(op, entity_id = invocation.entity_id());

    let result = dispatch(contract, ctx, invocation);
    let duration_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = duration_ms);
        }
        Err(err @ ReechError::AuthorizationDenied { .. }) => {
            let caller = ctx.identity.caller_id().ok();
            let role = ctx.identity.attribute(ROLE_ATTRIBUTE).ok().flatten();
            log_op_error!(
                op,
                err.clone(),
                duration_ms = duration_ms,
                caller = caller.as_deref(),
                role = role.as_deref()
            );
        }
        Err(err) => {
            log_op_error!(op, err.clone(), duration_ms = duration_ms);
        }
    }
    result
}

fn dispatch(
    contract: &Contract,
    ctx: &mut TxContext<'_>,
    invocation: &Invocation,
) -> Result<Response> {
    match invocation {
        Invocation::RegisterFisher { id, name, govt_id } => {
            participant_ops::register_participant(contract, ctx, id, name, govt_id)?;
            Ok(Response::Committed)
        }
        Invocation::GetFisher { id } => {
            let participant = participant_ops::get_participant(contract, ctx, id)?;
            json(&participant)
        }
        Invocation::LogCatch {
            catch_id,
            fisher_id,
            species,
            weight_kg,
            date,
        } => {
            harvest_ops::log_event(
                contract, ctx, catch_id, fisher_id, species, weight_kg, date,
            )?;
            Ok(Response::Committed)
        }
        Invocation::GetCatch { catch_id } => {
            let event = harvest_ops::get_event(contract, ctx, catch_id)?;
            json(&event)
        }
        Invocation::CreateBatch {
            batch_id,
            catch_ids,
            processor_id,
            date,
        } => {
            aggregate_ops::create_aggregate(contract, ctx, batch_id, catch_ids, processor_id, date)?;
            Ok(Response::Committed)
        }
        Invocation::TrackBatch { batch_id } => Ok(Response::Payload(
            aggregate_ops::track_aggregate(contract, ctx, batch_id)?,
        )),
        Invocation::PlaceOrder {
            order_id,
            batch_id,
            buyer_id,
            date,
        } => {
            order_ops::place_order(contract, ctx, order_id, batch_id, buyer_id, date)?;
            Ok(Response::Committed)
        }
        Invocation::GetOrder { order_id } => {
            let order = order_ops::get_order(contract, ctx, order_id)?;
            json(&order)
        }
        Invocation::GenerateReport {
            start_date,
            end_date,
        } => {
            let events = report::generate_report(contract, ctx, start_date, end_date)?;
            Ok(Response::Payload(report::report_payload(&events)?))
        }
        Invocation::CreateAsset {
            id,
            color,
            size,
            owner,
            appraised_value,
        } => {
            asset_ops::create_asset(contract, ctx, id, color, size, owner, appraised_value)?;
            Ok(Response::Committed)
        }
        Invocation::ReadAsset { id } => {
            let asset = asset_ops::read_asset(contract, ctx, id)?;
            json(&asset)
        }
        Invocation::UpdateAsset {
            id,
            color,
            size,
            appraised_value,
        } => {
            asset_ops::update_asset(contract, ctx, id, color, size, appraised_value)?;
            Ok(Response::Committed)
        }
        Invocation::TransferAsset { id, new_owner } => {
            asset_ops::transfer_asset(contract, ctx, id, new_owner)?;
            Ok(Response::Committed)
        }
        Invocation::DeleteAsset { id } => {
            asset_ops::delete_asset(contract, ctx, id)?;
            Ok(Response::Committed)
        }
        Invocation::AssetExists { id } => {
            let exists = asset_ops::asset_exists(contract, ctx, id)?;
            json(&exists)
        }
    }
}

fn json<T: serde::Serialize>(value: &T) -> Result<Response> {
    Ok(Response::Payload(serde_json::to_string(value)?))
}
