use tracing::debug;

use super::records;
use crate::contract::{Contract, TxContext};
use crate::errors::{ReechError, Result};
use crate::model::HarvestEvent;
use crate::policy::{CallerBinding, Role};
use crate::rules::validation::{parse_weight_kg, require_id, require_iso_date, require_non_empty};

/// Log a catch on behalf of a fisher
///
/// The caller must hold `fisher`. Under `RequireCaller` binding the caller
/// must also be the fisher named by `fisher_id`.
///
/// # Arguments
/// * `catch_id` - Identifier, becomes `CATCH_<catch_id>`
/// * `fisher_id` - Fisher the catch is attributed to
/// * `species` - Free-text species name
/// * `weight_kg` - Decimal string, parsed as a positive float
/// * `date` - ISO-8601 date or RFC 3339 timestamp
///
/// # Errors
/// * `AuthorizationDenied` - Not a fisher, or not the named fisher
/// * `Validation` - Bad identifier, species, weight or date
/// * `AlreadyExists` - A catch with `catch_id` already exists
pub fn log_event(
    contract: &Contract,
    ctx: &mut TxContext<'_>,
    catch_id: &str,
    fisher_id: &str,
    species: &str,
    weight_kg: &str,
    date: &str,
) -> Result<()> {
    let policy = contract.policy();
    let bound = match contract.caller_binding() {
        CallerBinding::RequireCaller => policy.is_caller(ctx.identity, fisher_id),
        CallerBinding::RoleSufficient => true,
    };
    if !policy.has_role(ctx.identity, Role::Fisher) || !bound {
        return Err(ReechError::denied("log their catch", "the fisher"));
    }

    require_id("catchId", catch_id)?;
    require_id("fisherId", fisher_id)?;
    require_non_empty("species", species)?;
    let weight_kg = parse_weight_kg(weight_kg)?;
    require_iso_date("date", date)?;

    let event = HarvestEvent {
        catch_id: catch_id.to_string(),
        fisher_id: fisher_id.to_string(),
        species: species.to_string(),
        weight_kg,
        date: date.to_string(),
    };
    records::create(contract.keyspace(), ctx.stub, &event)?;

    debug!(entity_id = catch_id, fisher_id, "catch logged");
    Ok(())
}

/// # Errors
/// * `NotFound` - No catch with `catch_id`
/// * `Serialization` - Stored record does not decode
pub fn get_event(contract: &Contract, ctx: &TxContext<'_>, catch_id: &str) -> Result<HarvestEvent> {
    records::fetch(contract.keyspace(), &*ctx.stub, catch_id)
}
