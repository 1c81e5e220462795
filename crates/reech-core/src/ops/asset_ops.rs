//! Asset utility operations
//!
//! A plain CRUD entity kept for substrate smoke tests. No role gate.

use tracing::debug;

use super::records;
use crate::contract::{Contract, TxContext};
use crate::errors::Result;
use crate::keyspace::EntityKind;
use crate::model::Asset;
use crate::rules::validation::{parse_int, require_id, require_non_empty};

/// # Errors
/// * `Validation` - Bad id, empty color/owner, non-integer size or value
/// * `AlreadyExists` - An asset with `id` already exists
pub fn create_asset(
    contract: &Contract,
    ctx: &mut TxContext<'_>,
    id: &str,
    color: &str,
    size: &str,
    owner: &str,
    appraised_value: &str,
) -> Result<()> {
    require_id("id", id)?;
    require_non_empty("color", color)?;
    let size = parse_int("size", size)?;
    require_non_empty("owner", owner)?;
    let appraised_value = parse_int("appraisedValue", appraised_value)?;

    let asset = Asset {
        id: id.to_string(),
        color: color.to_string(),
        size,
        owner: owner.to_string(),
        appraised_value,
    };
    records::create(contract.keyspace(), ctx.stub, &asset)?;
    debug!(entity_id = id, "asset created");
    Ok(())
}

/// # Errors
/// * `NotFound` - No asset with `id`
pub fn read_asset(contract: &Contract, ctx: &TxContext<'_>, id: &str) -> Result<Asset> {
    records::fetch(contract.keyspace(), &*ctx.stub, id)
}

/// Replace color, size and appraised value; owner is untouched
///
/// # Errors
/// * `Validation` - Empty color, non-integer size or value
/// * `NotFound` - No asset with `id`
pub fn update_asset(
    contract: &Contract,
    ctx: &mut TxContext<'_>,
    id: &str,
    color: &str,
    size: &str,
    appraised_value: &str,
) -> Result<()> {
    require_non_empty("color", color)?;
    let size = parse_int("size", size)?;
    let appraised_value = parse_int("appraisedValue", appraised_value)?;

    let mut asset: Asset = records::fetch(contract.keyspace(), &*ctx.stub, id)?;
    asset.color = color.to_string();
    asset.size = size;
    asset.appraised_value = appraised_value;
    records::replace(contract.keyspace(), ctx.stub, &asset)?;
    debug!(entity_id = id, "asset updated");
    Ok(())
}

/// # Errors
/// * `Validation` - Empty new owner
/// * `NotFound` - No asset with `id`
pub fn transfer_asset(
    contract: &Contract,
    ctx: &mut TxContext<'_>,
    id: &str,
    new_owner: &str,
) -> Result<()> {
    require_non_empty("newOwner", new_owner)?;

    let mut asset: Asset = records::fetch(contract.keyspace(), &*ctx.stub, id)?;
    asset.owner = new_owner.to_string();
    records::replace(contract.keyspace(), ctx.stub, &asset)?;
    debug!(entity_id = id, new_owner, "asset transferred");
    Ok(())
}

/// # Errors
/// * `NotFound` - No asset with `id`
pub fn delete_asset(contract: &Contract, ctx: &mut TxContext<'_>, id: &str) -> Result<()> {
    records::remove(contract.keyspace(), ctx.stub, EntityKind::Asset, id)?;
    debug!(entity_id = id, "asset deleted");
    Ok(())
}

/// # Errors
/// * `Validation` - `id` not a valid key component
pub fn asset_exists(contract: &Contract, ctx: &TxContext<'_>, id: &str) -> Result<bool> {
    records::exists(contract.keyspace(), &*ctx.stub, EntityKind::Asset, id)
}
