use tracing::debug;

use super::records;
use crate::contract::{Contract, TxContext};
use crate::errors::{ReechError, Result};
use crate::keyspace::EntityKind;
use crate::model::Aggregate;
use crate::policy::{require_role, Role};
use crate::rules::validation::{parse_string_list, require_id, require_iso_date};

/// Create a processed batch from a list of catches
///
/// `catch_ids` arrives as a JSON array string. The list is stored exactly as
/// given; catches are not looked up. The traceability URL is derived from
/// the batch id and the deployment's base URL.
///
/// # Errors
/// * `AuthorizationDenied` - Caller does not hold `processor`
/// * `Validation` - Bad batch/processor id, malformed list, or bad date
/// * `AlreadyExists` - A batch with `batch_id` already exists
pub fn create_aggregate(
    contract: &Contract,
    ctx: &mut TxContext<'_>,
    batch_id: &str,
    catch_ids: &str,
    processor_id: &str,
    date: &str,
) -> Result<()> {
    require_role(
        contract.policy(),
        ctx.identity,
        Role::Processor,
        "create batches",
    )?;

    require_id("batchId", batch_id)?;
    let catch_ids = parse_string_list("catchIds", catch_ids)?;
    require_id("processorId", processor_id)?;
    require_iso_date("date", date)?;

    let aggregate = Aggregate {
        batch_id: batch_id.to_string(),
        qr_code_url: Aggregate::traceability_url(contract.traceability_base_url(), batch_id),
        catch_ids,
        processor_id: processor_id.to_string(),
        date: date.to_string(),
    };
    records::create(contract.keyspace(), ctx.stub, &aggregate)?;

    debug!(
        entity_id = batch_id,
        catches = aggregate.catch_ids.len(),
        "batch created"
    );
    Ok(())
}

/// Stored batch JSON, returned byte-for-byte as committed
///
/// # Errors
/// * `NotFound` - No batch with `batch_id`
/// * `Serialization` - Stored bytes are not UTF-8
pub fn track_aggregate(contract: &Contract, ctx: &TxContext<'_>, batch_id: &str) -> Result<String> {
    let bytes = records::fetch_raw(
        contract.keyspace(),
        &*ctx.stub,
        EntityKind::Aggregate,
        batch_id,
    )?;
    String::from_utf8(bytes).map_err(|e| ReechError::Serialization {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::StaticIdentity;
    use crate::ledger::MemoryLedger;

    #[test]
    fn test_create_and_track() {
        let contract = Contract::default();
        let mut ledger = MemoryLedger::new();
        let processor = StaticIdentity::new("P001").with_role("processor");
        let mut ctx = TxContext::new(&mut ledger, &processor);

        create_aggregate(&contract, &mut ctx, "B001", r#"["C001","C002"]"#, "P001", "2025-08-09")
            .unwrap();
        let json = track_aggregate(&contract, &ctx, "B001").unwrap();
        let batch: Aggregate = serde_json::from_str(&json).unwrap();

        assert_eq!(batch.catch_ids, vec!["C001", "C002"]);
        assert!(batch.qr_code_url.ends_with("/B001"));
    }

    #[test]
    fn test_track_unknown_batch() {
        let contract = Contract::default();
        let mut ledger = MemoryLedger::new();
        let anyone = StaticIdentity::new("X");
        let ctx = TxContext::new(&mut ledger, &anyone);

        let err = track_aggregate(&contract, &ctx, "B002").unwrap_err();
        assert_eq!(err.to_string(), "batch B002 not found");
    }

    #[test]
    fn test_requires_processor() {
        let contract = Contract::default();
        let mut ledger = MemoryLedger::new();
        let buyer = StaticIdentity::new("U1").with_role("buyer");
        let mut ctx = TxContext::new(&mut ledger, &buyer);

        let err = create_aggregate(&contract, &mut ctx, "B001", "[]", "P001", "2025-08-09")
            .unwrap_err();
        assert_eq!(err.to_string(), "only processor can create batches");
    }
}
