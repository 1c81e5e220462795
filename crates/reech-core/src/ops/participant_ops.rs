use tracing::debug;

use super::records;
use crate::contract::{Contract, TxContext};
use crate::errors::Result;
use crate::model::Participant;
use crate::policy::{require_role, Role};
use crate::rules::validation::{require_id, require_non_empty};

/// Register a fisher
///
/// The stored role is always `fisher`, whatever the registering authority
/// holds. The record lands in the participant partition, which is private
/// unless the deployment configures otherwise.
///
/// # Arguments
/// * `id` - Participant identifier, becomes `FISHER_<id>`
/// * `name` - Display name
/// * `govt_id` - Government identifier (personal data)
///
/// # Errors
/// * `AuthorizationDenied` - Caller does not hold `authority`
/// * `Validation` - Any argument empty, or `id` not a valid key component
/// * `AlreadyExists` - A participant with `id` is already registered
pub fn register_participant(
    contract: &Contract,
    ctx: &mut TxContext<'_>,
    id: &str,
    name: &str,
    govt_id: &str,
) -> Result<()> {
    require_role(
        contract.policy(),
        ctx.identity,
        Role::Authority,
        "register fishers",
    )?;

    require_id("id", id)?;
    require_non_empty("name", name)?;
    require_non_empty("govtId", govt_id)?;

    let participant = Participant::new(id.to_string(), name.to_string(), govt_id.to_string());
    records::create(contract.keyspace(), ctx.stub, &participant)?;

    debug!(entity_id = id, "participant registered");
    Ok(())
}

/// Look up a registered participant
///
/// No role gate: any caller with access to the participant partition may
/// read it.
///
/// # Errors
/// * `NotFound` - No participant with `id`
/// * `Serialization` - Stored record does not decode
pub fn get_participant(
    contract: &Contract,
    ctx: &TxContext<'_>,
    id: &str,
) -> Result<Participant> {
    records::fetch(contract.keyspace(), &*ctx.stub, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ReechError;
    use crate::identity::StaticIdentity;
    use crate::ledger::MemoryLedger;

    #[test]
    fn test_register_then_get() {
        let contract = Contract::default();
        let mut ledger = MemoryLedger::new();
        let authority = StaticIdentity::new("A1").with_role("authority");
        let mut ctx = TxContext::new(&mut ledger, &authority);

        register_participant(&contract, &mut ctx, "F001", "John Doe", "GOV123").unwrap();
        let p = get_participant(&contract, &ctx, "F001").unwrap();

        assert_eq!(p.name, "John Doe");
        assert_eq!(p.govt_id.expose(), "GOV123");
        assert_eq!(p.role, Role::Fisher);
    }

    #[test]
    fn test_register_requires_authority() {
        let contract = Contract::default();
        let mut ledger = MemoryLedger::new();
        let fisher = StaticIdentity::new("F001").with_role("fisher");
        let mut ctx = TxContext::new(&mut ledger, &fisher);

        let err = register_participant(&contract, &mut ctx, "F001", "John", "G").unwrap_err();
        assert_eq!(err.to_string(), "only authority can register fishers");
        assert_eq!(ledger.writes(), 0);
    }

    #[test]
    fn test_empty_name_names_field() {
        let contract = Contract::default();
        let mut ledger = MemoryLedger::new();
        let authority = StaticIdentity::new("A1").with_role("authority");
        let mut ctx = TxContext::new(&mut ledger, &authority);

        let err = register_participant(&contract, &mut ctx, "F001", "  ", "G").unwrap_err();
        assert!(matches!(err, ReechError::Validation { ref field, .. } if field == "name"));
    }
}
