#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{authority, call, fisher, read};
use proptest::prelude::*;
use reech_core::config::ContractConfig;
use reech_core::errors::ReechError;
use reech_core::identity::StaticIdentity;
use reech_core::keyspace::Partition;
use reech_core::model::Participant;
use reech_core::policy::{MissingAttributeMode, Role};
use reech_core::{Contract, MemoryLedger, Response};

#[test]
fn test_authority_registers_fisher() {
    // GIVEN an empty ledger and an authority caller
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();

    // WHEN registering a fisher
    let response = call(
        &contract,
        &mut ledger,
        &authority(),
        "RegisterFisher",
        &["F001", "John Doe", "GOV123"],
    )
    .unwrap();

    // THEN the write committed into the private collection
    assert_eq!(response, Response::Committed);
    assert_eq!(ledger.private_keys("FisherCollection"), vec!["FISHER_F001"]);
    assert!(ledger.state_keys().is_empty());

    // AND the lookup returns the original wire format
    let json = read(&contract, &mut ledger, "GetFisher", &["F001"]).unwrap();
    assert_eq!(
        json,
        r#"{"id":"F001","name":"John Doe","govtId":"GOV123","role":"fisher"}"#
    );
}

#[test]
fn test_non_authority_is_denied_and_writes_nothing() {
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();

    for caller in [fisher("F001"), StaticIdentity::new("nobody")] {
        let err = call(
            &contract,
            &mut ledger,
            &caller,
            "RegisterFisher",
            &["F001", "John Doe", "GOV123"],
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "only authority can register fishers");
    }
    assert_eq!(ledger.writes(), 0);
}

#[test]
fn test_unreadable_attributes_fail_closed() {
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();
    let broken = StaticIdentity::new("A001")
        .with_role("authority")
        .with_unreadable_attributes();

    let err = call(
        &contract,
        &mut ledger,
        &broken,
        "RegisterFisher",
        &["F001", "John", "G1"],
    )
    .unwrap_err();
    assert!(matches!(err, ReechError::AuthorizationDenied { .. }));
}

#[test]
fn test_permissive_mode_allows_attributeless_caller() {
    let config = ContractConfig {
        missing_attribute: MissingAttributeMode::Permissive,
        ..ContractConfig::default()
    };
    let contract = Contract::from_config(&config);
    let mut ledger = MemoryLedger::new();

    call(
        &contract,
        &mut ledger,
        &StaticIdentity::new("cli-admin"),
        "RegisterFisher",
        &["F001", "John", "G1"],
    )
    .unwrap();
    assert_eq!(ledger.writes(), 1);
}

#[test]
fn test_permissive_mode_still_denies_wrong_role() {
    let config = ContractConfig {
        missing_attribute: MissingAttributeMode::Permissive,
        ..ContractConfig::default()
    };
    let contract = Contract::from_config(&config);
    let mut ledger = MemoryLedger::new();

    let err = call(
        &contract,
        &mut ledger,
        &StaticIdentity::new("B1").with_role("buyer"),
        "RegisterFisher",
        &["F001", "John", "G1"],
    )
    .unwrap_err();
    assert!(matches!(err, ReechError::AuthorizationDenied { .. }));
}

#[test]
fn test_duplicate_registration_rejected() {
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();
    call(&contract, &mut ledger, &authority(), "RegisterFisher", &["F001", "John", "G1"]).unwrap();

    let err = call(
        &contract,
        &mut ledger,
        &authority(),
        "RegisterFisher",
        &["F001", "Someone Else", "G2"],
    )
    .unwrap_err();

    assert_eq!(err, ReechError::already_exists("fisher", "F001"));
    let json = read(&contract, &mut ledger, "GetFisher", &["F001"]).unwrap();
    assert!(json.contains("John"));
}

#[test]
fn test_shared_partition_deployment() {
    let config = ContractConfig {
        participant_partition: Partition::Shared,
        ..ContractConfig::default()
    };
    let contract = Contract::from_config(&config);
    let mut ledger = MemoryLedger::new();

    call(&contract, &mut ledger, &authority(), "RegisterFisher", &["F001", "John", "G1"]).unwrap();

    assert_eq!(ledger.state_keys(), vec!["FISHER_F001"]);
    assert!(ledger.private_keys("FisherCollection").is_empty());
}

#[test]
fn test_get_unknown_fisher() {
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();
    let err = read(&contract, &mut ledger, "GetFisher", &["F404"]).unwrap_err();
    assert_eq!(err.to_string(), "fisher F404 not found");
}

#[test]
fn test_sentinel_in_id_rejected() {
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();
    let err = call(
        &contract,
        &mut ledger,
        &authority(),
        "RegisterFisher",
        &["F~1", "John", "G1"],
    )
    .unwrap_err();
    assert!(matches!(err, ReechError::Validation { ref field, .. } if field == "id"));
    assert_eq!(ledger.writes(), 0);
}

#[test]
fn test_repeated_reads_are_byte_identical() {
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();
    call(&contract, &mut ledger, &authority(), "RegisterFisher", &["F001", "John", "G1"]).unwrap();

    let first = read(&contract, &mut ledger, "GetFisher", &["F001"]).unwrap();
    let second = read(&contract, &mut ledger, "GetFisher", &["F001"]).unwrap();
    assert_eq!(first, second);
    assert_eq!(ledger.writes(), 1);
}

proptest! {
    #[test]
    fn prop_register_then_get_round_trips(
        id in "[A-Za-z0-9_-]{1,16}",
        name in "[A-Za-z][A-Za-z .'-]{0,30}",
        govt_id in "[A-Z0-9]{1,12}",
    ) {
        let contract = Contract::default();
        let mut ledger = MemoryLedger::new();
        call(&contract, &mut ledger, &authority(), "RegisterFisher", &[id.as_str(), name.as_str(), govt_id.as_str()])
            .unwrap();

        let json = read(&contract, &mut ledger, "GetFisher", &[id.as_str()]).unwrap();
        let p: Participant = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(p.id, id);
        prop_assert_eq!(p.name, name);
        prop_assert_eq!(p.govt_id.expose(), &govt_id);
        prop_assert_eq!(p.role, Role::Fisher);
    }
}
