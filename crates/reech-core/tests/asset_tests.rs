#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{call, read};
use reech_core::errors::ReechError;
use reech_core::identity::StaticIdentity;
use reech_core::model::Asset;
use reech_core::{Contract, MemoryLedger, Response};

fn anyone() -> StaticIdentity {
    StaticIdentity::new("tester")
}

fn create_asset1(contract: &Contract, ledger: &mut MemoryLedger) {
    call(
        contract,
        ledger,
        &anyone(),
        "CreateAsset",
        &["asset1", "blue", "5", "Tomoko", "300"],
    )
    .unwrap();
}

fn read_asset(contract: &Contract, ledger: &mut MemoryLedger, id: &str) -> Asset {
    let json = read(contract, ledger, "ReadAsset", &[id]).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn test_asset_lifecycle() {
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();

    // create
    create_asset1(&contract, &mut ledger);
    let asset = read_asset(&contract, &mut ledger, "asset1");
    assert_eq!(asset.size, 5);
    assert_eq!(asset.appraised_value, 300);

    // update keeps owner
    call(
        &contract,
        &mut ledger,
        &anyone(),
        "UpdateAsset",
        &["asset1", "red", "7", "450"],
    )
    .unwrap();
    let asset = read_asset(&contract, &mut ledger, "asset1");
    assert_eq!(asset.color, "red");
    assert_eq!(asset.size, 7);
    assert_eq!(asset.appraised_value, 450);
    assert_eq!(asset.owner, "Tomoko");

    // transfer
    call(&contract, &mut ledger, &anyone(), "TransferAsset", &["asset1", "Brad"]).unwrap();
    assert_eq!(read_asset(&contract, &mut ledger, "asset1").owner, "Brad");

    // delete
    call(&contract, &mut ledger, &anyone(), "DeleteAsset", &["asset1"]).unwrap();
    assert_eq!(
        read(&contract, &mut ledger, "AssetExists", &["asset1"]).unwrap(),
        "false"
    );
    assert!(ledger.state_keys().is_empty());
}

#[test]
fn test_wire_format() {
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();
    create_asset1(&contract, &mut ledger);

    let json = read(&contract, &mut ledger, "ReadAsset", &["asset1"]).unwrap();
    assert_eq!(
        json,
        r#"{"id":"asset1","color":"blue","size":5,"owner":"Tomoko","appraisedValue":300}"#
    );
}

#[test]
fn test_exists_reports_true() {
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();
    create_asset1(&contract, &mut ledger);

    let response = call(&contract, &mut ledger, &anyone(), "AssetExists", &["asset1"]).unwrap();
    assert_eq!(response, Response::Payload("true".to_string()));
}

#[test]
fn test_non_integer_size_rejected() {
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();
    let err = call(
        &contract,
        &mut ledger,
        &anyone(),
        "CreateAsset",
        &["asset1", "blue", "five", "Tomoko", "300"],
    )
    .unwrap_err();
    assert!(matches!(err, ReechError::Validation { ref field, .. } if field == "size"));
    assert_eq!(ledger.writes(), 0);
}

#[test]
fn test_duplicate_asset_rejected() {
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();
    create_asset1(&contract, &mut ledger);

    let err = call(
        &contract,
        &mut ledger,
        &anyone(),
        "CreateAsset",
        &["asset1", "green", "1", "Max", "10"],
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "asset asset1 already exists");
}

#[test]
fn test_mutations_on_missing_asset_are_not_found() {
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();

    for (function, args) in [
        ("UpdateAsset", vec!["ghost", "red", "1", "1"]),
        ("TransferAsset", vec!["ghost", "Brad"]),
        ("DeleteAsset", vec!["ghost"]),
        ("ReadAsset", vec!["ghost"]),
    ] {
        let err = call(&contract, &mut ledger, &anyone(), function, &args).unwrap_err();
        assert_eq!(err.to_string(), "asset ghost not found", "{}", function);
    }
    assert_eq!(ledger.writes(), 0);
}
