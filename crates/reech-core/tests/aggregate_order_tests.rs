#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{buyer, call, fisher, processor, read};
use reech_core::config::ContractConfig;
use reech_core::errors::{ExError, ExErrorKind, ReechError};
use reech_core::model::{Aggregate, Order, OrderStatus};
use reech_core::{Contract, MemoryLedger};

fn batch_b001(contract: &Contract, ledger: &mut MemoryLedger) {
    call(
        contract,
        ledger,
        &processor(),
        "CreateBatch",
        &["B001", r#"["C001","C002"]"#, "P001", "2025-08-09"],
    )
    .unwrap();
}

#[test]
fn test_processor_creates_batch_with_traceability_url() {
    // GIVEN a processor
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();

    // WHEN creating batch B001 from two catches
    batch_b001(&contract, &mut ledger);

    // THEN tracking returns the stored record with a URL encoding B001
    let json = read(&contract, &mut ledger, "TrackBatch", &["B001"]).unwrap();
    assert_eq!(
        json,
        r#"{"batchId":"B001","catchIds":["C001","C002"],"processorId":"P001","date":"2025-08-09","qrCodeUrl":"https://getreech.example.org/batch/B001"}"#
    );
    let batch: Aggregate = serde_json::from_str(&json).unwrap();
    assert_eq!(batch.catch_ids, vec!["C001", "C002"]);
}

#[test]
fn test_track_unknown_batch_is_not_found() {
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();
    batch_b001(&contract, &mut ledger);

    let err = read(&contract, &mut ledger, "TrackBatch", &["B002"]).unwrap_err();
    assert_eq!(err.to_string(), "batch B002 not found");

    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::NotFound);
    assert_eq!(ex.entity_id(), Some("B002"));
}

#[test]
fn test_catch_ids_kept_verbatim() {
    // Order and duplicates preserved, catches never looked up
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();
    call(
        &contract,
        &mut ledger,
        &processor(),
        "CreateBatch",
        &["B001", r#"["C9","C1","C9"]"#, "P001", "2025-08-09"],
    )
    .unwrap();

    let json = read(&contract, &mut ledger, "TrackBatch", &["B001"]).unwrap();
    let batch: Aggregate = serde_json::from_str(&json).unwrap();
    assert_eq!(batch.catch_ids, vec!["C9", "C1", "C9"]);
}

#[test]
fn test_malformed_catch_list() {
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();
    let err = call(
        &contract,
        &mut ledger,
        &processor(),
        "CreateBatch",
        &["B001", "C001,C002", "P001", "2025-08-09"],
    )
    .unwrap_err();
    assert!(matches!(err, ReechError::Validation { ref field, .. } if field == "catchIds"));
}

#[test]
fn test_batch_requires_processor() {
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();
    let err = call(
        &contract,
        &mut ledger,
        &fisher("F001"),
        "CreateBatch",
        &["B001", "[]", "P001", "2025-08-09"],
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "only processor can create batches");
    assert_eq!(ledger.writes(), 0);
}

#[test]
fn test_configured_base_url() {
    let config = ContractConfig {
        traceability_base_url: "https://trace.test/b".to_string(),
        ..ContractConfig::default()
    };
    let contract = Contract::from_config(&config);
    let mut ledger = MemoryLedger::new();
    batch_b001(&contract, &mut ledger);

    let json = read(&contract, &mut ledger, "TrackBatch", &["B001"]).unwrap();
    let batch: Aggregate = serde_json::from_str(&json).unwrap();
    assert_eq!(batch.qr_code_url, "https://trace.test/b/B001");
}

#[test]
fn test_track_returns_stored_bytes_verbatim() {
    // Written by another client with a different field order
    use reech_core::ledger::StateStore;

    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();
    let stored = r#"{"qrCodeUrl":"u","batchId":"B7","catchIds":[],"processorId":"P","date":"2025-01-01"}"#;
    ledger.put_state("BATCH_B7", stored.as_bytes().to_vec()).unwrap();

    let json = read(&contract, &mut ledger, "TrackBatch", &["B7"]).unwrap();
    assert_eq!(json, stored);
}

#[test]
fn test_buyer_places_order() {
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();
    batch_b001(&contract, &mut ledger);

    call(
        &contract,
        &mut ledger,
        &buyer(),
        "PlaceOrder",
        &["O001", "B001", "U001", "2025-08-10"],
    )
    .unwrap();

    let json = read(&contract, &mut ledger, "GetOrder", &["O001"]).unwrap();
    assert_eq!(
        json,
        r#"{"orderId":"O001","batchId":"B001","buyerId":"U001","status":"placed","date":"2025-08-10"}"#
    );
    let order: Order = serde_json::from_str(&json).unwrap();
    assert_eq!(order.status, OrderStatus::Placed);
}

#[test]
fn test_order_requires_buyer() {
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();
    let err = call(
        &contract,
        &mut ledger,
        &processor(),
        "PlaceOrder",
        &["O001", "B001", "U001", "2025-08-10"],
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "only buyer can place orders");
}

#[test]
fn test_order_date_validated() {
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();
    let err = call(
        &contract,
        &mut ledger,
        &buyer(),
        "PlaceOrder",
        &["O001", "B001", "U001", "tomorrow"],
    )
    .unwrap_err();
    assert!(matches!(err, ReechError::Validation { ref field, .. } if field == "date"));
}

#[test]
fn test_duplicate_order_rejected() {
    let contract = Contract::default();
    let mut ledger = MemoryLedger::new();
    let args = ["O001", "B001", "U001", "2025-08-10"];
    call(&contract, &mut ledger, &buyer(), "PlaceOrder", &args).unwrap();
    let err = call(&contract, &mut ledger, &buyer(), "PlaceOrder", &args).unwrap_err();
    assert!(matches!(err, ReechError::AlreadyExists { .. }));
}
