//! Partition-aware record access
//!
//! The only place that decides between world state and a private
//! collection. Every transition op reads and writes through here.

use tracing::debug;

use crate::errors::{ReechError, Result};
use crate::keyspace::{key_for, EntityKind, Keyspace, LedgerKey, Partition};
use crate::ledger::LedgerStub;
use crate::model::Record;

fn read_key(
    keyspace: &Keyspace,
    stub: &dyn LedgerStub,
    kind: EntityKind,
    key: &LedgerKey,
) -> Result<Option<Vec<u8>>> {
    match keyspace.partition_for(kind) {
        Partition::Shared => stub.get_state(key.as_str()),
        Partition::Private { collection } => stub.get_private_data(collection, key.as_str()),
    }
}

fn write_key(
    keyspace: &Keyspace,
    stub: &mut dyn LedgerStub,
    kind: EntityKind,
    key: &LedgerKey,
    bytes: Vec<u8>,
) -> Result<()> {
    match keyspace.partition_for(kind) {
        Partition::Shared => stub.put_state(key.as_str(), bytes),
        Partition::Private { collection } => {
            stub.put_private_data(collection, key.as_str(), bytes)
        }
    }
}

/// Stored bytes for `kind`/`id`, exactly as committed
///
/// # Errors
///
/// `NotFound` if absent, `Validation` for a malformed id, `Store` on read failure.
pub fn fetch_raw(
    keyspace: &Keyspace,
    stub: &dyn LedgerStub,
    kind: EntityKind,
    id: &str,
) -> Result<Vec<u8>> {
    let key = key_for(kind, id)?;
    read_key(keyspace, stub, kind, &key)?.ok_or_else(|| ReechError::not_found(kind.label(), id))
}

/// Decode the record stored for `id`
///
/// # Errors
///
/// As `fetch_raw`, plus `Serialization` if the stored bytes do not decode.
pub fn fetch<R: Record>(keyspace: &Keyspace, stub: &dyn LedgerStub, id: &str) -> Result<R> {
    let bytes = fetch_raw(keyspace, stub, R::KIND, id)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// # Errors
///
/// `Validation` for a malformed id, `Store` on read failure.
pub fn exists(
    keyspace: &Keyspace,
    stub: &dyn LedgerStub,
    kind: EntityKind,
    id: &str,
) -> Result<bool> {
    let key = key_for(kind, id)?;
    Ok(read_key(keyspace, stub, kind, &key)?.is_some())
}

/// Write a new record, refusing to overwrite existing state
///
/// # Errors
///
/// `AlreadyExists` if the key is taken; `Serialization` or `Store` otherwise.
pub fn create<R: Record>(keyspace: &Keyspace, stub: &mut dyn LedgerStub, record: &R) -> Result<()> {
    let id = record.record_id();
    let key = key_for(R::KIND, id)?;
    if read_key(keyspace, stub, R::KIND, &key)?.is_some() {
        return Err(ReechError::already_exists(R::KIND.label(), id));
    }
    let bytes = serde_json::to_vec(record)?;
    write_key(keyspace, stub, R::KIND, &key, bytes)?;
    debug!(key = %key, "record created");
    Ok(())
}

/// Overwrite a record the caller has already loaded
///
/// # Errors
///
/// `Serialization` or `Store`.
pub fn replace<R: Record>(
    keyspace: &Keyspace,
    stub: &mut dyn LedgerStub,
    record: &R,
) -> Result<()> {
    let key = key_for(R::KIND, record.record_id())?;
    let bytes = serde_json::to_vec(record)?;
    write_key(keyspace, stub, R::KIND, &key, bytes)?;
    debug!(key = %key, "record replaced");
    Ok(())
}

/// Delete an existing record
///
/// # Errors
///
/// `NotFound` if absent, `Store` on failure.
pub fn remove(
    keyspace: &Keyspace,
    stub: &mut dyn LedgerStub,
    kind: EntityKind,
    id: &str,
) -> Result<()> {
    let key = key_for(kind, id)?;
    if read_key(keyspace, stub, kind, &key)?.is_none() {
        return Err(ReechError::not_found(kind.label(), id));
    }
    match keyspace.partition_for(kind) {
        Partition::Shared => stub.delete_state(key.as_str())?,
        Partition::Private { collection } => stub.delete_private_data(collection, key.as_str())?,
    }
    debug!(key = %key, "record deleted");
    Ok(())
}
