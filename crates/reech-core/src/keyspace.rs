//! Keyspace manager
//!
//! Every record lives at `PREFIX + id`. Prefixes are literal and disjoint,
//! so the half-open range `[PREFIX, PREFIX + "~")` enumerates exactly one
//! entity type as long as every identifier character sorts before `~`.
//! Identifiers are checked against that rule before a key is built.
//!
//! | Entity | Prefix | Partition |
//! |--------|--------|-----------|
//! | Participant | `FISHER_` | deployment choice (private by default) |
//! | HarvestEvent | `CATCH_` | shared |
//! | Aggregate | `BATCH_` | shared |
//! | Order | `ORDER_` | shared |
//! | Asset | `ASSET_` | shared |

use serde::{Deserialize, Serialize};

use crate::errors::{ReechError, Result};

/// Sorts after every character allowed in an identifier
pub const RANGE_SENTINEL: char = '~';

/// Default private collection for participant records
pub const DEFAULT_PARTICIPANT_COLLECTION: &str = "FisherCollection";

/// Entity types stored on the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Participant,
    HarvestEvent,
    Aggregate,
    Order,
    Asset,
}

impl EntityKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            EntityKind::Participant => "FISHER_",
            EntityKind::HarvestEvent => "CATCH_",
            EntityKind::Aggregate => "BATCH_",
            EntityKind::Order => "ORDER_",
            EntityKind::Asset => "ASSET_",
        }
    }

    /// Name used in error messages ("batch B002 not found")
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Participant => "fisher",
            EntityKind::HarvestEvent => "catch",
            EntityKind::Aggregate => "batch",
            EntityKind::Order => "order",
            EntityKind::Asset => "asset",
        }
    }
}

/// A fully namespaced state key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LedgerKey(String);

impl LedgerKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LedgerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LedgerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Half-open key range `[start, end)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRange {
    pub start: String,
    pub end: String,
}

impl KeyRange {
    pub fn contains(&self, key: &str) -> bool {
        key >= self.start.as_str() && key < self.end.as_str()
    }
}

/// Where records of one entity type are stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Partition {
    /// World state visible to every ledger member
    Shared,
    /// Restricted collection visible to a subset of members
    Private { collection: String },
}

impl Default for Partition {
    fn default() -> Self {
        Partition::Private {
            collection: DEFAULT_PARTICIPANT_COLLECTION.to_string(),
        }
    }
}

/// Check that `id` can be embedded in a key without leaking out of its range
///
/// # Errors
///
/// Returns `Validation` naming `field` if `id` is empty, or contains the
/// sentinel or anything sorting after it (DEL, non-ASCII).
pub fn validate_id(field: &str, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(ReechError::validation(field, "must not be empty"));
    }
    if id.chars().any(|c| c >= RANGE_SENTINEL) {
        return Err(ReechError::validation(
            field,
            format!("characters must sort before '{}'", RANGE_SENTINEL),
        ));
    }
    Ok(())
}

/// Build the key for one record
///
/// # Errors
///
/// Returns `Validation` if `id` is not a valid identifier.
///
/// ```
/// use reech_core::keyspace::{key_for, EntityKind};
///
/// assert_eq!(key_for(EntityKind::Aggregate, "B001").unwrap().as_str(), "BATCH_B001");
/// assert!(key_for(EntityKind::Aggregate, "B~1").is_err());
/// ```
pub fn key_for(kind: EntityKind, id: &str) -> Result<LedgerKey> {
    validate_id(kind.label(), id)?;
    Ok(LedgerKey(format!("{}{}", kind.prefix(), id)))
}

/// The range covering every record of `kind`
pub fn range_for(kind: EntityKind) -> KeyRange {
    KeyRange {
        start: kind.prefix().to_string(),
        end: format!("{}{}", kind.prefix(), RANGE_SENTINEL),
    }
}

/// Deployment-time partition layout
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keyspace {
    participant_partition: Partition,
}

impl Keyspace {
    pub fn new(participant_partition: Partition) -> Self {
        Self {
            participant_partition,
        }
    }

    /// Partition used by `kind`. Only participants can be private.
    pub fn partition_for(&self, kind: EntityKind) -> &Partition {
        const SHARED: &Partition = &Partition::Shared;
        match kind {
            EntityKind::Participant => &self.participant_partition,
            _ => SHARED,
        }
    }
}
