//! Ledger record types
//!
//! Every record is persisted as one flat JSON object, UTF-8, no envelope.
//! Field names are the wire contract shared with every other reader of the
//! ledger and must not change.

pub mod aggregate;
pub mod asset;
pub mod harvest_event;
pub mod order;
pub mod participant;

pub use aggregate::Aggregate;
pub use asset::Asset;
pub use harvest_event::HarvestEvent;
pub use order::{Order, OrderStatus};
pub use participant::Participant;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::keyspace::EntityKind;

/// A record stored under one namespaced key
pub trait Record: Serialize + DeserializeOwned {
    const KIND: EntityKind;

    /// Identifier the key is derived from
    fn record_id(&self) -> &str;
}
