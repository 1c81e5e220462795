use serde::{Deserialize, Serialize};

use super::Record;
use crate::keyspace::EntityKind;

/// Generic utility asset used to smoke-test a deployment
///
/// Unlike the supply-chain records it is mutable: color, size and value
/// can be updated, ownership transferred, and the record deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub color: String,
    pub size: i64,
    pub owner: String,
    pub appraised_value: i64,
}

impl Record for Asset {
    const KIND: EntityKind = EntityKind::Asset;

    fn record_id(&self) -> &str {
        &self.id
    }
}
