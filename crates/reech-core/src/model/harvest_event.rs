use serde::{Deserialize, Serialize};

use super::Record;
use crate::keyspace::EntityKind;

/// A logged catch; immutable once written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarvestEvent {
    pub catch_id: String,
    pub fisher_id: String,
    pub species: String,
    /// Always finite and > 0
    pub weight_kg: f64,
    /// ISO-8601, zero padded; compared as a string by reports
    pub date: String,
}

impl Record for HarvestEvent {
    const KIND: EntityKind = EntityKind::HarvestEvent;

    fn record_id(&self) -> &str {
        &self.catch_id
    }
}
