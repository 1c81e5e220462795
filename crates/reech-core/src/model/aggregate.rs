use serde::{Deserialize, Serialize};

use super::Record;
use crate::keyspace::EntityKind;

/// A processed batch of catches
///
/// `catch_ids` is kept exactly as supplied: order preserved, duplicates
/// allowed, no check that the catches exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregate {
    pub batch_id: String,
    pub catch_ids: Vec<String>,
    pub processor_id: String,
    pub date: String,
    /// Traceability link printed on the batch QR code
    #[serde(alias = "traceabilityUrl")]
    pub qr_code_url: String,
}

impl Aggregate {
    /// Traceability URL for `batch_id` under `base_url`
    ///
    /// ```
    /// use reech_core::model::Aggregate;
    ///
    /// assert_eq!(
    ///     Aggregate::traceability_url("https://getreech.example.org/batch/", "B001"),
    ///     "https://getreech.example.org/batch/B001"
    /// );
    /// assert_eq!(
    ///     Aggregate::traceability_url("https://x.test/batch", "B001"),
    ///     "https://x.test/batch/B001"
    /// );
    /// ```
    pub fn traceability_url(base_url: &str, batch_id: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), batch_id)
    }
}

impl Record for Aggregate {
    const KIND: EntityKind = EntityKind::Aggregate;

    fn record_id(&self) -> &str {
        &self.batch_id
    }
}
