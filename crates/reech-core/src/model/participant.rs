use reech_core_types::Sensitive;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::keyspace::EntityKind;
use crate::policy::Role;

/// A registered fisher
///
/// The government identifier is personal data: it is stored verbatim but
/// redacted from `Debug`, so a participant can be logged safely.
///
/// Wire names are `name` and `govtId`, matching records already on deployed
/// ledgers. `displayName` and `governmentId` are accepted when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    #[serde(alias = "displayName")]
    pub name: String,
    #[serde(rename = "govtId", alias = "governmentId")]
    pub govt_id: Sensitive<String>,
    pub role: Role,
}

impl Participant {
    /// New participant; the role is always `fisher`
    pub fn new(id: String, name: String, govt_id: String) -> Self {
        Self {
            id,
            name,
            govt_id: Sensitive::new(govt_id),
            role: Role::Fisher,
        }
    }
}

impl Record for Participant {
    const KIND: EntityKind = EntityKind::Participant;

    fn record_id(&self) -> &str {
        &self.id
    }
}
