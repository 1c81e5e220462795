//! Ledger schema scripts, compiled into the binary

use sha2::{Digest, Sha256};

/// One schema step, applied at most once per database
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

impl Migration {
    /// Hex SHA-256 of the script, recorded in `schema_version` when applied
    pub fn checksum(&self) -> String {
        hex::encode(Sha256::digest(self.sql.as_bytes()))
    }
}

/// Every migration, in application order
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        id: "001_ledger_state",
        sql: include_str!("../../migrations/001_ledger_state.sql"),
    },
    Migration {
        id: "002_write_audit",
        sql: include_str!("../../migrations/002_write_audit.sql"),
    },
];
