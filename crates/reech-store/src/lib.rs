//! Reech Store - SQLite ledger substrate
//!
//! Provides:
//! - SQLite schema with an embedded, checksummed migrations framework
//! - `SqliteLedger`, the core ledger traits over a SQLite connection
//! - Connection helpers

pub mod db;
pub mod errors;
pub mod migrations;
pub mod sqlite_ledger;

// Re-export key types
pub use errors::Result;
pub use sqlite_ledger::SqliteLedger;
