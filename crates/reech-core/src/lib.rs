//! Reech Core - seafood supply-chain ledger contract
//!
//! This crate holds everything that runs inside one ledger transaction:
//! - Record model for fishers, catches, batches, orders and assets
//! - Identity oracle and attribute-based authorization policy
//! - Keyspace layout, including the private participant partition
//! - Ledger substrate traits plus an in-memory ledger for tests
//! - Authorization-gated transitions, lookups and catch reporting
//! - Named entry point dispatch via `invoke()`
//!
//! Storage, ordering and replication belong to the host. The core reads and
//! writes only through the `ledger` traits bound for one invocation.

pub mod apply;
pub mod commands;
pub mod config;
pub mod contract;
pub mod errors;
pub mod identity;
pub mod keyspace;
pub mod ledger;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod policy;
pub mod report;
pub mod rules;

// Re-export commonly used types
pub use apply::{invoke, Response};
pub use commands::Invocation;
pub use config::ContractConfig;
pub use contract::{Contract, TxContext};
pub use errors::{ExError, ExErrorKind, ReechError, Result};
pub use identity::{IdentityOracle, StaticIdentity};
pub use ledger::{LedgerStub, MemoryLedger};
pub use policy::{AccessPolicy, AttributePolicy, Role};

#[doc(hidden)]
pub mod __private {
    pub use reech_core_types::schema;
    pub use tracing;
}
