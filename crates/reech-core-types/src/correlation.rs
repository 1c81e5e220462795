//! Correlation types for invocation tracking
//!
//! Every contract invocation carries a `RequestId`. Whoever opens the
//! transaction attaches a `TxId` so log lines from one invocation can be
//! joined with its commit.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a single contract invocation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a fresh RequestId (UUIDv7, time ordered)
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap an id received from outside (e.g. a client-supplied header)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Transaction identifier
///
/// Assigned by whoever owns the transaction: `reech-engine` mints a UUIDv7
/// per SQLite transaction, a ledger peer would pass its own id through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxId(String);

impl TxId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Correlation context carried through one invocation
#[derive(Debug, Clone)]
pub struct InvocationContext {
    pub request_id: RequestId,
    pub tx_id: Option<TxId>,
}

impl InvocationContext {
    /// Fresh context with a new RequestId and no transaction yet
    pub fn new() -> Self {
        Self {
            request_id: RequestId::new(),
            tx_id: None,
        }
    }

    /// Attach the substrate transaction id once it is known
    pub fn with_tx_id(mut self, tx_id: TxId) -> Self {
        self.tx_id = Some(tx_id);
        self
    }
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new()
    }
}
