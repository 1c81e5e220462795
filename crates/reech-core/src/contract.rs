//! Contract instance and per-invocation context

use crate::config::ContractConfig;
use crate::identity::IdentityOracle;
use crate::keyspace::Keyspace;
use crate::ledger::LedgerStub;
use crate::policy::{AccessPolicy, AttributePolicy, CallerBinding};

/// Everything one invocation may touch, handed in by the host
///
/// Both collaborators are borrowed for a single transaction. Nothing is
/// carried from one invocation to the next.
pub struct TxContext<'a> {
    pub stub: &'a mut dyn LedgerStub,
    pub identity: &'a dyn IdentityOracle,
}

impl<'a> TxContext<'a> {
    pub fn new(stub: &'a mut dyn LedgerStub, identity: &'a dyn IdentityOracle) -> Self {
        Self { stub, identity }
    }
}

/// A deployed contract: policy, key layout and derived-value settings
///
/// ```
/// use reech_core::{Contract, ContractConfig};
///
/// let contract = Contract::from_config(&ContractConfig::default());
/// assert!(contract.traceability_base_url().starts_with("https://"));
/// ```
pub struct Contract {
    policy: Box<dyn AccessPolicy + Send + Sync>,
    caller_binding: CallerBinding,
    keyspace: Keyspace,
    traceability_base_url: String,
}

impl Contract {
    pub fn from_config(config: &ContractConfig) -> Self {
        Self {
            policy: Box::new(AttributePolicy::new(config.missing_attribute)),
            caller_binding: config.caller_binding,
            keyspace: Keyspace::new(config.participant_partition.clone()),
            traceability_base_url: config.traceability_base_url.clone(),
        }
    }

    /// Replace the attribute policy with a custom one
    pub fn with_policy(mut self, policy: impl AccessPolicy + Send + Sync + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn policy(&self) -> &dyn AccessPolicy {
        self.policy.as_ref()
    }

    pub fn caller_binding(&self) -> CallerBinding {
        self.caller_binding
    }

    pub fn keyspace(&self) -> &Keyspace {
        &self.keyspace
    }

    pub fn traceability_base_url(&self) -> &str {
        &self.traceability_base_url
    }
}

impl Default for Contract {
    fn default() -> Self {
        Self::from_config(&ContractConfig::default())
    }
}

impl std::fmt::Debug for Contract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Contract")
            .field("caller_binding", &self.caller_binding)
            .field("keyspace", &self.keyspace)
            .field("traceability_base_url", &self.traceability_base_url)
            .finish_non_exhaustive()
    }
}
