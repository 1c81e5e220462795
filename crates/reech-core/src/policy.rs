//! Authorization policy
//!
//! Decides, from an identity snapshot, whether a caller holds a role or is
//! the identity a record is about. Policies are stateless and perform no I/O
//! beyond reading identity attributes.

use serde::{Deserialize, Serialize};

use crate::errors::{ReechError, Result};
use crate::identity::{IdentityOracle, ENROLLMENT_ID_ATTRIBUTE, ROLE_ATTRIBUTE};

/// Roles recognised by the contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Authority,
    Fisher,
    Processor,
    Buyer,
}

impl Role {
    /// Attribute value carried on the caller's identity
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Authority => "authority",
            Role::Fisher => "fisher",
            Role::Processor => "processor",
            Role::Buyer => "buyer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What `has_role` answers when the role attribute is absent or unreadable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingAttributeMode {
    /// Deny
    #[default]
    Strict,
    /// Allow; only for local networks whose CLI certificates carry no attributes
    Permissive,
}

/// Whether logging a catch additionally requires the caller to be the
/// named fisher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallerBinding {
    #[default]
    RequireCaller,
    RoleSufficient,
}

/// Policy seam consulted by every gated operation
pub trait AccessPolicy {
    /// Does the caller carry `role`?
    fn has_role(&self, identity: &dyn IdentityOracle, role: Role) -> bool;

    /// Is the caller the identity named `claimed_id`?
    fn is_caller(&self, identity: &dyn IdentityOracle, claimed_id: &str) -> bool;
}

/// Attribute-based policy used by the contract
///
/// ```
/// use reech_core::identity::StaticIdentity;
/// use reech_core::policy::{AccessPolicy, AttributePolicy, Role};
///
/// let policy = AttributePolicy::strict();
/// let caller = StaticIdentity::new("A1").with_role("authority");
/// assert!(policy.has_role(&caller, Role::Authority));
/// assert!(!policy.has_role(&StaticIdentity::new("A2"), Role::Authority));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributePolicy {
    missing_attribute: MissingAttributeMode,
}

impl AttributePolicy {
    pub fn new(missing_attribute: MissingAttributeMode) -> Self {
        Self { missing_attribute }
    }

    pub fn strict() -> Self {
        Self::new(MissingAttributeMode::Strict)
    }

    pub fn permissive() -> Self {
        Self::new(MissingAttributeMode::Permissive)
    }

    pub fn missing_attribute(&self) -> MissingAttributeMode {
        self.missing_attribute
    }
}

impl AccessPolicy for AttributePolicy {
    fn has_role(&self, identity: &dyn IdentityOracle, role: Role) -> bool {
        match identity.attribute(ROLE_ATTRIBUTE) {
            Ok(Some(value)) => value == role.as_str(),
            Ok(None) | Err(_) => self.missing_attribute == MissingAttributeMode::Permissive,
        }
    }

    fn is_caller(&self, identity: &dyn IdentityOracle, claimed_id: &str) -> bool {
        // Enrollment id is stable across certificate renewal; fall back to
        // the raw caller id only when the attribute is not issued at all.
        match identity.attribute(ENROLLMENT_ID_ATTRIBUTE) {
            Ok(Some(enrollment_id)) => enrollment_id == claimed_id,
            Ok(None) => identity
                .caller_id()
                .map(|id| id == claimed_id)
                .unwrap_or(false),
            Err(_) => false,
        }
    }
}

/// Fail closed unless the caller holds `role`
///
/// # Errors
///
/// Returns `AuthorizationDenied` naming `role` and `action`.
pub fn require_role(
    policy: &dyn AccessPolicy,
    identity: &dyn IdentityOracle,
    role: Role,
    action: &str,
) -> Result<()> {
    if policy.has_role(identity, role) {
        Ok(())
    } else {
        Err(ReechError::denied(action, role.as_str()))
    }
}
