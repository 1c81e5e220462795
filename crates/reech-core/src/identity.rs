//! Identity oracle: who is invoking, and with which attributes
//!
//! The ledger substrate authenticates the caller; the core only reads the
//! resulting snapshot through `IdentityOracle`. Implementations must not
//! perform writes or cache across invocations.

use std::collections::BTreeMap;

use thiserror::Error;

/// Attribute holding the caller's role
pub const ROLE_ATTRIBUTE: &str = "role";

/// Attribute holding the caller's enrollment id
pub const ENROLLMENT_ID_ATTRIBUTE: &str = "hf.EnrollmentID";

/// Failure to read identity material (unparseable certificate, missing
/// extension, revoked credentials, ...)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("identity unavailable: {0}")]
pub struct IdentityError(pub String);

/// Read-only view of the invoking identity
pub trait IdentityOracle {
    /// Stable unique identifier of the caller
    ///
    /// # Errors
    ///
    /// Returns `IdentityError` if the substrate cannot resolve the caller.
    fn caller_id(&self) -> Result<String, IdentityError>;

    /// Value of a named attribute, `Ok(None)` when absent
    ///
    /// # Errors
    ///
    /// Returns `IdentityError` if the attribute mechanism itself failed,
    /// which is distinct from the attribute simply not being present.
    fn attribute(&self, name: &str) -> Result<Option<String>, IdentityError>;
}

/// Identity with a fixed id and attribute set
///
/// Used by the CLI (identity supplied on the command line) and by tests.
///
/// ```
/// use reech_core::identity::{IdentityOracle, StaticIdentity};
///
/// let id = StaticIdentity::new("F001").with_role("fisher");
/// assert_eq!(id.attribute("role").unwrap().as_deref(), Some("fisher"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    caller_id: Option<String>,
    attributes: BTreeMap<String, String>,
    attributes_unreadable: bool,
}

impl StaticIdentity {
    pub fn new(caller_id: impl Into<String>) -> Self {
        Self {
            caller_id: Some(caller_id.into()),
            ..Self::default()
        }
    }

    /// An identity whose caller id cannot be resolved
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_role(self, role: impl Into<String>) -> Self {
        self.with_attribute(ROLE_ATTRIBUTE, role)
    }

    pub fn with_enrollment_id(self, enrollment_id: impl Into<String>) -> Self {
        self.with_attribute(ENROLLMENT_ID_ATTRIBUTE, enrollment_id)
    }

    /// Make every attribute read fail, as with a certificate that carries
    /// no attribute extension at all
    pub fn with_unreadable_attributes(mut self) -> Self {
        self.attributes_unreadable = true;
        self
    }
}

impl IdentityOracle for StaticIdentity {
    fn caller_id(&self) -> Result<String, IdentityError> {
        self.caller_id
            .clone()
            .ok_or_else(|| IdentityError("caller id not set".to_string()))
    }

    fn attribute(&self, name: &str) -> Result<Option<String>, IdentityError> {
        if self.attributes_unreadable {
            return Err(IdentityError(format!("cannot read attribute {}", name)));
        }
        Ok(self.attributes.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_attribute_is_none_not_error() {
        let id = StaticIdentity::new("u1");
        assert_eq!(id.attribute(ROLE_ATTRIBUTE), Ok(None));
    }

    #[test]
    fn test_unreadable_attributes_error() {
        let id = StaticIdentity::new("u1")
            .with_role("buyer")
            .with_unreadable_attributes();
        assert!(id.attribute(ROLE_ATTRIBUTE).is_err());
        assert_eq!(id.caller_id().as_deref(), Ok("u1"));
    }

    #[test]
    fn test_anonymous_has_no_caller_id() {
        assert!(StaticIdentity::anonymous().caller_id().is_err());
    }
}
