use reech_core_types::{RequestId, TxId};
use thiserror::Error;

/// Result type alias using ReechError
pub type Result<T> = std::result::Result<T, ReechError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable code used by the CLI, by log pipelines and by
/// tests that need to tell failure classes apart without matching messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Caller lacks the required role or identity match
    Forbidden,
    /// Malformed numeric, date, list or identifier argument
    InvalidInput,
    NotFound,
    /// Create against an identifier that already has state
    AlreadyExists,
    /// Encode/decode failure of a stored record
    Serialization,
    /// Underlying state store operation failed
    Persistence,
    Io,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Forbidden => "ERR_FORBIDDEN",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional correlation context so that
/// an error surfaced at the CLI or in a log line can be traced back to the
/// invocation and transaction that produced it.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    tx_id: Option<TxId>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            tx_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_tx_id(mut self, tx_id: TxId) -> Self {
        self.tx_id = Some(tx_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn tx_id(&self) -> Option<&TxId> {
        self.tx_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(tx_id) = &self.tx_id {
            write!(f, " (tx_id: {})", tx_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for ledger operations
///
/// Every failure is caller-correctable (bad input, missing record) or
/// caller-unauthorized; none of these are fatal to the hosting process.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReechError {
    /// Caller lacks the required role or is not the owning identity
    #[error("only {required} can {action}")]
    AuthorizationDenied { action: String, required: String },

    /// An argument failed parsing or validation
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Lookup, update or delete against an absent key
    #[error("{entity} {id} not found")]
    NotFound { entity: String, id: String },

    /// Create against an identifier that already has committed state
    #[error("{entity} {id} already exists")]
    AlreadyExists { entity: String, id: String },

    /// Stored bytes could not be encoded or decoded
    #[error("serialization failed: {message}")]
    Serialization { message: String },

    /// The state store reported a failure
    #[error("store {op} failed: {message}")]
    Store { op: String, message: String },
}

impl ReechError {
    pub fn denied(action: impl Into<String>, required: impl Into<String>) -> Self {
        ReechError::AuthorizationDenied {
            action: action.into(),
            required: required.into(),
        }
    }

    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ReechError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        ReechError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    pub fn already_exists(entity: impl Into<String>, id: impl Into<String>) -> Self {
        ReechError::AlreadyExists {
            entity: entity.into(),
            id: id.into(),
        }
    }

    pub fn store(op: impl Into<String>, message: impl std::fmt::Display) -> Self {
        ReechError::Store {
            op: op.into(),
            message: message.to_string(),
        }
    }

    /// Classification of this error in the canonical taxonomy
    pub fn kind(&self) -> ExErrorKind {
        match self {
            ReechError::AuthorizationDenied { .. } => ExErrorKind::Forbidden,
            ReechError::Validation { .. } => ExErrorKind::InvalidInput,
            ReechError::NotFound { .. } => ExErrorKind::NotFound,
            ReechError::AlreadyExists { .. } => ExErrorKind::AlreadyExists,
            ReechError::Serialization { .. } => ExErrorKind::Serialization,
            ReechError::Store { .. } => ExErrorKind::Persistence,
        }
    }
}

impl From<ReechError> for ExError {
    fn from(err: ReechError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            ReechError::NotFound { id, .. } | ReechError::AlreadyExists { id, .. } => {
                ExError::new(kind).with_entity_id(id).with_message(message)
            }
            ReechError::Store { op, .. } => ExError::new(kind).with_op(op).with_message(message),
            ReechError::AuthorizationDenied { .. }
            | ReechError::Validation { .. }
            | ReechError::Serialization { .. } => ExError::new(kind).with_message(message),
        }
    }
}

impl From<serde_json::Error> for ReechError {
    fn from(err: serde_json::Error) -> Self {
        ReechError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::Forbidden, "ERR_FORBIDDEN"),
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
            (ExErrorKind::AlreadyExists, "ERR_ALREADY_EXISTS"),
            (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
            (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_denied_message_names_requirement() {
        let err = ReechError::denied("register fishers", "authority");
        assert_eq!(err.to_string(), "only authority can register fishers");
        assert_eq!(err.kind(), ExErrorKind::Forbidden);
    }

    #[test]
    fn test_not_found_carries_entity_id_into_facility() {
        let ex: ExError = ReechError::not_found("batch", "B002").into();
        assert_eq!(ex.kind(), ExErrorKind::NotFound);
        assert_eq!(ex.entity_id(), Some("B002"));
        assert_eq!(ex.message(), "batch B002 not found");
    }

    #[test]
    fn test_store_error_carries_op() {
        let ex: ExError = ReechError::store("get_state", "disk on fire").into();
        assert_eq!(ex.code(), "ERR_PERSISTENCE");
        assert_eq!(ex.op(), Some("get_state"));
    }

    #[test]
    fn test_serde_error_maps_to_serialization() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ReechError = bad.into();
        assert_eq!(err.kind(), ExErrorKind::Serialization);
    }
}
