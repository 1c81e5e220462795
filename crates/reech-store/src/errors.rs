//! Error handling for reech-store
//!
//! Connection and migration failures surface as `ExError`. Failures inside
//! a ledger call surface as `ReechError::Store` so the contract sees one
//! error taxonomy regardless of substrate.

use reech_core::errors::{ExError, ExErrorKind, ReechError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Map a rusqlite failure during a ledger call
pub fn ledger_error(op: &str, err: rusqlite::Error) -> ReechError {
    ReechError::store(op, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_error_is_store_variant() {
        let err = ledger_error("get_state", rusqlite::Error::InvalidQuery);
        assert!(matches!(err, ReechError::Store { ref op, .. } if op == "get_state"));
    }

    #[test]
    fn test_from_rusqlite_is_persistence() {
        let err = from_rusqlite(rusqlite::Error::InvalidQuery);
        assert_eq!(err.kind(), ExErrorKind::Persistence);
        assert_eq!(err.op(), Some("sqlite"));
    }
}
