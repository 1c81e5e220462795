//! Core types shared across the Reech ledger crates
//!
//! - **Correlation types**: RequestId, TxId, InvocationContext
//! - **Sensitive data**: Sensitive<T> marker for automatic redaction
//! - **Schema constants**: Canonical structured-log field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::{InvocationContext, RequestId, TxId};
pub use sensitive::Sensitive;
