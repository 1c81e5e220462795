//! Canonical schema constants for structured logging
//!
//! Every crate logs through these keys so that log pipelines can index
//! ledger activity without per-crate mappings.

// Envelope fields
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TX_ID: &str = "tx_id";

// Ledger addressing
pub const FIELD_KEY: &str = "key";
pub const FIELD_COLLECTION: &str = "collection";
pub const FIELD_ENTITY_ID: &str = "entity_id";

// Identity, on authorization denials
pub const FIELD_CALLER: &str = "caller";
pub const FIELD_ROLE: &str = "role";

// Report scan counters
pub const FIELD_SCANNED: &str = "scanned";
pub const FIELD_MATCHED: &str = "matched";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
