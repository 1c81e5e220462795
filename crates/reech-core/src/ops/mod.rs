//! State transitions and lookups
//!
//! Every gated operation runs the same sequence: authorization, argument
//! validation, existence check, construction, serialization, write. The
//! first failing step returns and nothing after it runs.

pub mod aggregate_ops;
pub mod asset_ops;
pub mod harvest_ops;
pub mod order_ops;
pub mod participant_ops;
pub mod records;
