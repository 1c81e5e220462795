//! Structured logging facility for the Reech ledger
//!
//! - Single initialization point via `init(profile)`
//! - Structured macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! The invocation boundary (`apply::invoke`) owns the start/end pair for
//! each contract entry point. Operation bodies only emit `debug!` detail.
//!
//! ```rust
//! use reech_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
