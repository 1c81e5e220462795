//! Reech Engine - Orchestration layer
//!
//! Runs contract invocations against the SQLite substrate, one SQLite
//! transaction per invocation.

pub mod commands;

pub use commands::execute::{execute, Execution};
