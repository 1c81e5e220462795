//! Engine-level commands that need a database connection

pub mod execute;
