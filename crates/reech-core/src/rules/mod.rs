//! Argument parsing and validation shared by the transition ops

pub mod validation;
