//! CV extraction dataset utilities
//!
//! Library surface behind the `cvx` binary: CSV dataset loading and
//! persistence, required-field normalization, row matching, free-text
//! sanitization and JSON export.

pub mod cli;
pub mod dataset;
