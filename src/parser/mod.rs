//! Parsers for the text output of platform utilities.
//!
//! Each submodule handles one output shape. Parsers are best-effort:
//! malformed lines are skipped, never fatal. Failures to run the utility
//! itself are surfaced by the providers, not here.

pub mod blocks;
pub mod columns;
pub mod counters;

pub use columns::ColumnTable;
