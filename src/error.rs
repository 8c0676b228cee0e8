//! Error handling for capgains
//!
//! Defines the per-operation and input-level error types and establishes
//! a unified Result type using anyhow for context chaining and error
//! propagation.

use rust_decimal::Decimal;
use thiserror::Error;

/// Per-operation error conditions.
///
/// All of these are non-fatal: the batch runner surfaces them as a null
/// tax result and keeps folding the remaining operations of the same
/// batch against unchanged ledger state.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("cannot sell {requested} shares, only {owned} owned")]
    Oversell { requested: Decimal, owned: Decimal },

    #[error("invalid operation type: {0}")]
    UnknownOperation(String),

    #[error("malformed {field}: {value}")]
    MalformedNumber { field: &'static str, value: String },
}

/// Structural input failures.
///
/// Empty input and unmatched brackets abort the whole run; an unparseable
/// batch drops that batch only, sibling batches are unaffected.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("no input provided")]
    Empty,

    #[error("no JSON arrays found in the input")]
    NoArrays,

    #[error("invalid JSON input: unmatched brackets")]
    UnmatchedBrackets,

    #[error("invalid JSON array: {0}")]
    InvalidArray(#[from] serde_json::Error),
}

/// Result type alias for capgains operations
pub type Result<T> = anyhow::Result<T>;
