// Batch module - per-batch ledger runs with failure isolation

use serde::Serialize;
use tracing::{error, info, warn};

use crate::error::{InputError, Result};
use crate::input::extract::extract_json_arrays;
use crate::input::RawOperation;
use crate::tax::PositionLedger;
use crate::utils::format_tax;

/// Tax result for a single operation.
///
/// `None` signals a rejected operation (oversell, unknown kind, malformed
/// numbers) and serializes as `{"tax": null}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxResult {
    pub tax: Option<String>,
}

/// One successfully parsed batch together with its per-operation results
#[derive(Debug)]
pub struct BatchReport {
    pub operations: Vec<RawOperation>,
    pub results: Vec<TaxResult>,
}

impl BatchReport {
    /// Serialize the result list as one JSON line.
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.results)?)
    }
}

/// Run one batch of operations through a fresh ledger.
///
/// Rejected operations degrade to a null result and leave the ledger
/// untouched; the remaining operations still see the same state.
pub fn process_operations(operations: &[RawOperation]) -> Vec<TaxResult> {
    let mut ledger = PositionLedger::new();

    operations
        .iter()
        .map(|op| match ledger.apply(op) {
            Ok(tax) => TaxResult {
                tax: Some(format_tax(tax)),
            },
            Err(e) => {
                warn!("operation rejected: {e}");
                TaxResult { tax: None }
            }
        })
        .collect()
}

/// Process a whole raw input.
///
/// Splits the text into independent JSON-array batches, parses and runs
/// each against its own fresh ledger, and returns the surviving batches in
/// input order. A batch that fails to parse is reported and dropped;
/// sibling batches are unaffected. Empty input and unmatched brackets
/// abort the whole run.
pub fn run(input: &str) -> Result<Vec<BatchReport>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty.into());
    }

    let arrays = extract_json_arrays(trimmed)?;
    if arrays.is_empty() {
        return Err(InputError::NoArrays.into());
    }

    let mut reports = Vec::new();
    for (index, array) in arrays.iter().enumerate() {
        match serde_json::from_str::<Vec<RawOperation>>(array).map_err(InputError::from) {
            Ok(operations) => {
                let results = process_operations(&operations);
                reports.push(BatchReport {
                    operations,
                    results,
                });
            }
            Err(e) => {
                error!("error processing batch #{}: {e}", index + 1);
            }
        }
    }

    info!("processed {} of {} batch(es)", reports.len(), arrays.len());
    Ok(reports)
}
