// Input module - raw operation records and validation

pub mod extract;

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::error::LedgerError;

/// Operation record as it appears on the wire.
///
/// Numeric fields are kept as raw JSON values so that a malformed price or
/// quantity invalidates that one operation instead of failing the whole
/// batch deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawOperation {
    pub operation: String,

    #[serde(rename = "unit-cost", default)]
    pub unit_cost: Value,

    #[serde(default)]
    pub quantity: Value,
}

/// Kind of trade operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Buy,
    Sell,
}

/// A validated operation ready for the ledger
#[derive(Debug, Clone)]
pub struct Operation {
    pub kind: OperationKind,
    pub unit_cost: Decimal,
    pub quantity: Decimal,
}

impl RawOperation {
    /// Validate the raw record into a typed operation.
    ///
    /// Unknown operation kinds and non-numeric (or negative) price/quantity
    /// fields are rejected with a structured error the caller can surface
    /// as a null tax result.
    pub fn to_operation(&self) -> Result<Operation, LedgerError> {
        let kind = match self.operation.as_str() {
            "buy" => OperationKind::Buy,
            "sell" => OperationKind::Sell,
            other => return Err(LedgerError::UnknownOperation(other.to_string())),
        };

        let unit_cost = decimal_field(&self.unit_cost, "unit-cost")?;
        let quantity = decimal_field(&self.quantity, "quantity")?;

        Ok(Operation {
            kind,
            unit_cost,
            quantity,
        })
    }
}

/// Convert a raw JSON value into a non-negative Decimal.
///
/// Goes through the number's literal representation to keep exact decimal
/// digits instead of round-tripping through f64.
fn decimal_field(value: &Value, field: &'static str) -> Result<Decimal, LedgerError> {
    let parsed = match value {
        Value::Number(n) => {
            let literal = n.to_string();
            Decimal::from_str(&literal)
                .or_else(|_| Decimal::from_scientific(&literal))
                .ok()
        }
        _ => None,
    };

    match parsed {
        Some(d) if d >= Decimal::ZERO => Ok(d),
        _ => Err(LedgerError::MalformedNumber {
            field,
            value: value.to_string(),
        }),
    }
}
