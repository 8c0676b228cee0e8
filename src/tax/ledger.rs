use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::input::{Operation, OperationKind, RawOperation};

/// Sale value at or below this threshold is exempt from tax.
///
/// Losses realized under the exemption still feed the carry-forward
/// ledger; profits under it are simply untaxed and not tracked further.
pub const EXEMPTION_THRESHOLD: Decimal = Decimal::from_parts(2_000_000, 0, 0, false, 2);

/// Flat rate applied to taxable profit (20%)
pub const TAX_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// Capital gains ledger for a single asset position.
///
/// A pure fold over one batch's operation sequence: consumes operations in
/// input order, one at a time, and yields the tax due for each. Owns all
/// mutable state: shares held, weighted-average acquisition cost, and the
/// cumulative loss available to offset future taxable profit.
#[derive(Debug, Default)]
pub struct PositionLedger {
    shares_owned: Decimal,
    average_cost: Decimal,
    carried_loss: Decimal,
}

impl PositionLedger {
    pub fn new() -> Self {
        Self {
            shares_owned: Decimal::ZERO,
            average_cost: Decimal::ZERO,
            carried_loss: Decimal::ZERO,
        }
    }

    /// Process one operation and return the tax due for it.
    ///
    /// Every error is per-operation and leaves the ledger untouched, so
    /// the caller can surface it and keep folding the rest of the batch
    /// against the same state.
    pub fn apply(&mut self, raw: &RawOperation) -> Result<Decimal, LedgerError> {
        let op = raw.to_operation()?;

        match op.kind {
            OperationKind::Buy => {
                self.handle_buy(&op);
                Ok(Decimal::ZERO)
            }
            OperationKind::Sell => self.handle_sell(&op),
        }
    }

    /// Fold the purchase into the weighted average.
    /// A zero-quantity buy is a no-op on the average cost.
    fn handle_buy(&mut self, op: &Operation) {
        let new_total_shares = self.shares_owned + op.quantity;
        if new_total_shares > Decimal::ZERO {
            let total_cost = self.average_cost * self.shares_owned;
            let additional_cost = op.unit_cost * op.quantity;
            self.average_cost = (total_cost + additional_cost) / new_total_shares;
        }
        self.shares_owned = new_total_shares;
    }

    fn handle_sell(&mut self, op: &Operation) -> Result<Decimal, LedgerError> {
        if op.quantity > self.shares_owned {
            return Err(LedgerError::Oversell {
                requested: op.quantity,
                owned: self.shares_owned,
            });
        }

        let sale_value = op.unit_cost * op.quantity;
        let profit_or_loss = (op.unit_cost - self.average_cost) * op.quantity;

        if sale_value <= EXEMPTION_THRESHOLD {
            if profit_or_loss < Decimal::ZERO {
                self.carried_loss += profit_or_loss.abs();
            }
            self.shares_owned -= op.quantity;
            return Ok(Decimal::ZERO);
        }

        // Average cost is only recomputed on buys
        self.shares_owned -= op.quantity;

        if profit_or_loss > Decimal::ZERO {
            let mut taxable_profit = profit_or_loss;

            if self.carried_loss > Decimal::ZERO {
                if self.carried_loss >= taxable_profit {
                    self.carried_loss -= taxable_profit;
                    taxable_profit = Decimal::ZERO;
                } else {
                    taxable_profit -= self.carried_loss;
                    self.carried_loss = Decimal::ZERO;
                }
            }

            if taxable_profit > Decimal::ZERO {
                Ok(taxable_profit * TAX_RATE)
            } else {
                Ok(Decimal::ZERO)
            }
        } else if profit_or_loss < Decimal::ZERO {
            self.carried_loss += profit_or_loss.abs();
            Ok(Decimal::ZERO)
        } else {
            Ok(Decimal::ZERO)
        }
    }

    pub fn shares_owned(&self) -> Decimal {
        self.shares_owned
    }

    pub fn average_cost(&self) -> Decimal {
        self.average_cost
    }

    pub fn carried_loss(&self) -> Decimal {
        self.carried_loss
    }
}
