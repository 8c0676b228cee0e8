// Tax module - capital gains calculation (average cost, exemption, loss carryforward)

pub mod ledger;

pub use ledger::{PositionLedger, EXEMPTION_THRESHOLD, TAX_RATE};
