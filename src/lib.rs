//! Capgains - capital gains tax calculator
//!
//! This library computes the capital gains tax owed across a chronological
//! sequence of buy/sell operations on a single asset position: weighted
//! average cost basis, a sale-value exemption threshold, and loss
//! carry-forward that offsets future taxable profit.

pub mod batch;
pub mod cli;
pub mod error;
pub mod input;
pub mod tax;
pub mod utils;
