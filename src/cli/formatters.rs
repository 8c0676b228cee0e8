//! Human-readable output for batch results

use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use crate::batch::BatchReport;

#[derive(Tabled)]
struct OperationRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Operation")]
    operation: String,
    #[tabled(rename = "Unit cost")]
    unit_cost: String,
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Tax")]
    tax: String,
}

/// Render one batch as a rounded table with a heading line.
/// Rejected operations show a dash in the tax column.
pub fn format_batch_summary(batch_number: usize, report: &BatchReport) -> String {
    let rows: Vec<OperationRow> = report
        .operations
        .iter()
        .zip(&report.results)
        .enumerate()
        .map(|(i, (op, result))| OperationRow {
            index: i + 1,
            operation: op.operation.clone(),
            unit_cost: op.unit_cost.to_string(),
            quantity: op.quantity.to_string(),
            tax: result.tax.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    format!(
        "{} Batch #{} ({} operations)\n{}",
        "✓".green().bold(),
        batch_number,
        report.operations.len(),
        table
    )
}
