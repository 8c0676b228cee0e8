use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use capgains::batch;
use capgains::cli::{formatters, Cli};

fn main() -> Result<()> {
    // Logging goes to stderr so stdout stays a clean JSON stream
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let input = match &cli.file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let reports = batch::run(&input)?;

    if cli.summary {
        for (index, report) in reports.iter().enumerate() {
            println!("{}", formatters::format_batch_summary(index + 1, report));
        }
    } else {
        for report in &reports {
            println!("{}", report.to_json_line()?);
        }
    }

    Ok(())
}
