use clap::Parser;

pub mod formatters;

#[derive(Parser)]
#[command(name = "capgains")]
#[command(
    version,
    about = "Capital gains tax calculator for buy/sell operation batches"
)]
#[command(
    long_about = "Reads one or more JSON arrays of buy/sell operations and prints, for each batch, the tax due per operation. Batches are independent: each gets a fresh position ledger, and a malformed batch is dropped without affecting its siblings."
)]
pub struct Cli {
    /// Input file with operation batches (reads stdin when omitted)
    pub file: Option<String>,

    /// Disable colorized/ANSI output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Print a human-readable per-batch table instead of JSON lines
    #[arg(short, long)]
    pub summary: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["capgains", "--no-color", "--summary", "input.txt"]);
        assert!(cli.no_color);
        assert!(cli.summary);
        assert_eq!(cli.file.as_deref(), Some("input.txt"));
    }
}
