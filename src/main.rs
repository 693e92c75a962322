use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use statement::config::ReportConfig;
use statement::reports::IncomeStatement;
use statement::{display, loader, services, writer};

#[derive(Parser)]
#[command(
    name = "statement",
    version,
    about = "Generates an income statement from a transaction ledger",
    long_about = "Reads a spreadsheet ledger of transactions, classifies each row \
                  as revenue or expense by its free-text category label, and writes \
                  a formatted income statement back out as a spreadsheet."
)]
struct Cli {
    /// Ledger file to read (xlsx or csv)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Report file to write (xlsx or csv), overwritten if present
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON settings file with input/output paths
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ReportConfig::load_or_default(cli.config.as_deref())?;
    if let Some(input) = cli.input {
        config.input_path = input;
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }

    println!("--- Starting financial report generation ---");
    println!("Reading transactions from: {}", config.input_path.display());

    let raw = loader::load_table(&config.input_path)?;
    println!("Data loaded successfully: {} data row(s).", raw.len());
    println!();
    println!(
        "First {} rows of raw transaction data:",
        display::PREVIEW_ROWS
    );
    print!("{}", display::format_raw_preview(&raw));

    let cleaned = services::clean(raw);
    if cleaned.dropped_rows > 0 {
        println!(
            "Dropped {} row(s) with a non-numeric amount.",
            cleaned.dropped_rows
        );
    }

    let statement = IncomeStatement::from_entries(&cleaned.entries);
    let lines = statement.lines();

    println!();
    println!("--- Generated income statement preview ---");
    print!("{}", display::format_report(&lines));
    println!();

    writer::write_report(&config.output_path, &lines)?;
    println!(
        "SUCCESS: Income statement saved to '{}'",
        config.output_path.display()
    );

    Ok(())
}
