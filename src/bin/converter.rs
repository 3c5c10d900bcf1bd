//! CA Ledger Converter - CLI tool turning a bank spreadsheet export into a CSV ledger.

use clap::Parser;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use ca_ledger::{config, extract, pipeline, LedgerColumns, Result, StatementLayout};

#[derive(Parser)]
#[command(name = "ca_ledger_convert")]
#[command(about = "Convert a bank spreadsheet export (xlsx, xls, ods) to a CSV ledger", long_about = None)]
struct Cli {
    /// Input workbook path
    #[arg(short, long)]
    input: PathBuf,

    /// Output file path (or stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Worksheet holding the transactions
    #[arg(long, default_value = config::DEFAULT_SHEET)]
    sheet: String,

    /// Column of the operation date
    #[arg(long = "date-column", default_value = config::DEFAULT_DATE_COLUMN)]
    date_column: String,

    /// Column of the label
    #[arg(long = "label-column", default_value = config::DEFAULT_LABEL_COLUMN)]
    label_column: String,

    /// Column of the debit amount
    #[arg(long = "debit-column", default_value = config::DEFAULT_DEBIT_COLUMN)]
    debit_column: String,

    /// Column of the credit amount
    #[arg(long = "credit-column", default_value = config::DEFAULT_CREDIT_COLUMN)]
    credit_column: String,
}

impl Cli {
    fn layout(&self) -> StatementLayout {
        StatementLayout {
            sheet: self.sheet.clone(),
            columns: LedgerColumns {
                date: self.date_column.clone(),
                label: self.label_column.clone(),
                debit: self.debit_column.clone(),
                credit: self.credit_column.clone(),
            },
            ..StatementLayout::default()
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let layout = cli.layout();

    // Read everything first so a bad row leaves no output file behind
    let range = extract::open_sheet(&cli.input, &layout.sheet)?;
    let entries = pipeline::read_entries(&range, &layout)?;

    // Output based on output file or stdout
    if let Some(ref output_path) = cli.output {
        let mut file = File::create(output_path)?;
        pipeline::write_entries(entries, &mut file)?;
    } else {
        let mut stdout = io::stdout();
        pipeline::write_entries(entries, &mut stdout)?;
    }

    Ok(())
}
