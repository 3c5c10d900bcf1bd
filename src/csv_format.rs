//! CSV ledger serializer.
//!
//! This module writes normalized ledger entries in the comma-separated
//! layout expected by the downstream accounting import.

use crate::error::Result;
use crate::types::LedgerEntry;
use csv::{QuoteStyle, WriterBuilder};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// Quote character of the ledger files, used only when a field needs it.
pub const QUOTE_CHAR: u8 = b'|';

/// Date layout of the ledger files.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Ledger entries ready to be written as CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerCsv {
    /// Entries, in output order.
    pub entries: Vec<LedgerEntry>,
}

/// CSV ledger record structure. Field names form the header row.
#[derive(Debug, Serialize)]
struct CsvRecord {
    date_operation: String,
    date_debit_credit: String,
    debit_credit: String,
    libelle: String,
    balance: String,
}

impl From<&LedgerEntry> for CsvRecord {
    fn from(entry: &LedgerEntry) -> Self {
        CsvRecord {
            date_operation: entry.operation_date.format(DATE_FORMAT).to_string(),
            date_debit_credit: entry.settlement_date.format(DATE_FORMAT).to_string(),
            debit_credit: format_amount(entry.signed_amount),
            libelle: entry.description.clone(),
            balance: entry.balance.normalize().to_string(),
        }
    }
}

impl LedgerCsv {
    /// Write the ledger to any destination implementing `Write`.
    ///
    /// The header row is always written, even with no entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use ca_ledger::csv_format::LedgerCsv;
    ///
    /// let mut out = Vec::new();
    /// LedgerCsv { entries: Vec::new() }.write_to(&mut out)?;
    /// assert_eq!(
    ///     String::from_utf8(out).unwrap(),
    ///     "date_operation,date_debit_credit,debit_credit,libelle,balance\n"
    /// );
    /// # Ok::<(), ca_ledger::Error>(())
    /// ```
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut csv_writer = WriterBuilder::new()
            .has_headers(false)
            .quote(QUOTE_CHAR)
            .quote_style(QuoteStyle::Necessary)
            .from_writer(writer);

        csv_writer.write_record([
            "date_operation",
            "date_debit_credit",
            "debit_credit",
            "libelle",
            "balance",
        ])?;

        for entry in &self.entries {
            csv_writer.serialize(CsvRecord::from(entry))?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

/// Plain decimal with at least one fractional digit: `100.0`, `-42.5`.
fn format_amount(amount: Decimal) -> String {
    let amount = amount.normalize();
    if amount.scale() == 0 {
        format!("{}.0", amount)
    } else {
        amount.to_string()
    }
}
