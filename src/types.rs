//! Common types shared by the extractor, the normalizer and the CSV writer.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};

/// Raw value of a worksheet cell, as discovered at read time.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Nothing in the cell.
    Empty,
    /// Calendar date (date cells keep only their day).
    Date(NaiveDate),
    /// Numeric cell.
    Number(Decimal),
    /// Free text.
    Text(String),
}

impl CellValue {
    /// Returns true when the cell holds no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            CellValue::Number(number) => write!(f, "{}", number),
            CellValue::Text(text) => f.write_str(text),
        }
    }
}

/// A cell handle: the raw value plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Zero-based worksheet row index.
    pub row: usize,
    /// Zero-based column offset (column `A` is 0).
    pub column: usize,
    /// Raw value.
    pub value: CellValue,
}

/// One worksheet row, keyed by logical field name.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    row: usize,
    cells: HashMap<String, Cell>,
}

impl RawRow {
    /// Create a row record from its cells.
    pub fn new(row: usize, cells: HashMap<String, Cell>) -> Self {
        Self { row, cells }
    }

    /// Zero-based worksheet row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Cell mapped to `field`.
    pub fn get(&self, field: &str) -> Result<&Cell> {
        self.cells
            .get(field)
            .ok_or_else(|| Error::UnknownField(field.to_string()))
    }

    /// Raw value mapped to `field`.
    pub fn value(&self, field: &str) -> Result<&CellValue> {
        self.get(field).map(|cell| &cell.value)
    }
}

/// Logical fields of a bank statement row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Operation date.
    Date,
    /// Free-text label of the operation.
    Label,
    /// Outgoing amount.
    Debit,
    /// Incoming amount.
    Credit,
}

impl Field {
    /// All fields, in worksheet order.
    pub const ALL: [Field; 4] = [Field::Date, Field::Label, Field::Debit, Field::Credit];

    /// Key used in the column mapping.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Label => "libelle",
            Field::Debit => "debit",
            Field::Credit => "credit",
        }
    }
}

/// A normalized ledger entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    /// Date of the operation.
    pub operation_date: NaiveDate,

    /// Date the account was debited or credited. Always the operation date.
    pub settlement_date: NaiveDate,

    /// Positive for credits, negative for debits.
    pub signed_amount: Decimal,

    /// Single-line description, empty when the source had none.
    pub description: String,

    /// Running balance placeholder, always zero.
    pub balance: Decimal,
}

impl LedgerEntry {
    /// Create an entry settled on its operation date with a zero balance.
    pub fn new(date: NaiveDate, signed_amount: Decimal, description: String) -> Self {
        Self {
            operation_date: date,
            settlement_date: date,
            signed_amount,
            description,
            balance: Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        let names: Vec<&str> = Field::ALL.iter().map(Field::name).collect();
        assert_eq!(names, vec!["date", "libelle", "debit", "credit"]);
    }

    #[test]
    fn test_cell_value_display() {
        let date = NaiveDate::from_ymd_opt(2022, 4, 1).unwrap();
        assert_eq!(CellValue::Date(date).to_string(), "2022-04-01");
        assert_eq!(CellValue::Text("Date".into()).to_string(), "Date");
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn test_raw_row_unknown_field() {
        let row = RawRow::new(3, HashMap::new());
        assert!(matches!(row.get("date"), Err(Error::UnknownField(_))));
    }

    #[test]
    fn test_ledger_entry_new() {
        let date = NaiveDate::from_ymd_opt(2022, 4, 2).unwrap();
        let entry = LedgerEntry::new(date, Decimal::new(100, 0), String::new());
        assert_eq!(entry.settlement_date, entry.operation_date);
        assert_eq!(entry.balance, Decimal::ZERO);
    }
}
