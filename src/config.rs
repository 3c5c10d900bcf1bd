//! Statement layout: where things live in the bank export.

use crate::column::ColumnMapping;
use crate::error::Result;
use crate::types::Field;

/// Header label the export repeats in the date column.
pub const DEFAULT_DATE_HEADER: &str = "Date";

/// Text fragment of the footer line the export appends to the date column.
pub const DEFAULT_DOWNLOAD_MARKER: &str = "Téléchargement";

/// Worksheet name used by the export.
pub const DEFAULT_SHEET: &str = "Sheet0";

/// Column letters used by the export.
pub const DEFAULT_DATE_COLUMN: &str = "A";
pub const DEFAULT_LABEL_COLUMN: &str = "B";
pub const DEFAULT_DEBIT_COLUMN: &str = "C";
pub const DEFAULT_CREDIT_COLUMN: &str = "D";

/// Column letters for each statement field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerColumns {
    pub date: String,
    pub label: String,
    pub debit: String,
    pub credit: String,
}

impl Default for LedgerColumns {
    fn default() -> Self {
        Self {
            date: DEFAULT_DATE_COLUMN.into(),
            label: DEFAULT_LABEL_COLUMN.into(),
            debit: DEFAULT_DEBIT_COLUMN.into(),
            credit: DEFAULT_CREDIT_COLUMN.into(),
        }
    }
}

impl LedgerColumns {
    /// Column letters for `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Label => &self.label,
            Field::Debit => &self.debit,
            Field::Credit => &self.credit,
        }
    }
}

/// Everything needed to read one bank export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLayout {
    /// Worksheet holding the transactions.
    pub sheet: String,
    pub columns: LedgerColumns,
    /// Date-column text marking a repeated header row.
    pub date_header: String,
    /// Date-column fragment marking the download footer row.
    pub download_marker: String,
}

impl Default for StatementLayout {
    fn default() -> Self {
        Self {
            sheet: DEFAULT_SHEET.into(),
            columns: LedgerColumns::default(),
            date_header: DEFAULT_DATE_HEADER.into(),
            download_marker: DEFAULT_DOWNLOAD_MARKER.into(),
        }
    }
}

impl StatementLayout {
    /// Build the column mapping for all four fields.
    pub fn column_mapping(&self) -> Result<ColumnMapping> {
        ColumnMapping::new(
            Field::ALL
                .iter()
                .map(|field| (field.name(), self.columns.get(*field))),
        )
    }
}
