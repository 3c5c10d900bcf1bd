//! Tabular extraction: worksheet rows to field-keyed row records.
//!
//! The extractor walks a worksheet from its first row and yields one
//! [`RawRow`] per physical row, keyed by the fields of a [`ColumnMapping`].
//! It is lenient on purpose: bank exports routinely start with merged header
//! cells, so rows too short to hold every mapped column are skipped rather
//! than reported.

use calamine::{open_workbook_auto, Data, Range, Reader, Rows};
use std::collections::HashMap;
use std::path::Path;

use crate::column::ColumnMapping;
use crate::error::{Error, Result};
use crate::types::{Cell, CellValue, RawRow};

/// Open a workbook read-only and load one worksheet.
///
/// # Examples
///
/// ```no_run
/// use ca_ledger::extract::open_sheet;
///
/// let range = open_sheet("CA20220405_001636.xlsx", "Sheet0")?;
/// println!("{} rows", range.height());
/// # Ok::<(), ca_ledger::Error>(())
/// ```
pub fn open_sheet<P: AsRef<Path>>(path: P, sheet_name: &str) -> Result<Range<Data>> {
    let path = path.as_ref();
    log::info!("Opening workbook {}...", path.display());
    let mut workbook = open_workbook_auto(path)?;

    if !workbook.sheet_names().iter().any(|name| name == sheet_name) {
        return Err(Error::SheetNotFound(sheet_name.to_string()));
    }

    let range = workbook.worksheet_range(sheet_name)?;
    log::info!("Opening workbook {}...done", path.display());
    Ok(range)
}

/// Extract row records from a worksheet.
///
/// When `required_field` is given, rows whose cell for that field is empty
/// are skipped without looking at the other fields.
pub fn extract<'a>(
    range: &'a Range<Data>,
    mapping: &'a ColumnMapping,
    required_field: Option<&str>,
) -> Result<RowRecords<'a>> {
    let required = match required_field {
        Some(field) => Some(
            mapping
                .offset(field)
                .ok_or_else(|| Error::UnknownField(field.to_string()))?,
        ),
        None => None,
    };

    let (first_row, first_column) = range
        .start()
        .map(|(row, column)| (row as usize, column as usize))
        .unwrap_or((0, 0));

    Ok(RowRecords {
        rows: range.rows().enumerate(),
        mapping,
        first_row,
        first_column,
        max_offset: mapping.max_offset().unwrap_or(0),
        required,
    })
}

/// Lazy, one-shot sequence of row records in worksheet order.
pub struct RowRecords<'a> {
    rows: std::iter::Enumerate<Rows<'a, Data>>,
    mapping: &'a ColumnMapping,
    first_row: usize,
    first_column: usize,
    max_offset: usize,
    required: Option<usize>,
}

impl RowRecords<'_> {
    /// Whether a row physically reaches every mapped column.
    fn spans_mapping(&self, row: &[Data]) -> bool {
        self.first_column + row.len() > self.max_offset
    }

    fn value_at(&self, row: &[Data], offset: usize) -> CellValue {
        offset
            .checked_sub(self.first_column)
            .and_then(|index| row.get(index))
            .map(CellValue::from)
            .unwrap_or(CellValue::Empty)
    }
}

impl Iterator for RowRecords<'_> {
    type Item = RawRow;

    fn next(&mut self) -> Option<RawRow> {
        loop {
            let (index, row) = self.rows.next()?;
            let row_index = self.first_row + index;

            if !self.spans_mapping(row) {
                log::debug!("Skipping row {row_index}: shorter than the mapped columns");
                continue;
            }

            if let Some(offset) = self.required {
                if self.value_at(row, offset).is_empty() {
                    continue;
                }
            }

            let cells: HashMap<String, Cell> = self
                .mapping
                .iter()
                .map(|(field, offset)| {
                    let cell = Cell {
                        row: row_index,
                        column: offset,
                        value: self.value_at(row, offset),
                    };
                    (field.to_string(), cell)
                })
                .collect();

            return Some(RawRow::new(row_index, cells));
        }
    }
}
