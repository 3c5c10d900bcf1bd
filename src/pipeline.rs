//! End-to-end conversion: workbook in, CSV ledger out.

use calamine::{Data, Range};
use std::io::Write;
use std::path::Path;

use crate::config::StatementLayout;
use crate::csv_format::LedgerCsv;
use crate::error::Result;
use crate::extract::{extract, open_sheet};
use crate::normalize::normalize;
use crate::types::LedgerEntry;

/// Convert the workbook at `input` and write the ledger to `output`.
///
/// Returns the number of entries written. Nothing is written when any
/// surviving row fails to convert.
pub fn convert<P: AsRef<Path>, W: Write>(
    input: P,
    layout: &StatementLayout,
    output: &mut W,
) -> Result<usize> {
    let range = open_sheet(input, &layout.sheet)?;
    convert_range(&range, layout, output)
}

/// Convert an already loaded worksheet.
pub fn convert_range<W: Write>(
    range: &Range<Data>,
    layout: &StatementLayout,
    output: &mut W,
) -> Result<usize> {
    let entries = read_entries(range, layout)?;
    write_entries(entries, output)
}

/// Write entries as a CSV ledger and return how many were written.
pub fn write_entries<W: Write>(entries: Vec<LedgerEntry>, output: &mut W) -> Result<usize> {
    let count = entries.len();

    LedgerCsv { entries }.write_to(output)?;
    log::info!("Wrote {count} ledger entries");
    Ok(count)
}

/// Extract and normalize every entry of a worksheet, in row order.
pub fn read_entries(range: &Range<Data>, layout: &StatementLayout) -> Result<Vec<LedgerEntry>> {
    let mapping = layout.column_mapping()?;
    let rows = extract(range, &mapping, None)?;

    let entries = normalize(rows, layout)
        .inspect(|entry| {
            if let Ok(entry) = entry {
                log::debug!("{:?}", entry);
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_write_entries_counts_rows() {
        let date = NaiveDate::from_ymd_opt(2022, 4, 1).unwrap();
        let entries = vec![
            LedgerEntry::new(date, Decimal::from(-3), "A".into()),
            LedgerEntry::new(date, Decimal::from(8), "B".into()),
        ];

        let mut out = Vec::new();
        assert_eq!(write_entries(entries, &mut out).unwrap(), 2);

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().count(), 3);
        assert_eq!(output.lines().nth(2), Some("04/01/2022,04/01/2022,8.0,B,0"));
    }
}
