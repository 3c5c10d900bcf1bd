//! Normalization: filter out noise rows, then map row records to ledger entries.

use rust_decimal::Decimal;

use crate::config::StatementLayout;
use crate::error::Result;
use crate::types::{CellValue, Field, LedgerEntry, RawRow};

/// Whether a row record is not transaction data.
///
/// Noise rows are the download footer, rows without a date, repeated
/// header rows and rows with neither a debit nor a credit.
pub fn is_noise(row: &RawRow, layout: &StatementLayout) -> Result<bool> {
    let date = row.value(Field::Date.name())?;
    let debit = row.value(Field::Debit.name())?;
    let credit = row.value(Field::Credit.name())?;

    let date_text = date.to_string();
    Ok(date_text.contains(layout.download_marker.as_str())
        || date.is_empty()
        || matches!(date, CellValue::Text(text) if *text == layout.date_header)
        || (credit.is_empty() && debit.is_empty()))
}

/// Collapse a description to a single trimmed line with single spaces.
///
/// # Examples
///
/// ```
/// use ca_ledger::normalize::clean_description;
///
/// assert_eq!(clean_description("PAIEMENT\nCB   MAGASIN "), "PAIEMENT CB MAGASIN");
/// ```
pub fn clean_description(text: &str) -> String {
    text.replace('\n', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Map a data row to a ledger entry.
///
/// Credit wins when both monetary cells are filled; otherwise the debit
/// is negated.
pub fn to_entry(row: &RawRow) -> Result<LedgerEntry> {
    let index = row.row();

    let description = row
        .value(Field::Label.name())?
        .as_text()
        .map(|text| clean_description(&text))
        .unwrap_or_default();

    let date = row.value(Field::Date.name())?.as_date(index)?;

    let debit = row.value(Field::Debit.name())?;
    let credit = row.value(Field::Credit.name())?;
    let signed_amount: Decimal = if credit.is_empty() {
        -debit.as_amount(index)?
    } else {
        if !debit.is_empty() {
            log::warn!("Row {index} has both a debit ({debit}) and a credit ({credit}), keeping the credit");
        }
        credit.as_amount(index)?
    };

    Ok(LedgerEntry::new(date, signed_amount, description))
}

/// Filter-then-map over row records, preserving their order.
///
/// The first error ends the useful part of the sequence; callers are
/// expected to stop there.
pub fn normalize<'a, I>(rows: I, layout: &'a StatementLayout) -> impl Iterator<Item = Result<LedgerEntry>> + 'a
where
    I: IntoIterator<Item = RawRow>,
    I::IntoIter: 'a,
{
    rows.into_iter().filter_map(move |row| match is_noise(&row, layout) {
        Ok(true) => {
            log::debug!("Skipping row {}: not transaction data", row.row());
            None
        }
        Ok(false) => Some(to_entry(&row)),
        Err(e) => Some(Err(e)),
    })
}
