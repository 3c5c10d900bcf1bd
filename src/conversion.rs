//! Cell value conversions.
//!
//! Worksheet cells are converted once into [`CellValue`] using Rust's `From`
//! trait. Each canonical field then has its own total conversion that fails
//! with a named error instead of coercing silently.

use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::types::CellValue;

/// Convert a raw worksheet cell into a tagged value.
impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) if s.is_empty() => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Int(i) => CellValue::Number(Decimal::from(*i)),
            Data::Float(f) => match Decimal::try_from(*f) {
                Ok(number) => CellValue::Number(number.normalize()),
                Err(_) => CellValue::Text(f.to_string()),
            },
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(datetime) => CellValue::Date(datetime.date()),
                None => CellValue::Text(dt.as_f64().to_string()),
            },
            Data::DateTimeIso(s) => match parse_iso_date(s) {
                Some(date) => CellValue::Date(date),
                None => CellValue::Text(s.clone()),
            },
            other => CellValue::Text(other.to_string()),
        }
    }
}

impl CellValue {
    /// Read the value as a calendar date.
    pub fn as_date(&self, row: usize) -> Result<NaiveDate> {
        match self {
            CellValue::Date(date) => Ok(*date),
            other => Err(Error::InvalidDate {
                row,
                value: other.describe(),
            }),
        }
    }

    /// Read the value as a monetary amount.
    ///
    /// Text is accepted when it reads as a number in the source locale,
    /// e.g. `"1 540,00"`.
    pub fn as_amount(&self, row: usize) -> Result<Decimal> {
        match self {
            CellValue::Number(number) => Ok(*number),
            CellValue::Text(text) => parse_amount(text).ok_or_else(|| Error::InvalidAmount {
                row,
                value: text.clone(),
            }),
            other => Err(Error::InvalidAmount {
                row,
                value: other.describe(),
            }),
        }
    }

    /// Read the value as text, `None` when the cell is empty.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }

    fn describe(&self) -> String {
        match self {
            CellValue::Empty => "<empty>".to_string(),
            other => format!("{:?}", other.to_string()),
        }
    }
}

fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|datetime| datetime.date())
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}

fn parse_amount(amount_str: &str) -> Option<Decimal> {
    // Remove spaces (including non-breaking ones) and replace comma with dot
    let cleaned: String = amount_str
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    Decimal::from_str(&cleaned).ok()
}
