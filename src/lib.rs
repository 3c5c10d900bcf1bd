//! CA Ledger Library
//!
//! A library for turning a bank spreadsheet export into a normalized CSV
//! ledger.
//!
//! # Pipeline
//!
//! - **Extraction**: worksheet rows become row records keyed by field name
//! - **Normalization**: header, footer and empty rows are dropped, the rest
//!   become ledger entries with a date, a signed amount and a clean label
//! - **Output**: entries are written as CSV with a fixed header
//!
//! # Examples
//!
//! ## Converting an export
//!
//! ```no_run
//! use std::fs::File;
//! use ca_ledger::{pipeline, StatementLayout};
//!
//! let layout = StatementLayout::default();
//! let mut output = File::create("generated_csv.csv")?;
//! let count = pipeline::convert("CA20220405_001636.xlsx", &layout, &mut output)?;
//! println!("{count} entries");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Extracting rows only
//!
//! ```no_run
//! use ca_ledger::column::ColumnMapping;
//! use ca_ledger::extract::{extract, open_sheet};
//!
//! let range = open_sheet("export.xlsx", "Sheet0")?;
//! let mapping = ColumnMapping::new([("date", "A"), ("libelle", "B")])?;
//! for row in extract(&range, &mapping, Some("date"))? {
//!     println!("{}: {}", row.row(), row.value("libelle")?);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod types;
pub mod conversion;
pub mod column;
pub mod config;
pub mod extract;
pub mod normalize;
pub mod csv_format;
pub mod pipeline;

// Re-export commonly used types
pub use config::{LedgerColumns, StatementLayout};
pub use error::{Error, Result};
pub use types::{Cell, CellValue, Field, LedgerEntry, RawRow};
