//! Column references and the field-to-column mapping.

use crate::error::{Error, Result};

/// Largest column offset a worksheet can address (`XFD`).
const MAX_COLUMN: usize = 16_383;

/// Resolve a letter-based column reference to a zero-based offset.
///
/// `"A"` is 0, `"Z"` is 25, `"AA"` is 26. Lowercase letters are accepted.
pub fn column_index(reference: &str) -> Result<usize> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(Error::InvalidColumn(reference.to_string()));
    }

    let mut index: usize = 0;
    for c in reference.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidColumn(reference.to_string()));
        }
        let digit = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        index = index * 26 + digit;
        if index > MAX_COLUMN + 1 {
            return Err(Error::InvalidColumn(reference.to_string()));
        }
    }

    Ok(index - 1)
}

/// Mapping from logical field name to column offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    columns: Vec<(String, usize)>,
}

impl ColumnMapping {
    /// Build a mapping from `(field, column letters)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use ca_ledger::column::ColumnMapping;
    ///
    /// let mapping = ColumnMapping::new([("date", "A"), ("libelle", "B")])?;
    /// assert_eq!(mapping.offset("libelle"), Some(1));
    /// # Ok::<(), ca_ledger::Error>(())
    /// ```
    pub fn new<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut columns: Vec<(String, usize)> = Vec::new();
        for (field, reference) in pairs {
            let field = field.into();
            let offset = column_index(reference.as_ref())?;
            match columns.iter_mut().find(|(name, _)| *name == field) {
                Some(existing) => existing.1 = offset,
                None => columns.push((field, offset)),
            }
        }
        Ok(Self { columns })
    }

    /// Column offset of `field`, if mapped.
    pub fn offset(&self, field: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, offset)| *offset)
    }

    /// Highest column offset any field needs.
    pub fn max_offset(&self) -> Option<usize> {
        self.columns.iter().map(|(_, offset)| *offset).max()
    }

    /// Iterate over `(field, offset)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.columns.iter().map(|(name, offset)| (name.as_str(), *offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index() {
        assert_eq!(column_index("A").unwrap(), 0);
        assert_eq!(column_index("d").unwrap(), 3);
        assert_eq!(column_index("Z").unwrap(), 25);
        assert_eq!(column_index("AA").unwrap(), 26);
        assert_eq!(column_index("AZ").unwrap(), 51);
        assert_eq!(column_index("XFD").unwrap(), MAX_COLUMN);
    }

    #[test]
    fn test_column_index_rejects_malformed() {
        assert!(column_index("").is_err());
        assert!(column_index("A1").is_err());
        assert!(column_index("É").is_err());
        assert!(column_index("XFE").is_err());
    }

    #[test]
    fn test_mapping_max_offset() {
        let mapping =
            ColumnMapping::new([("date", "A"), ("libelle", "B"), ("debit", "C"), ("credit", "D")])
                .unwrap();
        assert_eq!(mapping.max_offset(), Some(3));
        assert_eq!(mapping.offset("credit"), Some(3));
        assert_eq!(mapping.offset("balance"), None);
    }

    #[test]
    fn test_mapping_duplicate_field_keeps_last() {
        let mapping = ColumnMapping::new([("date", "A"), ("date", "C")]).unwrap();
        assert_eq!(mapping.iter().count(), 1);
        assert_eq!(mapping.offset("date"), Some(2));
    }
}
