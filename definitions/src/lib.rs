//! Definitions -- A tiny interface for the rare-variant grouping tools.
//! Roughly speaking, every step reads a tab-separated annotation file, works on it as one structure named [AnnotationTable](AnnotationTable), and writes it back.

use serde::{Deserialize, Serialize};

/// Identifier of a rare-variant group. Dense and 0-based.
pub type GroupId = usize;

/// The literal text marking "no pairing" in the pair column.
pub const MISSING_MARKER: &str = "NA";
/// Default name of the column holding the pairing keys.
pub const PAIR_COLUMN: &str = "N2pair";
/// Default name of the column holding the assigned group IDs.
pub const GROUP_COLUMN: &str = "group_ID";
/// Default name of the optional column telling whether a row had a partner.
pub const MEMBERSHIP_COLUMN: &str = "is_in_group";

/// How to decide whether a cell of the pair column means "no pairing".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Copy)]
pub enum MissingPolicy {
    /// Only the literal `NA` is missing. Empty cells are ordinary keys.
    Textual,
    /// Both `NA` and the empty cell are missing.
    EmptyAsMissing,
}

impl std::default::Default for MissingPolicy {
    fn default() -> Self {
        MissingPolicy::Textual
    }
}

impl MissingPolicy {
    pub fn is_missing(&self, key: &str) -> bool {
        match self {
            MissingPolicy::Textual => key == MISSING_MARKER,
            MissingPolicy::EmptyAsMissing => key == MISSING_MARKER || key.is_empty(),
        }
    }
    /// Rewrite the key so that it can be compared against the literal marker.
    pub fn normalize<'a>(&self, key: &'a str) -> &'a str {
        if self.is_missing(key) {
            MISSING_MARKER
        } else {
            key
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("the table has no header line")]
    EmptyHeader,
    #[error("column `{0}` appears more than once in the header")]
    DuplicateColumn(String),
    #[error("line {line}: expected {expected} fields, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("column `{0}` is not in the table")]
    MissingColumn(String),
    #[error("column `{0}` already exists")]
    ColumnExists(String),
    #[error("expected {expected} values, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("group ID {id} is out of range for {rows} rows")]
    GroupOutOfRange { id: usize, rows: usize },
    #[error("line {line}: `{value}` in column `{column}` is not a number")]
    BadNumber {
        column: String,
        line: usize,
        value: String,
    },
}

impl From<TableError> for std::io::Error {
    fn from(why: TableError) -> Self {
        match why {
            TableError::Io(why) => why,
            why => std::io::Error::new(std::io::ErrorKind::InvalidData, why),
        }
    }
}

/// A whole annotation file. Every row has exactly `header.len()` cells,
/// and the column names are unique.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AnnotationTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl AnnotationTable {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        if header.is_empty() {
            return Err(TableError::EmptyHeader);
        }
        for (i, name) in header.iter().enumerate() {
            if header.iter().take(i).any(|prev| prev == name) {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
        }
        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != header.len())
        {
            return Err(TableError::RaggedRow {
                line: Self::line_of(idx),
                expected: header.len(),
                found: row.len(),
            });
        }
        Ok(Self { header, rows })
    }
    /// The 1-based line number of the `row`-th record, counting the header.
    pub fn line_of(row: usize) -> usize {
        row + 2
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }
    pub fn column(&self, name: &str) -> Result<Vec<&str>, TableError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))?;
        Ok(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }
    /// Append a new column at the right end.
    pub fn push_column(&mut self, name: &str, values: Vec<String>) -> Result<(), TableError> {
        if self.column_index(name).is_some() {
            return Err(TableError::ColumnExists(name.to_string()));
        }
        if values.len() != self.rows.len() {
            return Err(TableError::LengthMismatch {
                expected: self.rows.len(),
                found: values.len(),
            });
        }
        self.header.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(())
    }
    /// Remove a column, returning its cells.
    pub fn drop_column(&mut self, name: &str) -> Result<Vec<String>, TableError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))?;
        self.header.remove(idx);
        Ok(self.rows.iter_mut().map(|row| row.remove(idx)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn table() -> AnnotationTable {
        let header = vec!["ind".to_string(), "gene".to_string(), "N2pair".to_string()];
        let rows = vec![
            vec!["i1".to_string(), "g1".to_string(), "p1".to_string()],
            vec!["i2".to_string(), "g1".to_string(), "NA".to_string()],
        ];
        AnnotationTable::new(header, rows).unwrap()
    }
    #[test]
    fn missing_policy() {
        assert!(MissingPolicy::Textual.is_missing("NA"));
        assert!(!MissingPolicy::Textual.is_missing(""));
        assert!(!MissingPolicy::Textual.is_missing("na"));
        assert!(MissingPolicy::EmptyAsMissing.is_missing(""));
        assert_eq!(MissingPolicy::EmptyAsMissing.normalize(""), "NA");
        assert_eq!(MissingPolicy::Textual.normalize(""), "");
        assert_eq!(MissingPolicy::default(), MissingPolicy::Textual);
    }
    #[test]
    fn ragged_rows_are_rejected() {
        let header = vec!["a".to_string(), "b".to_string()];
        let rows = vec![
            vec!["1".to_string(), "2".to_string()],
            vec!["3".to_string()],
        ];
        match AnnotationTable::new(header, rows) {
            Err(TableError::RaggedRow {
                line,
                expected,
                found,
            }) => assert_eq!((line, expected, found), (3, 2, 1)),
            other => panic!("{:?}", other),
        }
    }
    #[test]
    fn duplicated_header() {
        let header = vec!["a".to_string(), "a".to_string()];
        let result = AnnotationTable::new(header, vec![]);
        assert!(matches!(result, Err(TableError::DuplicateColumn(_))));
        let result = AnnotationTable::new(vec![], vec![]);
        assert!(matches!(result, Err(TableError::EmptyHeader)));
    }
    #[test]
    fn push_and_drop() {
        let mut table = table();
        assert_eq!(table.column("N2pair").unwrap(), vec!["p1", "NA"]);
        table
            .push_column("group_ID", vec!["0".to_string(), "1".to_string()])
            .unwrap();
        let dropped = table.drop_column("N2pair").unwrap();
        assert_eq!(dropped, vec!["p1".to_string(), "NA".to_string()]);
        assert_eq!(table.header, vec!["ind", "gene", "group_ID"]);
        assert_eq!(table.rows[1], vec!["i2", "g1", "1"]);
        assert!(table.column("N2pair").is_err());
        assert!(table.push_column("gene", vec![]).is_err());
        let short = table.push_column("x", vec!["0".to_string()]);
        assert!(matches!(short, Err(TableError::LengthMismatch { .. })));
    }
}
