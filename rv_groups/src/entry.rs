use definitions::{AnnotationTable, TableError};
use std::path::Path;

/// Load a tab-separated annotation file with a header line.
/// Cells are taken verbatim; quotes carry no meaning.
pub trait Entry: Sized {
    fn entry<R: std::io::Read>(reader: R) -> Result<Self, TableError>;
    fn entry_from_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let reader = std::fs::File::open(path).map(std::io::BufReader::new)?;
        Self::entry(reader)
    }
}

impl Entry for AnnotationTable {
    fn entry<R: std::io::Read>(reader: R) -> Result<Self, TableError> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);
        let header: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
        if header.iter().all(|h| h.is_empty()) {
            return Err(TableError::EmptyHeader);
        }
        let mut rows: Vec<Vec<String>> = vec![];
        for record in rdr.records() {
            let record = record?;
            if record.len() != header.len() {
                let line = record
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or_else(|| AnnotationTable::line_of(rows.len()));
                return Err(TableError::RaggedRow {
                    line,
                    expected: header.len(),
                    found: record.len(),
                });
            }
            rows.push(record.iter().map(|x| x.to_string()).collect());
        }
        debug!("Input\tColumns\t{}", header.len());
        debug!("Input\tRows\t{}", rows.len());
        AnnotationTable::new(header, rows)
    }
}
