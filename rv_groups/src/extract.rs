use definitions::{AnnotationTable, TableError};

/// Write the table back as tab-separated text: header first, no index column, no quoting.
pub trait Extract {
    fn extract<W: std::io::Write>(&self, wtr: W) -> Result<(), TableError>;
}

impl Extract for AnnotationTable {
    fn extract<W: std::io::Write>(&self, wtr: W) -> Result<(), TableError> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(wtr);
        wtr.write_record(&self.header)?;
        for row in self.rows.iter() {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;
    #[test]
    fn extract_test() {
        let input = "ind\tgene\tgroup_ID\nGTEX-1\tENSG1\t0\nGTEX-2\tENSG1\t1\n";
        let table = AnnotationTable::entry(input.as_bytes()).unwrap();
        let mut output = vec![];
        table.extract(&mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), input);
    }
    #[test]
    fn header_only() {
        let table = AnnotationTable::new(vec!["a".to_string()], vec![]).unwrap();
        let mut output = vec![];
        table.extract(&mut output).unwrap();
        assert_eq!(output, b"a\n");
    }
}
