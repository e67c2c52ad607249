use crate::file::csv::error::FileError;
use csv::{ReaderBuilder, StringRecord};
use model::records::{
    columns::ColumnSet,
    row::{FieldValue, Row},
};
use std::{fs::File, path::Path};
use tracing::{debug, error, info};

/// Header plus every record of one CSV file, fully materialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub columns: ColumnSet,
    pub rows: Vec<Row>,
}

impl CsvTable {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }
}

/// Reads a header-first CSV file into text rows.
#[derive(Debug, Clone)]
pub struct CsvReader {
    delimiter: u8,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Rows of the file, or an empty list if it cannot be read.
    pub fn read_csv(&self, path: impl AsRef<Path>) -> Vec<Row> {
        self.read_table(path).rows
    }

    /// Like [`CsvReader::read_csv`] but keeps the header, so a file without
    /// records still reports its columns. Failures are logged, never raised.
    pub fn read_table(&self, path: impl AsRef<Path>) -> CsvTable {
        let path = path.as_ref();
        match self.try_read(path) {
            Ok(table) => {
                info!(
                    "Read {} rows ({} columns) from {}",
                    table.rows.len(),
                    table.columns.len(),
                    path.display()
                );
                table
            }
            Err(err) => {
                error!("Error reading CSV file {}: {}", path.display(), err);
                CsvTable::default()
            }
        }
    }

    pub fn try_read(&self, path: impl AsRef<Path>) -> Result<CsvTable, FileError> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|e| FileError::from_open(&path.display().to_string(), e))?;

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers = reader.headers()?.clone();
        let columns = ColumnSet::from_headers(headers.iter().enumerate().map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches('\u{feff}')
            } else {
                h
            }
        }))?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.len() != columns.len() {
                debug!(
                    "Record {} has {} fields, header has {}",
                    rows.len() + 1,
                    record.len(),
                    columns.len()
                );
            }
            rows.push(to_row(&columns, &record));
        }

        Ok(CsvTable { columns, rows })
    }
}

/// Pairs each field with its header. Fields past the header get positional
/// `field_<n>` keys; missing trailing fields are simply absent.
fn to_row(columns: &ColumnSet, record: &StringRecord) -> Row {
    let names = columns.names();
    let field_values = record
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let name = names
                .get(idx)
                .cloned()
                .unwrap_or_else(|| format!("field_{}", idx + 1));
            FieldValue::new(name, cell)
        })
        .collect();
    Row::new(field_values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tracing_test::traced_test;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_people() {
        let file = csv_file("name,age\n\"Alice\",30\n\"Bob\",25\n");
        let table = CsvReader::new().read_table(file.path());

        assert_eq!(table.columns.names(), ["name", "age"]);
        assert_eq!(
            table.rows,
            vec![
                Row::from_pairs([("name", "Alice"), ("age", "30")]),
                Row::from_pairs([("name", "Bob"), ("age", "25")]),
            ]
        );
    }

    #[test]
    fn test_values_stay_text() {
        let file = csv_file("flag,when,amount\ntrue,2024-01-02,0012.50\n");
        let rows = CsvReader::new().read_csv(file.path());

        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].values().collect::<Vec<_>>(),
            vec!["true", "2024-01-02", "0012.50"]
        );
    }

    #[test]
    fn test_header_only_keeps_columns() {
        let file = csv_file("name,age\n");
        let table = CsvReader::new().read_table(file.path());

        assert_eq!(table.columns.names(), ["name", "age"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_quoted_delimiters_and_newlines() {
        let file = csv_file("title,notes\n\"Hello, world\",\"line one\nline two\"\n");
        let rows = CsvReader::new().read_csv(file.path());

        assert_eq!(rows[0].get("title"), Some("Hello, world"));
        assert_eq!(rows[0].get("notes"), Some("line one\nline two"));
    }

    #[test]
    fn test_custom_delimiter() {
        let file = csv_file("a;b\n1;2\n");
        let rows = CsvReader::new().with_delimiter(b';').read_csv(file.path());

        assert_eq!(rows, vec![Row::from_pairs([("a", "1"), ("b", "2")])]);
    }

    #[test]
    fn test_bom_is_stripped_from_first_header() {
        let file = csv_file("\u{feff}name,age\nAlice,30\n");
        let table = CsvReader::new().read_table(file.path());

        assert_eq!(table.columns.names(), ["name", "age"]);
        assert_eq!(table.rows[0].get("name"), Some("Alice"));
    }

    #[test]
    fn test_ragged_rows_are_kept_as_is() {
        let file = csv_file("a,b\n1\n1,2,3\n");
        let rows = CsvReader::new().read_csv(file.path());

        assert_eq!(rows[0], Row::from_pairs([("a", "1")]));
        assert_eq!(
            rows[1],
            Row::from_pairs([("a", "1"), ("b", "2"), ("field_3", "3")])
        );
    }

    #[traced_test]
    #[test]
    fn test_missing_file_yields_empty() {
        let table = CsvReader::new().read_table("/definitely/not/here.csv");

        assert!(table.is_empty());
        assert!(logs_contain("Error reading CSV file"));
    }

    #[test]
    fn test_try_read_reports_missing_file() {
        let err = CsvReader::new()
            .try_read("/definitely/not/here.csv")
            .unwrap_err();
        assert!(matches!(err, FileError::NotFound(_)));
    }

    #[test]
    fn test_duplicate_header_is_a_parse_failure() {
        let file = csv_file("name,name\nA,B\n");

        let err = CsvReader::new().try_read(file.path()).unwrap_err();
        assert!(matches!(err, FileError::InvalidHeader(_)));
        assert!(CsvReader::new().read_csv(file.path()).is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_a_parse_failure() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"name\n\xff\xfe\n").unwrap();
        file.flush().unwrap();

        assert!(CsvReader::new().try_read(file.path()).is_err());
        assert!(CsvReader::new().read_csv(file.path()).is_empty());
    }
}
