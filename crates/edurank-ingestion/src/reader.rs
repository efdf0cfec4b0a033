//! Delimited-text readers producing an untyped [`RawTable`].

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use edurank_common::{EduRankError, Result};
use tracing::{debug, info};

/// Header row plus string cells, exactly as decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }
}

/// Supported input formats, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Tsv,
    /// Delimiter sniffed from the header line.
    Text,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "tsv" | "tab" => Ok(Self::Tsv),
            "txt" => Ok(Self::Text),
            "xlsx" | "xlsm" | "xls" | "ods" => Err(EduRankError::Parse(format!(
                "unsupported spreadsheet format '.{ext}'; export the sheet as CSV or TSV"
            ))),
            _ => Ok(Self::Csv),
        }
    }
}

/// Guess the delimiter of a header line: tab, then semicolon, else comma.
pub fn sniff_delimiter(header_line: &str) -> u8 {
    if header_line.contains('\t') {
        b'\t'
    } else if header_line.contains(';') {
        b';'
    } else {
        b','
    }
}

/// Read a table file. The format follows the extension; unknown extensions
/// are read as CSV.
pub fn read_path(path: &Path) -> Result<RawTable> {
    let format = InputFormat::from_path(path)?;
    debug!("Reading {:?} as {:?}", path, format);

    let file = File::open(path)?;
    let table = match format {
        InputFormat::Csv => read_reader(file, b',')?,
        InputFormat::Tsv => read_reader(file, b'\t')?,
        InputFormat::Text => read_sniffed(BufReader::new(file))?,
    };

    info!(
        "Loaded {} rows x {} columns from {:?}",
        table.n_rows(),
        table.headers.len(),
        path
    );
    Ok(table)
}

/// Read delimited text whose delimiter is sniffed from the first line.
pub fn read_sniffed<R: BufRead>(mut reader: R) -> Result<RawTable> {
    let mut first = String::new();
    reader.read_line(&mut first)?;
    let delimiter = sniff_delimiter(&first);
    read_reader(first.as_bytes().chain(reader), delimiter)
}

/// Read delimited text with a known delimiter. The first record is the header.
/// Rows with every cell blank are dropped; rows of the wrong width are an error.
pub fn read_reader<R: Read>(reader: R, delimiter: u8) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(EduRankError::Parse("no header row found".to_string()));
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_csv() {
        let raw = read_reader("a,b\n1,2\n3,4\n".as_bytes(), b',').unwrap();
        assert_eq!(raw.headers, vec!["a", "b"]);
        assert_eq!(raw.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
        assert_eq!(raw.column_index("b"), Some(1));
    }

    #[test]
    fn test_blank_rows_dropped() {
        let raw = read_reader("a,b\n1,2\n,\n3,4\n".as_bytes(), b',').unwrap();
        assert_eq!(raw.n_rows(), 2);
    }

    #[test]
    fn test_ragged_row_is_error() {
        let err = read_reader("a,b\n1,2,3\n".as_bytes(), b',').unwrap_err();
        assert!(matches!(err, EduRankError::Csv(_)));
    }

    #[test]
    fn test_empty_input_has_no_header() {
        let err = read_reader("".as_bytes(), b',').unwrap_err();
        assert!(matches!(err, EduRankError::Parse(_)));
    }

    #[test]
    fn test_sniffed_semicolon() {
        let raw = read_sniffed("a;b\n1;2\n".as_bytes()).unwrap();
        assert_eq!(raw.headers, vec!["a", "b"]);
        assert_eq!(raw.rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn test_sniff_delimiter() {
        assert_eq!(sniff_delimiter("a\tb"), b'\t');
        assert_eq!(sniff_delimiter("a;b"), b';');
        assert_eq!(sniff_delimiter("a,b"), b',');
        assert_eq!(sniff_delimiter("a"), b',');
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("x.CSV")).unwrap(), InputFormat::Csv);
        assert_eq!(InputFormat::from_path(Path::new("x.tsv")).unwrap(), InputFormat::Tsv);
        assert_eq!(InputFormat::from_path(Path::new("x.txt")).unwrap(), InputFormat::Text);
        assert_eq!(InputFormat::from_path(Path::new("x")).unwrap(), InputFormat::Csv);
        assert!(InputFormat::from_path(Path::new("tech.xlsx")).is_err());
    }
}
