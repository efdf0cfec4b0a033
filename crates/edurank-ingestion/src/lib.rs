//! edurank-ingestion — Tabular input for the MOORA ranker.
//! - Delimited-text decoding (CSV, TSV, sniffed TXT)
//! - Header cleanup against the expected schema
//! - Schema check and numeric conversion into a typed criterion table

pub mod convert;
pub mod headers;
pub mod reader;

use std::io::Read;
use std::path::Path;

use edurank_common::{CriteriaSchema, Result};
use edurank_ranker::CriterionTable;

pub use convert::into_criterion_table;
pub use headers::canonicalise_headers;
pub use reader::{read_path, read_reader, RawTable};

/// Read, clean headers, validate and convert a table file in one step.
pub fn load_criterion_table(path: &Path, schema: &CriteriaSchema) -> Result<CriterionTable> {
    let mut raw = read_path(path)?;
    canonicalise_headers(&mut raw.headers, schema);
    into_criterion_table(&raw, schema)
}

/// Same as [`load_criterion_table`] for delimited text already in memory or
/// on stdin. The delimiter is sniffed from the header line.
pub fn load_criterion_table_from_reader<R: Read>(
    reader: R,
    schema: &CriteriaSchema,
) -> Result<CriterionTable> {
    let mut raw = reader::read_sniffed(std::io::BufReader::new(reader))?;
    canonicalise_headers(&mut raw.headers, schema);
    into_criterion_table(&raw, schema)
}
