//! Conversion of a raw table into the typed [`CriterionTable`].

use edurank_common::{CriteriaSchema, EduRankError, Result};
use edurank_ranker::table::parse_cell;
use edurank_ranker::CriterionTable;

use crate::reader::RawTable;

/// Check the schema, then select the identifier and the criterion columns in
/// schema order. Extra columns are dropped. Blank criterion cells become NaN;
/// any other non-numeric cell is an error.
pub fn into_criterion_table(raw: &RawTable, schema: &CriteriaSchema) -> Result<CriterionTable> {
    let missing = schema.missing_columns(&raw.headers);
    if !missing.is_empty() {
        return Err(EduRankError::MissingColumns(missing));
    }
    if raw.rows.is_empty() {
        return Err(EduRankError::Parse("the file has a header row but no data rows".to_string()));
    }

    let id_idx = column_index(raw, &schema.identifier)?;
    let ids = raw
        .rows
        .iter()
        .map(|row| row.get(id_idx).map(|s| s.trim().to_string()).unwrap_or_default())
        .collect();

    let mut columns = Vec::with_capacity(schema.criteria.len());
    for name in &schema.criteria {
        let idx = column_index(raw, name)?;
        let values = raw
            .rows
            .iter()
            .enumerate()
            .map(|(row, cells)| parse_cell(name, row, cells.get(idx).map_or("", String::as_str)))
            .collect::<std::result::Result<Vec<f64>, _>>()?;
        columns.push(values);
    }

    Ok(CriterionTable::new(
        schema.identifier.clone(),
        ids,
        schema.criteria.clone(),
        columns,
    )?)
}

fn column_index(raw: &RawTable, name: &str) -> Result<usize> {
    raw.column_index(name)
        .ok_or_else(|| EduRankError::MissingColumns(vec![name.to_string()]))
}
