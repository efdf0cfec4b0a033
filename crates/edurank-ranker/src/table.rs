//! Strongly-typed criterion table.
//!
//! One identifier column plus an ordered list of named numeric columns,
//! stored column-major since every MOORA step works a column at a time.
//! A NaN cell means "missing".

use edurank_common::RankError;

#[derive(Debug, Clone, PartialEq)]
pub struct CriterionTable {
    identifier: String,
    ids: Vec<String>,
    criteria: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl CriterionTable {
    /// Build a table from columns. Every column must hold one value per id.
    pub fn new(
        identifier: impl Into<String>,
        ids: Vec<String>,
        criteria: Vec<String>,
        columns: Vec<Vec<f64>>,
    ) -> Result<Self, RankError> {
        if ids.is_empty() {
            return Err(RankError::NoRows);
        }
        if criteria.is_empty() {
            return Err(RankError::NoCriteria);
        }
        if criteria.len() != columns.len() {
            return Err(RankError::RaggedColumn {
                column: "<criteria>".to_string(),
                expected: criteria.len(),
                found: columns.len(),
            });
        }
        for (name, col) in criteria.iter().zip(&columns) {
            if col.len() != ids.len() {
                return Err(RankError::RaggedColumn {
                    column: name.clone(),
                    expected: ids.len(),
                    found: col.len(),
                });
            }
        }
        Ok(Self {
            identifier: identifier.into(),
            ids,
            criteria,
            columns,
        })
    }

    /// Build a table from `(id, values)` rows, values in `criteria` order.
    pub fn from_rows<I, S>(
        identifier: impl Into<String>,
        criteria: Vec<String>,
        rows: I,
    ) -> Result<Self, RankError>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut ids = Vec::new();
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); criteria.len()];
        for (row, (id, values)) in rows.into_iter().enumerate() {
            if values.len() != criteria.len() {
                return Err(RankError::RaggedColumn {
                    column: format!("<row {row}>"),
                    expected: criteria.len(),
                    found: values.len(),
                });
            }
            ids.push(id.into());
            for (col, v) in columns.iter_mut().zip(values) {
                col.push(v);
            }
        }
        Self::new(identifier, ids, criteria, columns)
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn columns(&self) -> &[Vec<f64>] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.criteria
            .iter()
            .position(|c| c == name)
            .and_then(|i| self.columns.get(i))
            .map(Vec::as_slice)
    }

    pub fn n_rows(&self) -> usize {
        self.ids.len()
    }

    pub fn n_criteria(&self) -> usize {
        self.criteria.len()
    }

    /// Values of one row in column order.
    pub fn row(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.n_rows() {
            return None;
        }
        Some(self.columns.iter().map(|col| col[index]).collect())
    }

    /// New table holding the named columns in the given order.
    pub fn select(&self, order: &[&str]) -> Result<Self, RankError> {
        let mut criteria = Vec::with_capacity(order.len());
        let mut columns = Vec::with_capacity(order.len());
        for name in order {
            let col = self
                .column(name)
                .ok_or_else(|| RankError::UnknownCriterion(name.to_string()))?;
            criteria.push(name.to_string());
            columns.push(col.to_vec());
        }
        Self::new(self.identifier.clone(), self.ids.clone(), criteria, columns)
    }
}

/// Parse one raw cell of a criterion column.
///
/// Blank cells are missing values (NaN). Anything else must be a number.
/// `row` is zero-based over data rows.
pub fn parse_cell(column: &str, row: usize, raw: &str) -> Result<f64, RankError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(f64::NAN);
    }
    trimmed.parse::<f64>().map_err(|_| RankError::NonNumeric {
        column: column.to_string(),
        row,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_rows_is_column_major() {
        let t = CriterionTable::from_rows(
            "Technology",
            names(&["Cost", "Innovation"]),
            vec![("A", vec![1.0, 2.0]), ("B", vec![3.0, 4.0])],
        )
        .unwrap();
        assert_eq!(t.column("Cost"), Some(&[1.0, 3.0][..]));
        assert_eq!(t.column("Innovation"), Some(&[2.0, 4.0][..]));
        assert_eq!(t.row(1), Some(vec![3.0, 4.0]));
        assert_eq!(t.row(2), None);
    }

    #[test]
    fn test_empty_tables_rejected() {
        let no_rows = CriterionTable::new("T", vec![], names(&["Cost"]), vec![vec![]]);
        assert_eq!(no_rows.unwrap_err(), RankError::NoRows);

        let no_cols = CriterionTable::new("T", names(&["A"]), vec![], vec![]);
        assert_eq!(no_cols.unwrap_err(), RankError::NoCriteria);
    }

    #[test]
    fn test_ragged_column_rejected() {
        let err = CriterionTable::new(
            "T",
            names(&["A", "B"]),
            names(&["Cost"]),
            vec![vec![1.0]],
        )
        .unwrap_err();
        assert!(matches!(err, RankError::RaggedColumn { expected: 2, found: 1, .. }));
    }

    #[test]
    fn test_select_reorders_columns() {
        let t = CriterionTable::from_rows(
            "T",
            names(&["Cost", "Innovation"]),
            vec![("A", vec![1.0, 2.0])],
        )
        .unwrap();
        let r = t.select(&["Innovation", "Cost"]).unwrap();
        assert_eq!(r.criteria(), &names(&["Innovation", "Cost"])[..]);
        assert_eq!(r.row(0), Some(vec![2.0, 1.0]));
        assert!(t.select(&["Price"]).is_err());
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("Cost", 0, " 4.5 ").unwrap(), 4.5);
        assert!(parse_cell("Cost", 0, "").unwrap().is_nan());
        let err = parse_cell("Cost", 2, "cheap").unwrap_err();
        assert_eq!(
            err,
            RankError::NonNumeric { column: "Cost".into(), row: 2, value: "cheap".into() }
        );
    }
}
