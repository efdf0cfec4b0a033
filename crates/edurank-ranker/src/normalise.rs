//! Min-max normalisation of criterion columns.

use crate::table::CriterionTable;

/// Min-max normalisation within `[min_val, max_val]`.
///
/// No clamping and no degenerate-range substitution: when `max_val == min_val`
/// the result is `0 / 0`, i.e. NaN.
pub fn minmax_normalise(value: f64, min_val: f64, max_val: f64) -> f64 {
    (value - min_val) / (max_val - min_val)
}

/// Smallest and largest non-NaN value, or `None` if there is none.
pub fn column_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// True when every present value in the column is the same.
pub fn is_degenerate(values: &[f64]) -> bool {
    match column_range(values) {
        Some((lo, hi)) => lo == hi,
        None => true,
    }
}

/// Normalise one column into [0, 1]. The column minimum maps to 0 and the
/// maximum to 1; missing cells and constant columns yield NaN.
pub fn normalise_column(values: &[f64]) -> Vec<f64> {
    match column_range(values) {
        Some((lo, hi)) => values.iter().map(|&v| minmax_normalise(v, lo, hi)).collect(),
        None => vec![f64::NAN; values.len()],
    }
}

/// Normalise every criterion column independently. Column-major, same
/// layout as [`CriterionTable::columns`].
pub fn normalise_table(table: &CriterionTable) -> Vec<Vec<f64>> {
    table
        .columns()
        .iter()
        .map(|col| normalise_column(col))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minmax_endpoints() {
        assert_eq!(minmax_normalise(0.0, 0.0, 10.0), 0.0);
        assert_eq!(minmax_normalise(10.0, 0.0, 10.0), 1.0);
        assert!((minmax_normalise(2.5, 0.0, 10.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_range_is_nan() {
        assert!(minmax_normalise(3.0, 3.0, 3.0).is_nan());
        let normed = normalise_column(&[7.0, 7.0, 7.0]);
        assert!(normed.iter().all(|v| v.is_nan()));
        assert!(is_degenerate(&[7.0, 7.0]));
        assert!(!is_degenerate(&[7.0, 8.0]));
    }

    #[test]
    fn test_missing_cells_skipped_for_range() {
        let normed = normalise_column(&[f64::NAN, 2.0, 6.0, 4.0]);
        assert!(normed[0].is_nan());
        assert_eq!(&normed[1..], &[0.0, 1.0, 0.5]);
        assert_eq!(column_range(&[f64::NAN, f64::NAN]), None);
    }

    #[test]
    fn test_columns_normalised_independently() {
        let table = CriterionTable::from_rows(
            "Technology",
            vec!["Cost".into(), "Innovation".into()],
            vec![("A", vec![10.0, 5.0]), ("B", vec![0.0, 10.0])],
        )
        .unwrap();
        let normed = normalise_table(&table);
        assert_eq!(normed[0], vec![1.0, 0.0]);
        assert_eq!(normed[1], vec![0.0, 1.0]);
    }
}
