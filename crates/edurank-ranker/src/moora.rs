//! MOORA composite scoring and ranking.
//!
//! score(row) = Σ_c w_c × (v_rc − min_c) / (max_c − min_c)
//!
//! Weights are matched to columns by position. A constant column has a zero
//! range, so under [`DegeneratePolicy::Propagate`] every row's score is NaN.

use edurank_common::{DegeneratePolicy, RankError};
use tracing::{debug, warn};

use crate::normalise::{is_degenerate, normalise_table};
use crate::ordinal::rank_descending;
use crate::table::CriterionTable;
use crate::weights::WeightVector;

/// The input table plus one composite score and one rank per row.
#[derive(Debug, Clone)]
pub struct RankedTable {
    table: CriterionTable,
    scores: Vec<f64>,
    ranks: Vec<f64>,
}

/// One output row as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedRow<'a> {
    pub id: &'a str,
    pub score: f64,
    pub rank: f64,
}

impl RankedTable {
    pub fn table(&self) -> &CriterionTable {
        &self.table
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn ranks(&self) -> &[f64] {
        &self.ranks
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Rows in input order.
    pub fn rows(&self) -> impl Iterator<Item = RankedRow<'_>> {
        self.table
            .ids()
            .iter()
            .zip(self.scores.iter().zip(&self.ranks))
            .map(|(id, (&score, &rank))| RankedRow { id, score, rank })
    }

    /// Best `n` rows by rank. NaN ranks sort last; ties keep input order.
    pub fn top(&self, n: usize) -> Vec<RankedRow<'_>> {
        let mut rows: Vec<RankedRow<'_>> = self.rows().collect();
        rows.sort_by(|a, b| match (a.rank.is_nan(), b.rank.is_nan()) {
            (false, false) => a.rank.total_cmp(&b.rank),
            (x, y) => x.cmp(&y),
        });
        rows.truncate(n);
        rows
    }
}

/// Weighted sum of normalised values per row.
///
/// `normalised` is column-major. Under `ZeroContribution` NaN entries add
/// nothing; under `Propagate` they make the row's score NaN.
pub fn composite_scores(
    normalised: &[Vec<f64>],
    weights: &[f64],
    policy: DegeneratePolicy,
) -> Vec<f64> {
    let n_rows = normalised.first().map_or(0, Vec::len);
    let mut scores = vec![0.0f64; n_rows];
    for (col, &w) in normalised.iter().zip(weights) {
        for (score, &n) in scores.iter_mut().zip(col) {
            let weighted = n * w;
            match policy {
                DegeneratePolicy::Propagate => *score += weighted,
                DegeneratePolicy::ZeroContribution if !weighted.is_nan() => *score += weighted,
                DegeneratePolicy::ZeroContribution => {}
            }
        }
    }
    scores
}

/// Rank `table` with positional `weights`, letting constant columns turn
/// every score into NaN.
pub fn rank(table: &CriterionTable, weights: &WeightVector) -> Result<RankedTable, RankError> {
    rank_with(table, weights, DegeneratePolicy::Propagate)
}

/// Rank `table` with positional `weights` under an explicit degenerate-column
/// policy. The table is not modified; the result owns a copy of it.
pub fn rank_with(
    table: &CriterionTable,
    weights: &WeightVector,
    policy: DegeneratePolicy,
) -> Result<RankedTable, RankError> {
    if weights.len() != table.n_criteria() {
        return Err(RankError::WeightCountMismatch {
            weights: weights.len(),
            criteria: table.n_criteria(),
        });
    }

    for (name, col) in table.criteria().iter().zip(table.columns()) {
        if is_degenerate(col) {
            warn!(column = %name, ?policy, "criterion column has no spread; min-max normalisation is undefined");
        }
    }

    let normalised = normalise_table(table);
    let scores = composite_scores(&normalised, weights.as_slice(), policy);
    let ranks = rank_descending(&scores);

    debug!(
        rows = table.n_rows(),
        criteria = table.n_criteria(),
        nan_scores = scores.iter().filter(|s| s.is_nan()).count(),
        "MOORA ranking complete"
    );

    Ok(RankedTable {
        table: table.clone(),
        scores,
        ranks,
    })
}
