//! Weight vector for MOORA scoring.
//!
//! Weights are applied by column position. `by_name` is the explicit
//! alternative: it looks each criterion up by name and yields a positional
//! vector for one particular column order.

use std::collections::BTreeMap;

use edurank_common::{CriteriaSchema, RankError, ScoringConfig};

/// Non-negative, finite weights, one per criterion column.
/// Summing to 1.0 is a convention, not a requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector(Vec<f64>);

impl Default for WeightVector {
    /// Five equal weights of 0.2, matching the default schema.
    fn default() -> Self {
        Self(vec![0.2; 5])
    }
}

impl WeightVector {
    pub fn new(values: Vec<f64>) -> Result<Self, RankError> {
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(RankError::InvalidWeight { index, value });
        }
        Ok(Self(values))
    }

    /// `n` equal weights summing to 1.0.
    pub fn equal(n: usize) -> Self {
        Self(vec![1.0 / n.max(1) as f64; n])
    }

    /// Resolve a name -> weight mapping against a concrete column order.
    pub fn by_name<S: AsRef<str>>(
        weights: &BTreeMap<String, f64>,
        criteria: &[S],
    ) -> Result<Self, RankError> {
        let values = criteria
            .iter()
            .map(|c| {
                weights
                    .get(c.as_ref())
                    .copied()
                    .ok_or_else(|| RankError::UnknownCriterion(c.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(values)
    }

    /// Weights described by the scoring config, in schema criterion order.
    pub fn from_config(scoring: &ScoringConfig, schema: &CriteriaSchema) -> Result<Self, RankError> {
        match &scoring.weights_by_name {
            Some(map) => Self::by_name(map, &schema.criteria),
            None => Self::new(scoring.weights.clone()),
        }
    }

    /// Validate that all weights sum to ~1.0
    pub fn validate(&self) -> bool {
        (self.sum() - 1.0).abs() < 1e-6
    }

    /// Renormalise weights so they sum to 1.0
    pub fn normalise(&mut self) {
        let sum = self.sum();
        if sum > 0.0 {
            for w in &mut self.0 {
                *w /= sum;
            }
        }
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
