//! Read -> validate -> rank, shared by every command.

use std::path::PathBuf;

use edurank_common::{EduRankConfig, Result};
use edurank_ingestion::{load_criterion_table, load_criterion_table_from_reader};
use edurank_ranker::{rank_with, CriterionTable, RankedTable, WeightVector};
use tracing::{info, warn};

/// Where the table comes from. `-` on the command line means stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Path(PathBuf),
    Stdin,
}

impl Input {
    pub fn parse(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::Path(PathBuf::from(arg))
        }
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(p) => write!(f, "{}", p.display()),
            Self::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// Load and validate the input against the configured schema.
pub fn load(input: &Input, config: &EduRankConfig) -> Result<CriterionTable> {
    match input {
        Input::Path(path) => load_criterion_table(path, &config.schema),
        Input::Stdin => load_criterion_table_from_reader(std::io::stdin().lock(), &config.schema),
    }
}

/// Weights from the config, warning when they break the sum-to-one convention.
pub fn weights(config: &EduRankConfig) -> Result<WeightVector> {
    let mut weights = WeightVector::from_config(&config.scoring, &config.schema)?;
    if config.scoring.normalise_weights {
        weights.normalise();
    }
    if !weights.validate() {
        warn!(sum = weights.sum(), "weights do not sum to 1.0");
    }
    Ok(weights)
}

/// Score an already loaded table with the configured weights and policy.
pub fn score(table: &CriterionTable, config: &EduRankConfig) -> Result<RankedTable> {
    let weights = weights(config)?;
    Ok(rank_with(table, &weights, config.scoring.degenerate)?)
}

/// Full pipeline for one input.
pub fn run(input: &Input, config: &EduRankConfig) -> Result<RankedTable> {
    let table = load(input, config)?;
    let ranked = score(&table, config)?;
    info!("Ranked {} technologies from {}", ranked.len(), input);
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use edurank_common::{DegeneratePolicy, EduRankError};
    use edurank_test_utils::{temp_file, SAMPLE_CSV};

    #[test]
    fn test_input_parse() {
        assert_eq!(Input::parse("-"), Input::Stdin);
        assert_eq!(Input::parse("a.csv"), Input::Path(PathBuf::from("a.csv")));
        assert_eq!(Input::Stdin.to_string(), "<stdin>");
    }

    #[test]
    fn test_run_sample_file() {
        let file = temp_file(SAMPLE_CSV, "csv");
        let ranked = run(&Input::Path(file.path().to_path_buf()), &EduRankConfig::default()).unwrap();
        assert_eq!(ranked.len(), 4);
        let best = ranked.top(1)[0].id;
        assert_eq!(best, "Learning Management System");
    }

    #[test]
    fn test_missing_column_stops_before_scoring() {
        let file = temp_file("Technology,Cost\nA,1\n", "csv");
        let err = run(&Input::Path(file.path().to_path_buf()), &EduRankConfig::default()).unwrap_err();
        assert!(matches!(err, EduRankError::MissingColumns(ref c) if c.len() == 4));
    }

    #[test]
    fn test_policy_from_config() {
        let csv = "Technology,Cost,Ease of Use,Effectiveness,Accessibility,Innovation\n\
                   A,1,1,2,3,4\n\
                   B,1,2,1,4,3\n";
        let file = temp_file(csv, "csv");
        let input = Input::Path(file.path().to_path_buf());

        let ranked = run(&input, &EduRankConfig::default()).unwrap();
        assert!(ranked.scores().iter().all(|s| s.is_nan()));

        let mut config = EduRankConfig::default();
        config.scoring.degenerate = DegeneratePolicy::ZeroContribution;
        let ranked = run(&input, &config).unwrap();
        assert!(ranked.scores().iter().all(|s| s.is_finite()));
        assert_eq!(ranked.ranks(), &[1.5, 1.5]);
    }
}
