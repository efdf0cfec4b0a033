//! Ranking configuration.
//!
//! The required columns and the weight vector are explicit values handed to
//! the ranker rather than constants, so the same pipeline can score any
//! schema. Loaded from TOML, YAML or JSON; every field has a default.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EduRankError, Result};
use crate::schema::CriteriaSchema;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "EDURANK_CONFIG";

/// Config file picked up from the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "edurank.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EduRankConfig {
    #[serde(default)]
    pub schema: CriteriaSchema,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

// ── Scoring ──────────────────────────────────────────────────────────────────

/// What a constant (zero-range) criterion column does to the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// `0 / 0` stays NaN and every row's score becomes NaN.
    #[default]
    Propagate,
    /// The column contributes nothing to any row.
    ZeroContribution,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weights applied by column position, in schema criterion order.
    #[serde(default = "default_weights")]
    pub weights: Vec<f64>,

    /// Optional name -> weight mapping. When set it replaces `weights`.
    #[serde(default)]
    pub weights_by_name: Option<BTreeMap<String, f64>>,

    #[serde(default)]
    pub degenerate: DegeneratePolicy,

    /// Rescale weights to sum to 1.0 before scoring.
    #[serde(default)]
    pub normalise_weights: bool,
}

fn default_weights() -> Vec<f64> { vec![0.2; 5] }

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: default_weights(),
            weights_by_name: None,
            degenerate: DegeneratePolicy::default(),
            normalise_weights: false,
        }
    }
}

// ── Output ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}' (expected table, csv or json)")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Show only the best N rows, sorted by rank.
    #[serde(default)]
    pub top_n: Option<usize>,

    /// Decimal places for scores in table output.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize { 4 }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            top_n: None,
            precision: default_precision(),
        }
    }
}

// ── Loading ──────────────────────────────────────────────────────────────────

impl EduRankConfig {
    /// Load from TOML file
    pub fn from_toml(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load from YAML file
    pub fn from_yaml(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load from JSON file
    pub fn from_json(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load a file, picking the format from its extension (TOML when unknown).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let loaded = match ext.as_str() {
            "yaml" | "yml" => Self::from_yaml(path),
            "json" => Self::from_json(path),
            _ => Self::from_toml(path),
        };

        let config = loaded.map_err(|e| {
            EduRankError::Config(format!("could not load {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config source: explicit path, then `EDURANK_CONFIG`, then
    /// `edurank.toml` in the working directory, then built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(EduRankError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Self::from_path(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            let path = Path::new(&env_path);
            if !path.exists() {
                return Err(EduRankError::Config(format!(
                    "config file not found: {env_path} (from {CONFIG_ENV})"
                )));
            }
            return Self::from_path(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            return Self::from_path(fallback);
        }

        tracing::debug!("no config file found, using built-in defaults");
        Ok(Self::default())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| EduRankError::Config(e.to_string()))
    }

    /// Structural checks only. Weights need not sum to 1.
    pub fn validate(&self) -> Result<()> {
        if self.schema.criteria.is_empty() {
            return Err(EduRankError::Config("schema.criteria must not be empty".into()));
        }

        match &self.scoring.weights_by_name {
            Some(map) => {
                for name in &self.schema.criteria {
                    if !map.contains_key(name) {
                        return Err(EduRankError::Config(format!(
                            "scoring.weights_by_name has no entry for '{name}'"
                        )));
                    }
                }
                if let Some((name, w)) = map.iter().find(|(_, w)| !w.is_finite() || **w < 0.0) {
                    return Err(EduRankError::Config(format!(
                        "weight {w} for '{name}' is negative or not finite"
                    )));
                }
            }
            None => {
                let (n_w, n_c) = (self.scoring.weights.len(), self.schema.criteria.len());
                if n_w != n_c {
                    return Err(EduRankError::Config(format!(
                        "scoring.weights has {n_w} entries but the schema has {n_c} criteria"
                    )));
                }
                if let Some(w) = self.scoring.weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
                    return Err(EduRankError::Config(format!(
                        "weight {w} is negative or not finite"
                    )));
                }
            }
        }
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
