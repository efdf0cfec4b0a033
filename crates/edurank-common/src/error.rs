use thiserror::Error;

/// Failures raised by the MOORA core while building or scoring a criterion table.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RankError {
    #[error("table has no rows")]
    NoRows,

    #[error("table has no criterion columns")]
    NoCriteria,

    #[error("column '{column}' has {found} values, expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("could not convert value '{value}' in column '{column}' (row {row}) to a number")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },

    #[error("got {weights} weights for {criteria} criteria")]
    WeightCountMismatch { weights: usize, criteria: usize },

    #[error("no weight configured for criterion '{0}'")]
    UnknownCriterion(String),

    #[error("weight {value} for position {index} is negative or not finite")]
    InvalidWeight { index: usize, value: f64 },
}

#[derive(Debug, Error)]
pub enum EduRankError {
    #[error("The file is missing the following columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Rank(#[from] RankError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EduRankError {
    /// Message shown to the person who supplied the file.
    ///
    /// Schema errors name the missing columns; every other failure is wrapped
    /// in a generic "check the format" message carrying the underlying text.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingColumns(_) => format!("Error: {self}"),
            Self::Config(_) => format!("Error: {self}"),
            other => format!(
                "Error: An issue occurred while reading the file. Please check the format. Error: {other}"
            ),
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, EduRankError>;
