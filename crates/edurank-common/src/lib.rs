//! edurank-common — Shared types, errors, and configuration used across all EduRank crates.

pub mod config;
pub mod error;
pub mod schema;

// Re-export commonly used types
pub use config::{DegeneratePolicy, EduRankConfig, OutputConfig, OutputFormat, ScoringConfig};
pub use error::{EduRankError, RankError, Result};
pub use schema::CriteriaSchema;
