//! edurank-ranker — MOORA multi-criteria scoring engine.
//! Min-max normalisation, positional weighting, composite score, rank.

pub mod moora;
pub mod normalise;
pub mod ordinal;
pub mod table;
pub mod weights;

pub use moora::{rank, rank_with, RankedRow, RankedTable};
pub use table::CriterionTable;
pub use weights::WeightVector;
