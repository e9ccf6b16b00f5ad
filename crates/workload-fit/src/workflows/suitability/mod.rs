//! Workload / architecture suitability scoring.
//!
//! Free-text catalog descriptors are parsed once into typed descriptors when a profile is
//! built. Four independent factor evaluators score a pair, a fixed weighted sum folds them into
//! a composite score, and a threshold ladder maps that score onto a recommendation tier. The
//! narrative rules run beside the numeric path and never influence it.

mod composite;
pub mod descriptors;
pub mod domain;
pub mod factors;
mod matrix;
pub mod narrative;
mod recommendation;
pub mod summary;

#[cfg(test)]
mod tests;

pub use composite::{composite_score, ScoringWeights, SCORING_WEIGHTS};
pub use domain::{
    ArchitectureAttributes, ArchitecturePattern, AttributeRecord, AttributeValue, ProfileError,
    ProfileGuard, ProfileKind, WorkloadAttributes, WorkloadProfile,
};
pub use factors::FactorScores;
pub use matrix::{
    build_matrix, build_matrix_from_records, score_pair, score_records, CompatibilityResult,
};
pub use narrative::Narrative;
pub use recommendation::{Recommendation, RecommendationThresholds, RECOMMENDATION_THRESHOLDS};
pub use summary::{MatrixSummary, PairReference, DEFAULT_CATEGORIES};
