use serde::Serialize;

use super::factors::FactorScores;

/// Fixed contribution of each term to the composite score. The weights sum to exactly 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringWeights {
    pub base: f64,
    pub latency: f64,
    pub consistency: f64,
    pub throughput: f64,
    pub network: f64,
}

pub const SCORING_WEIGHTS: ScoringWeights = ScoringWeights {
    base: 0.30,
    latency: 0.25,
    consistency: 0.20,
    throughput: 0.15,
    network: 0.10,
};

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.base + self.latency + self.consistency + self.throughput + self.network
    }

    /// Weighted sum of the base score and the factor sub-scores, rounded to two decimals.
    pub fn combine(&self, base_suitability: f64, factors: &FactorScores) -> f64 {
        let score = base_suitability * self.base
            + f64::from(factors.latency) * self.latency
            + f64::from(factors.consistency) * self.consistency
            + f64::from(factors.throughput) * self.throughput
            + f64::from(factors.network) * self.network;

        round_to_hundredths(score)
    }
}

pub fn composite_score(base_suitability: f64, factors: &FactorScores) -> f64 {
    SCORING_WEIGHTS.combine(base_suitability, factors)
}

/// Rounds on the exact binary value, so `1.365` (stored just below the half-cent) becomes `1.36`.
pub(crate) fn round_to_hundredths(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
