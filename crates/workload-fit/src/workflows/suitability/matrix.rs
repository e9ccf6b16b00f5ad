use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use super::composite::composite_score;
use super::domain::{
    ArchitecturePattern, AttributeRecord, ProfileError, ProfileGuard, WorkloadProfile,
};
use super::factors::FactorScores;
use super::narrative::Narrative;
use super::recommendation::Recommendation;

/// Scored outcome of one workload / architecture pair. Field order matches the exported CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub workload_type: String,
    pub architecture_pattern: String,
    #[serde(serialize_with = "serialize_whole_as_integer")]
    pub base_suitability_score: f64,
    pub latency_compatibility: u8,
    pub consistency_compatibility: u8,
    pub throughput_compatibility: u8,
    pub network_compatibility: u8,
    pub overall_compatibility_score: f64,
    pub recommendation: Recommendation,
    pub key_considerations: String,
    pub risk_factors: String,
    pub optimization_opportunities: String,
}

impl CompatibilityResult {
    pub fn pair_label(&self) -> String {
        format!("{} + {}", self.workload_type, self.architecture_pattern)
    }
}

/// Catalog scores are usually whole numbers; write `2` rather than `2.0`.
fn serialize_whole_as_integer<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

pub fn score_pair(
    workload: &WorkloadProfile,
    architecture: &ArchitecturePattern,
) -> CompatibilityResult {
    let factors = FactorScores::evaluate(workload, architecture);
    let overall = composite_score(workload.suitability_score(), &factors);
    let narrative = Narrative::compose(workload, architecture);

    CompatibilityResult {
        workload_type: workload.workload_type().to_string(),
        architecture_pattern: architecture.architecture_pattern().to_string(),
        base_suitability_score: workload.suitability_score(),
        latency_compatibility: factors.latency,
        consistency_compatibility: factors.consistency,
        throughput_compatibility: factors.throughput,
        network_compatibility: factors.network,
        overall_compatibility_score: overall,
        recommendation: Recommendation::classify(overall),
        key_considerations: narrative.key_considerations,
        risk_factors: narrative.risk_factors,
        optimization_opportunities: narrative.optimization_opportunities,
    }
}

/// Scores the full product in workload-major, architecture-minor order.
pub fn build_matrix(
    workloads: &[WorkloadProfile],
    architectures: &[ArchitecturePattern],
) -> Vec<CompatibilityResult> {
    let mut results = Vec::with_capacity(workloads.len() * architectures.len());

    for workload in workloads {
        for architecture in architectures {
            results.push(score_pair(workload, architecture));
        }
    }

    debug!(
        workloads = workloads.len(),
        architectures = architectures.len(),
        rows = results.len(),
        "built suitability matrix"
    );

    results
}

pub fn score_records(
    workload: &AttributeRecord,
    architecture: &AttributeRecord,
) -> Result<CompatibilityResult, ProfileError> {
    let guard = ProfileGuard::new();
    let workload = guard.workload(workload)?;
    let architecture = guard.architecture(architecture)?;
    Ok(score_pair(&workload, &architecture))
}

/// Strict variant over raw records: the first malformed record aborts the build.
pub fn build_matrix_from_records(
    workloads: &[AttributeRecord],
    architectures: &[AttributeRecord],
) -> Result<Vec<CompatibilityResult>, ProfileError> {
    let guard = ProfileGuard::new();
    let workloads = workloads
        .iter()
        .map(|record| guard.workload(record))
        .collect::<Result<Vec<_>, _>>()?;
    let architectures = architectures
        .iter()
        .map(|record| guard.architecture(record))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(build_matrix(&workloads, &architectures))
}
