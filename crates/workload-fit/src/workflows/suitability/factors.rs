use serde::{Deserialize, Serialize};

use super::descriptors::{
    ConsistencyGuarantee, ConsistencyRequirement, LatencyTolerance, NetworkDependency, TierFit,
    TransactionShape,
};
use super::domain::{ArchitecturePattern, WorkloadProfile};

/// The four factor sub-scores for one workload / architecture pair, each in 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScores {
    pub latency: u8,
    pub consistency: u8,
    pub throughput: u8,
    pub network: u8,
}

impl FactorScores {
    pub fn evaluate(workload: &WorkloadProfile, architecture: &ArchitecturePattern) -> Self {
        Self {
            latency: latency_compatibility(workload, architecture),
            consistency: consistency_compatibility(workload, architecture),
            throughput: throughput_compatibility(workload, architecture),
            network: network_compatibility(workload, architecture),
        }
    }
}

pub fn latency_compatibility(workload: &WorkloadProfile, architecture: &ArchitecturePattern) -> u8 {
    let commit = architecture.commit_latency();
    match workload.latency_tolerance() {
        LatencyTolerance::UltraLow => match commit.ultra_low {
            TierFit::Tight => 5,
            TierFit::Partial => 3,
            TierFit::Mismatch => 1,
        },
        LatencyTolerance::Moderate => match commit.moderate {
            TierFit::Tight => 5,
            TierFit::Partial => 4,
            TierFit::Mismatch => 2,
        },
        LatencyTolerance::Relaxed => 5,
    }
}

pub fn consistency_compatibility(
    workload: &WorkloadProfile,
    architecture: &ArchitecturePattern,
) -> u8 {
    match workload.consistency() {
        ConsistencyRequirement::Strong => match architecture.consistency() {
            ConsistencyGuarantee::Strong => 5,
            ConsistencyGuarantee::Hybrid => 3,
            ConsistencyGuarantee::Weak => 1,
        },
        ConsistencyRequirement::Eventual => 5,
        ConsistencyRequirement::Unspecified => 3,
    }
}

pub fn throughput_compatibility(
    workload: &WorkloadProfile,
    architecture: &ArchitecturePattern,
) -> u8 {
    let throughput = architecture.throughput();
    match workload.transaction_shape() {
        TransactionShape::Bulk => match throughput.bulk {
            TierFit::Tight => 5,
            TierFit::Partial => 4,
            TierFit::Mismatch => 2,
        },
        TransactionShape::SmallFrequent => match throughput.small_frequent {
            TierFit::Tight => 5,
            TierFit::Partial => 3,
            TierFit::Mismatch => 2,
        },
        TransactionShape::Mixed => 3,
    }
}

/// Architecture-only: the workload does not influence the network sub-score.
pub fn network_compatibility(_workload: &WorkloadProfile, architecture: &ArchitecturePattern) -> u8 {
    match architecture.network() {
        NetworkDependency::High => 2,
        NetworkDependency::Medium => 3,
        NetworkDependency::Low => 5,
    }
}
