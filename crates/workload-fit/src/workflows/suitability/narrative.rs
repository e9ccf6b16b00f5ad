use serde::{Deserialize, Serialize};

use super::descriptors::NetworkDependency;
use super::domain::{ArchitecturePattern, WorkloadProfile};

pub const DEFAULT_CONSIDERATIONS: &str = "Standard implementation considerations apply";
pub const DEFAULT_RISKS: &str = "Standard operational risks";
pub const DEFAULT_OPPORTUNITIES: &str = "Standard optimization practices apply";

const SEPARATOR: &str = "; ";

/// Advisory text attached to a scored pair. It never feeds back into the numeric score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub key_considerations: String,
    pub risk_factors: String,
    pub optimization_opportunities: String,
}

impl Narrative {
    pub fn compose(workload: &WorkloadProfile, architecture: &ArchitecturePattern) -> Self {
        Self {
            key_considerations: key_considerations(workload, architecture),
            risk_factors: risk_factors(workload, architecture),
            optimization_opportunities: optimization_opportunities(workload, architecture),
        }
    }
}

pub fn key_considerations(workload: &WorkloadProfile, architecture: &ArchitecturePattern) -> String {
    let mut considerations = Vec::new();

    if workload.latency_requirement().contains("< 10ms") {
        considerations.push("Ultra-low latency requirements may be challenging");
    }

    if mentions_strong_consistency(workload) {
        considerations.push("Strong consistency requirements need careful design");
    }

    if architecture.network() == NetworkDependency::High {
        considerations.push("High network dependency requires reliable connectivity");
    }

    if architecture.recovery().minutes_to_hours {
        considerations.push("Extended recovery times may impact availability");
    }

    join_or_default(&considerations, DEFAULT_CONSIDERATIONS)
}

pub fn risk_factors(workload: &WorkloadProfile, architecture: &ArchitecturePattern) -> String {
    let mut risks = Vec::new();

    if workload.suitability_score() <= 2.0 && architecture.network() == NetworkDependency::High {
        risks.push("Network latency may severely impact performance");
    }

    if mentions_strong_consistency(workload)
        && architecture
            .consistency_model()
            .to_lowercase()
            .contains("eventual")
    {
        risks.push("Consistency model mismatch may cause data integrity issues");
    }

    if architecture.recovery().mentions_hours {
        risks.push("Long recovery times may violate SLA requirements");
    }

    if architecture
        .architecture_pattern()
        .to_lowercase()
        .contains("memory-based")
    {
        risks.push("High memory costs may be prohibitive at scale");
    }

    join_or_default(&risks, DEFAULT_RISKS)
}

pub fn optimization_opportunities(
    workload: &WorkloadProfile,
    architecture: &ArchitecturePattern,
) -> String {
    let mut opportunities = Vec::new();
    let workload_type = workload.workload_type().to_lowercase();

    if workload.suitability_score() >= 4.0 {
        opportunities.push("Implement aggressive caching strategies");
    }

    if workload_type.contains("batch") {
        opportunities.push("Use spot instances for cost optimization");
    }

    if architecture.throughput().elastic {
        opportunities.push("Implement auto-scaling for cost efficiency");
    }

    if workload_type.contains("analytics") {
        opportunities.push("Implement storage tiering for cost optimization");
    }

    join_or_default(&opportunities, DEFAULT_OPPORTUNITIES)
}

// Only "strong" counts here; "ACID" alone does not trigger the narrative rules.
fn mentions_strong_consistency(workload: &WorkloadProfile) -> bool {
    workload.consistency_model().to_lowercase().contains("strong")
}

fn join_or_default(entries: &[&str], default: &str) -> String {
    if entries.is_empty() {
        default.to_string()
    } else {
        entries.join(SEPARATOR)
    }
}
