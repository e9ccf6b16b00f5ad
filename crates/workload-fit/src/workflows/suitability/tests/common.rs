use crate::workflows::suitability::domain::{
    ArchitectureAttributes, ArchitecturePattern, AttributeRecord, WorkloadAttributes,
    WorkloadProfile,
};

pub(super) fn workload(
    workload_type: &str,
    latency_requirement: &str,
    consistency_model: &str,
    transaction_pattern: &str,
    suitability_score: f64,
) -> WorkloadProfile {
    WorkloadProfile::new(WorkloadAttributes {
        workload_type: workload_type.to_string(),
        latency_requirement: latency_requirement.to_string(),
        consistency_model: consistency_model.to_string(),
        transaction_pattern: transaction_pattern.to_string(),
        suitability_score,
    })
    .expect("valid workload fixture")
}

pub(super) fn architecture(
    architecture_pattern: &str,
    commit_latency_p99: &str,
    consistency_model: &str,
    throughput_characteristics: &str,
    network_dependency: &str,
    failure_recovery_time: &str,
) -> ArchitecturePattern {
    ArchitecturePattern::new(ArchitectureAttributes {
        architecture_pattern: architecture_pattern.to_string(),
        commit_latency_p99: commit_latency_p99.to_string(),
        consistency_model: consistency_model.to_string(),
        throughput_characteristics: throughput_characteristics.to_string(),
        network_dependency: network_dependency.to_string(),
        failure_recovery_time: failure_recovery_time.to_string(),
    })
    .expect("valid architecture fixture")
}

pub(super) fn oltp_workload() -> WorkloadProfile {
    workload(
        "OLTP - High Frequency",
        "< 10ms",
        "Strong ACID",
        "Small, frequent writes",
        2.0,
    )
}

pub(super) fn olap_workload() -> WorkloadProfile {
    workload(
        "OLAP - Analytics",
        "Seconds to minutes",
        "Eventually consistent",
        "Large scans, bulk loads",
        5.0,
    )
}

pub(super) fn local_architecture() -> ArchitecturePattern {
    architecture(
        "Shared-nothing local storage",
        "< 5ms",
        "Strong ACID",
        "High, local",
        "Low",
        "Seconds",
    )
}

pub(super) fn disaggregated_architecture() -> ArchitecturePattern {
    architecture(
        "Disaggregated object storage",
        "20-100ms",
        "Eventually consistent",
        "Elastic, variable",
        "High",
        "minutes to hours",
    )
}

pub(super) fn memory_tier_architecture() -> ArchitecturePattern {
    architecture(
        "Memory-based cache tier",
        "< 20ms",
        "Hybrid",
        "Limited",
        "Medium",
        "Seconds to minutes",
    )
}

pub(super) fn workload_record() -> AttributeRecord {
    AttributeRecord::new()
        .with("workload_type", "OLTP - High Frequency")
        .with("latency_requirement", "< 10ms")
        .with("consistency_model", "Strong ACID")
        .with("transaction_pattern", "Small, frequent writes")
        .with("suitability_score", 2.0)
}

pub(super) fn architecture_record() -> AttributeRecord {
    AttributeRecord::new()
        .with("architecture_pattern", "Shared-nothing local storage")
        .with("commit_latency_p99", "< 5ms")
        .with("consistency_model", "Strong ACID")
        .with("throughput_characteristics", "High, local")
        .with("network_dependency", "Low")
        .with("failure_recovery_time", "Seconds")
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
