use super::common::*;
use crate::workflows::suitability::factors::{
    consistency_compatibility, latency_compatibility, network_compatibility,
    throughput_compatibility,
};
use crate::workflows::suitability::FactorScores;

#[test]
fn ultra_low_latency_workloads_need_sub_five_millisecond_commits() {
    let oltp = oltp_workload();

    assert_eq!(latency_compatibility(&oltp, &local_architecture()), 5);
    assert_eq!(latency_compatibility(&oltp, &memory_tier_architecture()), 3);
    assert_eq!(latency_compatibility(&oltp, &disaggregated_architecture()), 1);
}

#[test]
fn moderate_latency_workloads_use_their_own_ladder() {
    let reporting = workload("Reporting", "10-50ms", "Snapshot", "Mixed", 3.0);

    let ten = architecture("A", "< 10ms", "Strong", "High", "Low", "Seconds");
    let ranged = architecture("B", "20-100ms", "Strong", "High", "Low", "Seconds");
    // "< 5ms" is not one of the moderate ladder markers, so it falls through to a mismatch.
    let five = architecture("C", "< 5ms", "Strong", "High", "Low", "Seconds");

    assert_eq!(latency_compatibility(&reporting, &ten), 5);
    assert_eq!(latency_compatibility(&reporting, &ranged), 4);
    assert_eq!(latency_compatibility(&reporting, &five), 2);
}

#[test]
fn relaxed_latency_workloads_accept_any_architecture() {
    let olap = olap_workload();
    for candidate in [
        local_architecture(),
        disaggregated_architecture(),
        memory_tier_architecture(),
    ] {
        assert_eq!(latency_compatibility(&olap, &candidate), 5);
    }
}

#[test]
fn strong_consistency_requires_strong_or_hybrid_guarantees() {
    let oltp = oltp_workload();

    assert_eq!(consistency_compatibility(&oltp, &local_architecture()), 5);
    assert_eq!(consistency_compatibility(&oltp, &memory_tier_architecture()), 3);
    assert_eq!(consistency_compatibility(&oltp, &disaggregated_architecture()), 1);
}

#[test]
fn eventual_and_unrecognised_consistency_use_fixed_scores() {
    let olap = olap_workload();
    assert_eq!(consistency_compatibility(&olap, &disaggregated_architecture()), 5);

    let session = workload("Session store", "< 100ms", "Read-your-writes", "Mixed", 3.0);
    assert_eq!(consistency_compatibility(&session, &local_architecture()), 3);
}

#[test]
fn bulk_workloads_prefer_high_then_variable_throughput() {
    let olap = olap_workload();

    assert_eq!(throughput_compatibility(&olap, &local_architecture()), 5);
    assert_eq!(throughput_compatibility(&olap, &disaggregated_architecture()), 4);
    assert_eq!(throughput_compatibility(&olap, &memory_tier_architecture()), 2);
}

#[test]
fn small_frequent_workloads_penalise_limited_throughput() {
    let oltp = oltp_workload();

    assert_eq!(throughput_compatibility(&oltp, &local_architecture()), 5);
    assert_eq!(throughput_compatibility(&oltp, &disaggregated_architecture()), 3);
    assert_eq!(throughput_compatibility(&oltp, &memory_tier_architecture()), 2);

    let mixed = workload("Mixed", "< 100ms", "Strong", "Read heavy", 3.0);
    assert_eq!(throughput_compatibility(&mixed, &memory_tier_architecture()), 3);
}

#[test]
fn network_score_ignores_the_workload() {
    for workload in [oltp_workload(), olap_workload()] {
        assert_eq!(network_compatibility(&workload, &local_architecture()), 5);
        assert_eq!(network_compatibility(&workload, &memory_tier_architecture()), 3);
        assert_eq!(network_compatibility(&workload, &disaggregated_architecture()), 2);
    }
}

#[test]
fn unrecognised_descriptors_resolve_to_defaults() {
    let odd_workload = workload("Unknown", "whenever", "n/a", "n/a", 3.0);
    let odd_architecture = architecture("Unknown", "n/a", "n/a", "n/a", "n/a", "n/a");

    let scores = FactorScores::evaluate(&odd_workload, &odd_architecture);
    assert_eq!(
        scores,
        FactorScores {
            latency: 5,
            consistency: 3,
            throughput: 3,
            network: 5,
        }
    );
}

#[test]
fn factor_scores_stay_within_bounds() {
    let workloads = [oltp_workload(), olap_workload()];
    let architectures = [
        local_architecture(),
        disaggregated_architecture(),
        memory_tier_architecture(),
    ];

    for workload in &workloads {
        for architecture in &architectures {
            let scores = FactorScores::evaluate(workload, architecture);
            let named = [
                ("latency", scores.latency),
                ("consistency", scores.consistency),
                ("throughput", scores.throughput),
                ("network", scores.network),
            ];
            for (factor, value) in named {
                assert!((1..=5).contains(&value), "{factor} out of range: {value}");
            }
            assert!([2, 3, 5].contains(&scores.network));
        }
    }
}
