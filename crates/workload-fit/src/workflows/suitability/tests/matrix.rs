use super::common::*;
use crate::workflows::suitability::{
    build_matrix, build_matrix_from_records, score_pair, score_records, AttributeRecord,
    ProfileError, ProfileKind, Recommendation,
};

#[test]
fn reference_pair_scores_as_recommended() {
    let result = score_pair(&oltp_workload(), &local_architecture());

    assert_eq!(result.workload_type, "OLTP - High Frequency");
    assert_eq!(result.architecture_pattern, "Shared-nothing local storage");
    assert_eq!(result.base_suitability_score, 2.0);
    assert_eq!(result.latency_compatibility, 5);
    assert_eq!(result.consistency_compatibility, 5);
    assert_eq!(result.throughput_compatibility, 5);
    assert_eq!(result.network_compatibility, 5);
    assert_eq!(result.overall_compatibility_score, 4.1);
    assert_eq!(result.recommendation, Recommendation::Recommended);
}

#[test]
fn scoring_is_deterministic() {
    let workload = oltp_workload();
    let architecture = disaggregated_architecture();

    let first = score_pair(&workload, &architecture);
    let second = score_pair(&workload, &architecture);

    assert_eq!(first, second);
    assert_eq!(
        first.overall_compatibility_score.to_bits(),
        second.overall_compatibility_score.to_bits()
    );
}

#[test]
fn network_dependency_alone_shifts_score_by_thirty_hundredths() {
    let workload = oltp_workload();
    let low = architecture("Local", "< 5ms", "Strong ACID", "High, local", "Low", "Seconds");
    let high = architecture("Local", "< 5ms", "Strong ACID", "High, local", "High", "Seconds");

    let low_result = score_pair(&workload, &low);
    let high_result = score_pair(&workload, &high);

    assert_eq!(low_result.network_compatibility, 5);
    assert_eq!(high_result.network_compatibility, 2);
    assert_close(
        low_result.overall_compatibility_score - high_result.overall_compatibility_score,
        0.30,
    );
}

#[test]
fn mismatched_pair_is_not_recommended() {
    let result = score_pair(&oltp_workload(), &disaggregated_architecture());

    assert_eq!(result.latency_compatibility, 1);
    assert_eq!(result.consistency_compatibility, 1);
    assert_eq!(result.throughput_compatibility, 3);
    assert_eq!(result.network_compatibility, 2);
    assert_eq!(result.overall_compatibility_score, 1.7);
    assert_eq!(result.recommendation, Recommendation::NotRecommended);
}

#[test]
fn matrix_is_workload_major() {
    let workloads = vec![oltp_workload(), olap_workload()];
    let architectures = vec![
        local_architecture(),
        disaggregated_architecture(),
        memory_tier_architecture(),
    ];

    let results = build_matrix(&workloads, &architectures);

    assert_eq!(results.len(), workloads.len() * architectures.len());
    for (i, workload) in workloads.iter().enumerate() {
        for (j, architecture) in architectures.iter().enumerate() {
            let row = &results[i * architectures.len() + j];
            assert_eq!(row.workload_type, workload.workload_type());
            assert_eq!(row.architecture_pattern, architecture.architecture_pattern());
        }
    }

    let scores: Vec<f64> = results
        .iter()
        .map(|row| row.overall_compatibility_score)
        .collect();
    assert_eq!(scores, vec![4.1, 1.7, 2.55, 5.0, 4.55, 4.35]);
}

#[test]
fn empty_inputs_produce_an_empty_matrix() {
    assert!(build_matrix(&[], &[local_architecture()]).is_empty());
    assert!(build_matrix(&[oltp_workload()], &[]).is_empty());
}

#[test]
fn score_records_matches_typed_scoring() {
    let from_records =
        score_records(&workload_record(), &architecture_record()).expect("records are complete");
    let typed = score_pair(&oltp_workload(), &local_architecture());

    assert_eq!(from_records, typed);
}

#[test]
fn score_records_surfaces_missing_fields() {
    let incomplete: AttributeRecord = [
        ("architecture_pattern", "Shared-nothing local storage"),
        ("commit_latency_p99", "< 5ms"),
        ("consistency_model", "Strong ACID"),
        ("throughput_characteristics", "High, local"),
        ("failure_recovery_time", "Seconds"),
    ]
    .into_iter()
    .collect();

    let error = score_records(&workload_record(), &incomplete).expect_err("absent attribute");
    assert_eq!(
        error,
        ProfileError::MissingField {
            kind: ProfileKind::Architecture,
            field: "network_dependency",
        }
    );
}

#[test]
fn blank_descriptors_fall_back_to_default_branches() {
    let workload = workload_record().with("latency_requirement", "");
    let architecture = architecture_record().with("network_dependency", "   ");

    let result = score_records(&workload, &architecture).expect("blank text is scored");

    assert_eq!(result.latency_compatibility, 5);
    assert_eq!(result.network_compatibility, 5);
    assert_eq!(result.overall_compatibility_score, 4.1);
}

#[test]
fn blank_names_and_scores_are_still_rejected() {
    let unnamed = architecture_record().with("architecture_pattern", " ");
    assert_eq!(
        score_records(&workload_record(), &unnamed),
        Err(ProfileError::MissingField {
            kind: ProfileKind::Architecture,
            field: "architecture_pattern",
        })
    );

    let unscored = workload_record().with("suitability_score", "");
    assert_eq!(
        score_records(&unscored, &architecture_record()),
        Err(ProfileError::MissingField {
            kind: ProfileKind::Workload,
            field: "suitability_score",
        })
    );
}

#[test]
fn strict_matrix_build_stops_at_first_malformed_record() {
    let broken = workload_record().with("suitability_score", "high");

    let error = build_matrix_from_records(&[workload_record(), broken], &[architecture_record()])
        .expect_err("invalid score");

    match error {
        ProfileError::InvalidScore { value } => assert_eq!(value, "high"),
        other => panic!("expected invalid score, got {other:?}"),
    }
}
