use super::common::*;
use crate::workflows::suitability::summary::{category_mean, highest_scoring, lowest_scoring};
use crate::workflows::suitability::{
    build_matrix, MatrixSummary, Recommendation, DEFAULT_CATEGORIES,
};

fn sample_matrix() -> Vec<crate::workflows::suitability::CompatibilityResult> {
    build_matrix(
        &[oltp_workload(), olap_workload()],
        &[
            local_architecture(),
            disaggregated_architecture(),
            memory_tier_architecture(),
        ],
    )
}

#[test]
fn summary_reports_mean_counts_and_extremes() {
    let results = sample_matrix();
    let summary = MatrixSummary::from_results(&results, &DEFAULT_CATEGORIES);

    assert_eq!(summary.total_combinations, 6);
    assert_eq!(summary.average_compatibility_score, Some(3.71));
    assert_eq!(summary.count_for(Recommendation::HighlyRecommended), 2);
    assert_eq!(summary.count_for(Recommendation::Recommended), 2);
    assert_eq!(summary.count_for(Recommendation::ConsiderWithCaution), 1);
    assert_eq!(summary.count_for(Recommendation::NotRecommended), 1);
    assert_eq!(summary.count_for(Recommendation::StronglyDiscouraged), 0);
    assert_eq!(summary.recommendation_counts.len(), 5);

    let highest = summary.highest.as_ref().expect("highest row");
    assert_eq!(highest.row, 3);
    assert_eq!(highest.label(), "OLAP - Analytics + Shared-nothing local storage");

    let lowest = summary.lowest.as_ref().expect("lowest row");
    assert_eq!(lowest.row, 1);
    assert_eq!(lowest.overall_compatibility_score, 1.7);
}

#[test]
fn category_means_filter_by_substring() {
    let results = sample_matrix();
    let summary = MatrixSummary::from_results(&results, &DEFAULT_CATEGORIES);

    assert_eq!(category_mean(&results, "OLAP"), Some(4.63));
    assert_eq!(category_mean(&results, "OLTP"), Some(2.78));
    assert_eq!(category_mean(&results, "olap"), None);

    let olap = summary.category("OLAP").expect("olap entry");
    assert_eq!(olap.rows, 3);
    assert!(summary
        .key_insights
        .iter()
        .any(|insight| insight.starts_with("OLAP workloads show the highest compatibility")));
}

#[test]
fn ties_resolve_to_first_occurrence() {
    let twin = local_architecture();
    let results = build_matrix(&[olap_workload()], &[twin.clone(), twin]);

    assert_eq!(highest_scoring(&results).expect("row").row, 0);
    assert_eq!(lowest_scoring(&results).expect("row").row, 0);
}

#[test]
fn empty_matrix_degrades_without_panicking() {
    let summary = MatrixSummary::from_results(&[], &DEFAULT_CATEGORIES);

    assert_eq!(summary.total_combinations, 0);
    assert_eq!(summary.average_compatibility_score, None);
    assert!(summary.highest.is_none());
    assert!(summary.lowest.is_none());
    assert!(summary
        .category_means
        .iter()
        .all(|entry| entry.average_score.is_none() && entry.rows == 0));
    assert_eq!(
        summary.key_insights,
        vec!["No workload / architecture pairings were scored".to_string()]
    );
}

#[test]
fn summary_serializes_null_for_undefined_mean() {
    let summary = MatrixSummary::from_results(&[], &["OLAP"]);
    let json = serde_json::to_value(&summary).expect("serialize");

    assert!(json["average_compatibility_score"].is_null());
    assert!(json["highest"].is_null());
}
