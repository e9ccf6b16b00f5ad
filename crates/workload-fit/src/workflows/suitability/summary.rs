use serde::Serialize;
use tracing::info;

use super::composite::round_to_hundredths;
use super::matrix::CompatibilityResult;
use super::recommendation::Recommendation;

/// Workload categories summarised when the caller does not ask for specific ones.
pub const DEFAULT_CATEGORIES: [&str; 2] = ["OLAP", "OLTP"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationCount {
    pub recommendation: Recommendation,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairReference {
    pub row: usize,
    pub workload_type: String,
    pub architecture_pattern: String,
    pub overall_compatibility_score: f64,
}

impl PairReference {
    fn from_row(row: usize, result: &CompatibilityResult) -> Self {
        Self {
            row,
            workload_type: result.workload_type.clone(),
            architecture_pattern: result.architecture_pattern.clone(),
            overall_compatibility_score: result.overall_compatibility_score,
        }
    }

    pub fn label(&self) -> String {
        format!("{} + {}", self.workload_type, self.architecture_pattern)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryMean {
    pub category: String,
    pub rows: usize,
    pub average_score: Option<f64>,
}

/// Aggregate view over a full suitability matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixSummary {
    pub total_combinations: usize,
    pub average_compatibility_score: Option<f64>,
    pub recommendation_counts: Vec<RecommendationCount>,
    pub highest: Option<PairReference>,
    pub lowest: Option<PairReference>,
    pub category_means: Vec<CategoryMean>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_insights: Vec<String>,
}

impl MatrixSummary {
    pub fn from_results<S: AsRef<str>>(results: &[CompatibilityResult], categories: &[S]) -> Self {
        let recommendation_counts = Recommendation::ordered()
            .into_iter()
            .map(|recommendation| RecommendationCount {
                recommendation,
                count: results
                    .iter()
                    .filter(|result| result.recommendation == recommendation)
                    .count(),
            })
            .collect();

        let category_means = categories
            .iter()
            .map(|category| {
                let category = category.as_ref();
                CategoryMean {
                    category: category.to_string(),
                    rows: results
                        .iter()
                        .filter(|result| result.workload_type.contains(category))
                        .count(),
                    average_score: category_mean(results, category),
                }
            })
            .collect();

        let mut summary = Self {
            total_combinations: results.len(),
            average_compatibility_score: mean_score(results.iter()),
            recommendation_counts,
            highest: highest_scoring(results),
            lowest: lowest_scoring(results),
            category_means,
            key_insights: Vec::new(),
        };
        summary.key_insights = key_insights(&summary, results);

        info!(
            rows = summary.total_combinations,
            average = ?summary.average_compatibility_score,
            "summarised suitability matrix"
        );

        summary
    }

    pub fn count_for(&self, recommendation: Recommendation) -> usize {
        self.recommendation_counts
            .iter()
            .find(|entry| entry.recommendation == recommendation)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }

    pub fn category(&self, category: &str) -> Option<&CategoryMean> {
        self.category_means
            .iter()
            .find(|entry| entry.category == category)
    }
}

/// Mean over rows whose workload type contains `needle` (case-sensitive).
pub fn category_mean(results: &[CompatibilityResult], needle: &str) -> Option<f64> {
    mean_score(
        results
            .iter()
            .filter(|result| result.workload_type.contains(needle)),
    )
}

pub fn mean_score<'a, I>(results: I) -> Option<f64>
where
    I: Iterator<Item = &'a CompatibilityResult>,
{
    let (sum, count) = results.fold((0.0_f64, 0_usize), |(sum, count), result| {
        (sum + result.overall_compatibility_score, count + 1)
    });

    if count == 0 {
        None
    } else {
        Some(round_to_hundredths(sum / count as f64))
    }
}

/// First row with the maximum score in matrix order.
pub fn highest_scoring(results: &[CompatibilityResult]) -> Option<PairReference> {
    extreme_row(results, |candidate, current| candidate > current)
}

/// First row with the minimum score in matrix order.
pub fn lowest_scoring(results: &[CompatibilityResult]) -> Option<PairReference> {
    extreme_row(results, |candidate, current| candidate < current)
}

fn extreme_row(
    results: &[CompatibilityResult],
    replaces: impl Fn(f64, f64) -> bool,
) -> Option<PairReference> {
    let mut best: Option<(usize, &CompatibilityResult)> = None;
    for (row, result) in results.iter().enumerate() {
        match best {
            Some((_, current))
                if !replaces(
                    result.overall_compatibility_score,
                    current.overall_compatibility_score,
                ) => {}
            _ => best = Some((row, result)),
        }
    }

    best.map(|(row, result)| PairReference::from_row(row, result))
}

fn key_insights(summary: &MatrixSummary, results: &[CompatibilityResult]) -> Vec<String> {
    let mut insights = Vec::new();

    if results.is_empty() {
        insights.push("No workload / architecture pairings were scored".to_string());
        return insights;
    }

    let mut ranked: Vec<&CategoryMean> = summary
        .category_means
        .iter()
        .filter(|entry| entry.average_score.is_some())
        .collect();
    ranked.sort_by(|left, right| {
        right
            .average_score
            .partial_cmp(&left.average_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for (position, entry) in ranked.iter().enumerate() {
        if let Some(average) = entry.average_score {
            let standing = if position == 0 && ranked.len() > 1 {
                "show the highest compatibility with separation"
            } else {
                "average"
            };
            insights.push(format!(
                "{} workloads {} (avg score: {:.2} over {} pairing{})",
                entry.category,
                standing,
                average,
                entry.rows,
                if entry.rows == 1 { "" } else { "s" }
            ));
        }
    }

    if let Some(best) = &summary.highest {
        insights.push(format!(
            "Strongest pairing: {} ({:.2})",
            best.label(),
            best.overall_compatibility_score
        ));
    }

    let penalised = results
        .iter()
        .filter(|result| result.network_compatibility <= 2)
        .count();
    if penalised > 0 {
        insights.push(format!(
            "Network dependency is a key factor: {} of {} pairings carry a high network dependency penalty",
            penalised,
            results.len()
        ));
    }

    let favourable = summary.count_for(Recommendation::HighlyRecommended)
        + summary.count_for(Recommendation::Recommended);
    insights.push(format!(
        "{} of {} pairings are recommended or better",
        favourable,
        results.len()
    ));

    insights
}
