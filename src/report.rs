use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use tracing::warn;
use workload_fit::config::AppConfig;
use workload_fit::error::AppError;
use workload_fit::telemetry;
use workload_fit::workflows::ai_ml::{
    analyze_patterns, patterns_from_records, AiMlAnalysis, AiMlSummary,
};
use workload_fit::workflows::catalog::{
    export_analysis, read_records, FileProfileStore, ProfileCatalog, RejectedProfile,
    SummaryDocument,
};
use workload_fit::workflows::suitability::{CompatibilityResult, MatrixSummary};

#[derive(Args, Debug)]
pub(crate) struct MatrixReportArgs {
    /// Workload catalog (CSV, or JSON array when the extension is .json)
    #[arg(long)]
    pub(crate) workloads: PathBuf,
    /// Architecture catalog (CSV, or JSON array when the extension is .json)
    #[arg(long)]
    pub(crate) architectures: PathBuf,
    /// Optional AI/ML pattern catalog analysed alongside the matrix
    #[arg(long)]
    pub(crate) ai_ml: Option<PathBuf>,
    /// Workload category to average; repeat for several (defaults to APP_CATEGORY_FILTERS)
    #[arg(long = "category")]
    pub(crate) categories: Vec<String>,
    /// Directory receiving the exported files (defaults to APP_OUTPUT_DIR)
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
    /// Analysis date stamped on exported files (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Print the report without writing any files
    #[arg(long)]
    pub(crate) no_export: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AiMlReportArgs {
    /// AI/ML pattern catalog (CSV, or JSON array when the extension is .json)
    #[arg(long)]
    pub(crate) patterns: PathBuf,
}

pub(crate) fn run_matrix_report(args: MatrixReportArgs) -> Result<(), AppError> {
    let MatrixReportArgs {
        workloads,
        architectures,
        ai_ml,
        categories,
        output_dir,
        date,
        no_export,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let store = FileProfileStore::new(workloads, architectures);
    let catalog = ProfileCatalog::load(&store)?;
    let categories = if categories.is_empty() {
        config.analysis.category_filters.clone()
    } else {
        categories
    };
    let (results, summary) = catalog.analyze(&categories);

    render_matrix(&results, &summary, &catalog.rejected);

    let (analyses, ai_ml_summary) = match ai_ml {
        Some(path) => {
            let (analyses, summary) = analyse_pattern_file(path)?;
            render_ai_ml(&analyses, &summary);
            (analyses, Some(summary))
        }
        None => (Vec::new(), None),
    };

    if no_export {
        return Ok(());
    }

    let output_dir = output_dir.unwrap_or(config.analysis.output_dir);
    let document = SummaryDocument {
        analysis_date: date.unwrap_or_else(|| Local::now().date_naive()),
        matrix: summary,
        ai_ml: ai_ml_summary,
    };
    let export = export_analysis(&output_dir, &document, &results, &analyses)?;

    println!("\nExported files");
    println!("- {}", export.matrix_path.display());
    if let Some(path) = &export.ai_ml_path {
        println!("- {}", path.display());
    }
    println!("- {}", export.summary_path.display());

    Ok(())
}

pub(crate) fn run_ai_ml_report(args: AiMlReportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let (analyses, summary) = analyse_pattern_file(args.patterns)?;
    render_ai_ml(&analyses, &summary);
    Ok(())
}

fn analyse_pattern_file(path: PathBuf) -> Result<(Vec<AiMlAnalysis>, AiMlSummary), AppError> {
    let records = read_records(&path)?;
    let (patterns, rejected) = patterns_from_records(&records);
    for entry in &rejected {
        warn!(row = entry.row, error = %entry.error, "skipping malformed AI/ML pattern");
    }

    let analyses = analyze_patterns(&patterns);
    let summary = AiMlSummary::from_analyses(&analyses);
    Ok((analyses, summary))
}

fn render_matrix(
    results: &[CompatibilityResult],
    summary: &MatrixSummary,
    rejected: &[RejectedProfile],
) {
    println!("Workload suitability matrix");
    println!(
        "- {} pairings scored | average score {}",
        summary.total_combinations,
        format_score(summary.average_compatibility_score)
    );

    if !rejected.is_empty() {
        println!("Skipped catalog rows:");
        for entry in rejected {
            println!("  - {} row {}: {}", entry.kind, entry.row, entry.error);
        }
    }

    println!("Recommendations:");
    for entry in &summary.recommendation_counts {
        println!("  - {}: {}", entry.recommendation, entry.count);
    }

    println!("Category averages:");
    for entry in &summary.category_means {
        println!(
            "  - {}: {} across {} pairing(s)",
            entry.category,
            format_score(entry.average_score),
            entry.rows
        );
    }

    if let Some(best) = &summary.highest {
        println!(
            "Best pairing: {} ({:.2})",
            best.label(),
            best.overall_compatibility_score
        );
    }
    if let Some(worst) = &summary.lowest {
        println!(
            "Weakest pairing: {} ({:.2})",
            worst.label(),
            worst.overall_compatibility_score
        );
    }

    println!("\nPairings:");
    for result in results {
        println!(
            "  - {} | {:.2} | {}",
            result.pair_label(),
            result.overall_compatibility_score,
            result.recommendation
        );
    }

    if !summary.key_insights.is_empty() {
        println!("\nKey insights:");
        for insight in &summary.key_insights {
            println!("  - {insight}");
        }
    }
}

fn render_ai_ml(analyses: &[AiMlAnalysis], summary: &AiMlSummary) {
    println!("\nAI/ML separation analysis");
    println!(
        "- {} patterns | {} high priority | {} with excellent separation fit",
        summary.patterns_analyzed,
        summary.high_priority_patterns,
        summary.excellent_separation_patterns
    );
    if let Some(top) = &summary.top_pattern {
        println!("- Top candidate: {top}");
    }

    for analysis in analyses {
        println!(
            "  - {} | score {} | {} | {}",
            analysis.pattern_name,
            analysis.separation_suitability_score,
            analysis.implementation_priority.label(),
            analysis.scale_benefits
        );
    }
}

fn format_score(score: Option<f64>) -> String {
    score
        .map(|value| format!("{value:.2}"))
        .unwrap_or_else(|| "n/a".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_scores_render_as_not_available() {
        assert_eq!(format_score(None), "n/a");
        assert_eq!(format_score(Some(3.7)), "3.70");
    }
}
