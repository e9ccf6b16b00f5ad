use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::workflows::ai_ml::{AiMlAnalysis, AiMlSummary};
use crate::workflows::suitability::{CompatibilityResult, MatrixSummary};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to encode JSON summary: {0}")]
    Json(#[from] serde_json::Error),
}

/// Summary JSON written next to the matrix export.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryDocument {
    pub analysis_date: NaiveDate,
    pub matrix: MatrixSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_ml: Option<AiMlSummary>,
}

/// Paths produced by [`export_analysis`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisExport {
    pub matrix_path: PathBuf,
    pub summary_path: PathBuf,
    pub ai_ml_path: Option<PathBuf>,
}

pub fn analysis_file_name(date: NaiveDate, suffix: &str) -> String {
    format!(
        "{}__analysis__workload-suitability__{suffix}",
        date.format("%Y-%m-%d")
    )
}

/// Writes one CSV row per result, in matrix order.
pub fn write_matrix_csv<W: Write>(
    writer: W,
    results: &[CompatibilityResult],
) -> Result<(), ExportError> {
    write_rows(writer, results)
}

pub fn write_summary_json<W: Write>(
    writer: W,
    document: &SummaryDocument,
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, document)?;
    Ok(())
}

pub fn export_analysis(
    output_dir: &Path,
    document: &SummaryDocument,
    results: &[CompatibilityResult],
    ai_ml: &[AiMlAnalysis],
) -> Result<AnalysisExport, ExportError> {
    fs::create_dir_all(output_dir).map_err(|source| ExportError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let date = document.analysis_date;
    let matrix_path = output_dir.join(analysis_file_name(date, "suitability-matrix.csv"));
    write_matrix_csv(create(&matrix_path)?, results)?;

    let ai_ml_path = if ai_ml.is_empty() {
        None
    } else {
        let path = output_dir.join(analysis_file_name(date, "ai-ml-analysis.csv"));
        write_rows(create(&path)?, ai_ml)?;
        Some(path)
    };

    let summary_path = output_dir.join(analysis_file_name(date, "summary.json"));
    write_summary_json(create(&summary_path)?, document)?;

    info!(
        matrix = %matrix_path.display(),
        summary = %summary_path.display(),
        rows = results.len(),
        "exported suitability analysis"
    );

    Ok(AnalysisExport {
        matrix_path,
        summary_path,
        ai_ml_path,
    })
}

fn write_rows<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

fn create(path: &Path) -> Result<File, ExportError> {
    File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
