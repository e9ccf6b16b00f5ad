//! Profile store adapters: loading workload and architecture catalogs from CSV, JSON or memory,
//! and exporting scored matrices.

mod export;
mod parser;

pub use export::{
    analysis_file_name, export_analysis, write_matrix_csv, write_summary_json, AnalysisExport,
    ExportError, SummaryDocument,
};

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use tracing::{info, warn};

use crate::workflows::suitability::{
    build_matrix, ArchitecturePattern, AttributeRecord, CompatibilityResult, MatrixSummary,
    ProfileError, ProfileGuard, ProfileKind, WorkloadProfile,
};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid catalog JSON data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Source of raw catalog records. Implementations only fetch rows; validation happens in
/// [`ProfileCatalog::load`].
pub trait ProfileStore {
    fn workload_records(&self) -> Result<Vec<AttributeRecord>, CatalogError>;
    fn architecture_records(&self) -> Result<Vec<AttributeRecord>, CatalogError>;
}

/// File-backed store; `.json` files are read as arrays of objects, anything else as CSV.
#[derive(Debug, Clone)]
pub struct FileProfileStore {
    workloads: PathBuf,
    architectures: PathBuf,
}

impl FileProfileStore {
    pub fn new(workloads: impl Into<PathBuf>, architectures: impl Into<PathBuf>) -> Self {
        Self {
            workloads: workloads.into(),
            architectures: architectures.into(),
        }
    }
}

impl ProfileStore for FileProfileStore {
    fn workload_records(&self) -> Result<Vec<AttributeRecord>, CatalogError> {
        read_records(&self.workloads)
    }

    fn architecture_records(&self) -> Result<Vec<AttributeRecord>, CatalogError> {
        read_records(&self.architectures)
    }
}

/// Store over records already held in memory, e.g. an HTTP request body.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    pub workloads: Vec<AttributeRecord>,
    pub architectures: Vec<AttributeRecord>,
}

impl ProfileStore for InMemoryProfileStore {
    fn workload_records(&self) -> Result<Vec<AttributeRecord>, CatalogError> {
        Ok(self.workloads.clone())
    }

    fn architecture_records(&self) -> Result<Vec<AttributeRecord>, CatalogError> {
        Ok(self.architectures.clone())
    }
}

pub fn read_records(path: &Path) -> Result<Vec<AttributeRecord>, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        Ok(parser::parse_json_records(file)?)
    } else {
        Ok(parser::parse_csv_records(file)?)
    }
}

/// A catalog row that failed validation and was left out of the matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedProfile {
    pub kind: ProfileKind,
    /// 1-based position of the row within its catalog.
    pub row: usize,
    #[serde(serialize_with = "serialize_display")]
    pub error: ProfileError,
}

/// Validated workloads and architectures ready for scoring.
#[derive(Debug, Clone, Default)]
pub struct ProfileCatalog {
    pub workloads: Vec<WorkloadProfile>,
    pub architectures: Vec<ArchitecturePattern>,
    pub rejected: Vec<RejectedProfile>,
}

impl ProfileCatalog {
    pub fn load<S: ProfileStore + ?Sized>(store: &S) -> Result<Self, CatalogError> {
        let workloads = store.workload_records()?;
        let architectures = store.architecture_records()?;
        Ok(Self::from_records(&workloads, &architectures))
    }

    /// Keeps every valid profile and records one rejection per malformed row.
    pub fn from_records(workloads: &[AttributeRecord], architectures: &[AttributeRecord]) -> Self {
        let guard = ProfileGuard::new();
        let mut catalog = Self::default();

        for (index, record) in workloads.iter().enumerate() {
            match guard.workload(record) {
                Ok(profile) => catalog.workloads.push(profile),
                Err(error) => catalog.reject(ProfileKind::Workload, index + 1, error),
            }
        }

        for (index, record) in architectures.iter().enumerate() {
            match guard.architecture(record) {
                Ok(pattern) => catalog.architectures.push(pattern),
                Err(error) => catalog.reject(ProfileKind::Architecture, index + 1, error),
            }
        }

        info!(
            workloads = catalog.workloads.len(),
            architectures = catalog.architectures.len(),
            rejected = catalog.rejected.len(),
            "loaded profile catalog"
        );

        catalog
    }

    pub fn build_matrix(&self) -> Vec<CompatibilityResult> {
        build_matrix(&self.workloads, &self.architectures)
    }

    pub fn analyze<S: AsRef<str>>(&self, categories: &[S]) -> (Vec<CompatibilityResult>, MatrixSummary) {
        let results = self.build_matrix();
        let summary = MatrixSummary::from_results(&results, categories);
        (results, summary)
    }

    fn reject(&mut self, kind: ProfileKind, row: usize, error: ProfileError) {
        warn!(%kind, row, %error, "skipping malformed catalog row");
        self.rejected.push(RejectedProfile { kind, row, error });
    }
}

fn serialize_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: std::fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}
