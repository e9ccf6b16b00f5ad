use crate::infra::{AnalysisDefaults, AppState};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use workload_fit::error::AppError;
use workload_fit::workflows::ai_ml::{
    analyze_patterns, patterns_from_records, AiMlAnalysis, AiMlSummary,
};
use workload_fit::workflows::catalog::{InMemoryProfileStore, ProfileCatalog, RejectedProfile};
use workload_fit::workflows::suitability::{
    score_records, AttributeRecord, CompatibilityResult, MatrixSummary,
};

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) workload: AttributeRecord,
    pub(crate) architecture: AttributeRecord,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MatrixRequest {
    pub(crate) workloads: Vec<AttributeRecord>,
    pub(crate) architectures: Vec<AttributeRecord>,
    #[serde(default)]
    pub(crate) categories: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MatrixResponse {
    pub(crate) results: Vec<CompatibilityResult>,
    pub(crate) summary: MatrixSummary,
    pub(crate) rejected: Vec<RejectedProfile>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AiMlRequest {
    pub(crate) patterns: Vec<AttributeRecord>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AiMlResponse {
    pub(crate) analyses: Vec<AiMlAnalysis>,
    pub(crate) summary: AiMlSummary,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) rejected: Vec<RejectedProfile>,
}

/// Scoring endpoints under `/api/v1/suitability`.
pub(crate) fn suitability_router(defaults: AnalysisDefaults) -> Router {
    Router::new()
        .route("/api/v1/suitability/score", post(score_endpoint))
        .route("/api/v1/suitability/matrix", post(matrix_endpoint))
        .route("/api/v1/suitability/ai-ml", post(ai_ml_endpoint))
        .with_state(defaults)
}

pub(crate) fn with_suitability_routes(defaults: AnalysisDefaults) -> Router {
    suitability_router(defaults)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn score_endpoint(
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<CompatibilityResult>, AppError> {
    let result = score_records(&payload.workload, &payload.architecture)?;
    Ok(Json(result))
}

pub(crate) async fn matrix_endpoint(
    State(defaults): State<AnalysisDefaults>,
    Json(payload): Json<MatrixRequest>,
) -> Result<Json<MatrixResponse>, AppError> {
    let MatrixRequest {
        workloads,
        architectures,
        categories,
    } = payload;

    let store = InMemoryProfileStore {
        workloads,
        architectures,
    };
    let catalog = ProfileCatalog::load(&store)?;
    let categories = categories.unwrap_or_else(|| defaults.categories.as_ref().clone());
    let (results, summary) = catalog.analyze(&categories);

    Ok(Json(MatrixResponse {
        results,
        summary,
        rejected: catalog.rejected,
    }))
}

pub(crate) async fn ai_ml_endpoint(Json(payload): Json<AiMlRequest>) -> Json<AiMlResponse> {
    let (patterns, rejected) = patterns_from_records(&payload.patterns);
    let analyses = analyze_patterns(&patterns);
    let summary = AiMlSummary::from_analyses(&analyses);

    info!(
        analysed = summary.patterns_analyzed,
        rejected = rejected.len(),
        "scored AI/ML patterns"
    );

    Json(AiMlResponse {
        analyses,
        summary,
        rejected,
    })
}
