use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use workload_fit::config::AnalysisConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Request defaults shared by the suitability handlers.
#[derive(Debug, Clone)]
pub(crate) struct AnalysisDefaults {
    pub(crate) categories: Arc<Vec<String>>,
}

impl From<&AnalysisConfig> for AnalysisDefaults {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            categories: Arc::new(config.category_filters.clone()),
        }
    }
}

impl Default for AnalysisDefaults {
    fn default() -> Self {
        Self::from(&AnalysisConfig::default())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_reports_bad_input() {
        assert_eq!(
            parse_date(" 2025-08-20 "),
            Ok(NaiveDate::from_ymd_opt(2025, 8, 20).expect("valid date"))
        );
        let error = parse_date("20/08/2025").expect_err("rejects other formats");
        assert!(error.starts_with("failed to parse '20/08/2025'"));
    }
}
