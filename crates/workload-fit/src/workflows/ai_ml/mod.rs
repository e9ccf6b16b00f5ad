//! Separation suitability for AI/ML data pipelines.
//!
//! Unlike the workload matrix this scores a single pattern on its own: the descriptors of one
//! pipeline stage decide how much it gains from splitting compute and storage.

mod rules;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::workflows::catalog::RejectedProfile;
use crate::workflows::suitability::{AttributeRecord, ProfileError, ProfileKind};

/// One AI/ML pipeline pattern as described in the research catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiMlPattern {
    pub pattern_name: String,
    pub typical_latency: String,
    pub compute_requirements: String,
    pub storage_requirements: String,
    pub separation_benefits: String,
    pub architecture_approach: String,
    pub cost_optimization: String,
    pub caching_strategy: String,
    pub consistency_model: String,
}

impl AiMlPattern {
    pub fn from_record(record: &AttributeRecord) -> Result<Self, ProfileError> {
        let kind = ProfileKind::AiMlPattern;
        Ok(Self {
            pattern_name: record.require_text(kind, "pattern_name")?,
            typical_latency: record.require_descriptor(kind, "typical_latency")?,
            compute_requirements: record.require_descriptor(kind, "compute_requirements")?,
            storage_requirements: record.require_descriptor(kind, "storage_requirements")?,
            separation_benefits: record.require_descriptor(kind, "separation_benefits")?,
            architecture_approach: record.require_descriptor(kind, "architecture_approach")?,
            cost_optimization: record.require_descriptor(kind, "cost_optimization")?,
            caching_strategy: record.require_descriptor(kind, "caching_strategy")?,
            consistency_model: record.require_descriptor(kind, "consistency_model")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImplementationPriority {
    #[serde(rename = "High Priority")]
    High,
    #[serde(rename = "Medium Priority")]
    Medium,
    #[serde(rename = "Low Priority")]
    Low,
}

impl ImplementationPriority {
    pub fn from_score(score: u8) -> Self {
        if score >= 4 {
            Self::High
        } else if score >= 3 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High Priority",
            Self::Medium => "Medium Priority",
            Self::Low => "Low Priority",
        }
    }
}

/// Assessment of a single pattern. Field order matches the exported CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiMlAnalysis {
    pub pattern_name: String,
    pub separation_suitability_score: u8,
    pub primary_benefits: String,
    pub architecture_recommendation: String,
    pub cost_impact: &'static str,
    pub performance_impact: &'static str,
    pub complexity_impact: &'static str,
    pub scale_benefits: &'static str,
    pub implementation_priority: ImplementationPriority,
    pub success_factors: String,
    pub common_pitfalls: String,
}

pub fn analyze_pattern(pattern: &AiMlPattern) -> AiMlAnalysis {
    let score = rules::separation_score(pattern);

    AiMlAnalysis {
        pattern_name: pattern.pattern_name.clone(),
        separation_suitability_score: score,
        primary_benefits: pattern.separation_benefits.clone(),
        architecture_recommendation: pattern.architecture_approach.clone(),
        cost_impact: rules::cost_impact(pattern),
        performance_impact: rules::performance_impact(pattern),
        complexity_impact: rules::complexity_impact(pattern),
        scale_benefits: rules::scale_benefits(pattern),
        implementation_priority: ImplementationPriority::from_score(score),
        success_factors: rules::success_factors(pattern),
        common_pitfalls: rules::pitfalls(pattern),
    }
}

pub fn analyze_patterns(patterns: &[AiMlPattern]) -> Vec<AiMlAnalysis> {
    let analyses: Vec<AiMlAnalysis> = patterns.iter().map(analyze_pattern).collect();
    debug!(patterns = analyses.len(), "analysed AI/ML patterns");
    analyses
}

/// Validates records leniently, keeping one rejection per malformed row.
pub fn patterns_from_records(records: &[AttributeRecord]) -> (Vec<AiMlPattern>, Vec<RejectedProfile>) {
    let mut patterns = Vec::new();
    let mut rejected = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match AiMlPattern::from_record(record) {
            Ok(pattern) => patterns.push(pattern),
            Err(error) => rejected.push(RejectedProfile {
                kind: ProfileKind::AiMlPattern,
                row: index + 1,
                error,
            }),
        }
    }

    (patterns, rejected)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiMlSummary {
    pub patterns_analyzed: usize,
    pub high_priority_patterns: usize,
    pub excellent_separation_patterns: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_pattern: Option<String>,
}

impl AiMlSummary {
    pub fn from_analyses(analyses: &[AiMlAnalysis]) -> Self {
        let mut top: Option<&AiMlAnalysis> = None;
        for analysis in analyses {
            let replaces = top
                .map(|current| {
                    analysis.separation_suitability_score > current.separation_suitability_score
                })
                .unwrap_or(true);
            if replaces {
                top = Some(analysis);
            }
        }

        Self {
            patterns_analyzed: analyses.len(),
            high_priority_patterns: analyses
                .iter()
                .filter(|analysis| analysis.implementation_priority == ImplementationPriority::High)
                .count(),
            excellent_separation_patterns: analyses
                .iter()
                .filter(|analysis| analysis.separation_suitability_score >= 4)
                .count(),
            top_pattern: top.map(|analysis| analysis.pattern_name.clone()),
        }
    }
}
