use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::descriptors::{
    CommitLatency, ConsistencyGuarantee, ConsistencyRequirement, LatencyTolerance,
    NetworkDependency, RecoveryWindow, ThroughputProfile, TransactionShape,
};

/// Lowest and highest base suitability a workload may carry.
pub const SUITABILITY_SCORE_RANGE: (f64, f64) = (1.0, 5.0);

/// Which catalog a record belongs to, used when reporting malformed rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    Workload,
    Architecture,
    AiMlPattern,
}

impl ProfileKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Workload => "workload profile",
            Self::Architecture => "architecture pattern",
            Self::AiMlPattern => "AI/ML pattern",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Precondition violations raised while turning catalog records into profiles.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("{kind} is missing required attribute `{field}`")]
    MissingField {
        kind: ProfileKind,
        field: &'static str,
    },
    #[error("suitability_score `{value}` is not a number")]
    InvalidScore { value: String },
    #[error("suitability_score {value} is outside the 1-5 range")]
    ScoreOutOfRange { value: f64 },
}

/// A single attribute value as handed over by the profile store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(f64),
    Text(String),
}

impl AttributeValue {
    fn as_text(&self) -> String {
        match self {
            AttributeValue::Number(value) => value.to_string(),
            AttributeValue::Text(value) => value.clone(),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Flat attribute map describing one catalog row, independent of the storage format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeRecord(BTreeMap<String, AttributeValue>);

impl AttributeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.0.insert(name.into(), value.into());
    }

    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the trimmed text of an attribute; blank values count as missing.
    pub fn require_text(&self, kind: ProfileKind, field: &'static str) -> Result<String, ProfileError> {
        self.require_descriptor(kind, field)
            .and_then(|value| non_blank(kind, field, value))
    }

    /// Returns the trimmed text of a free-text descriptor. Only an absent key is an error; blank
    /// text is kept and later resolves to the evaluators' default branches.
    pub fn require_descriptor(
        &self,
        kind: ProfileKind,
        field: &'static str,
    ) -> Result<String, ProfileError> {
        self.0
            .get(field)
            .map(AttributeValue::as_text)
            .map(|value| value.trim().to_string())
            .ok_or(ProfileError::MissingField { kind, field })
    }

    pub fn require_number(&self, kind: ProfileKind, field: &'static str) -> Result<f64, ProfileError> {
        match self.0.get(field) {
            Some(AttributeValue::Number(value)) => Ok(*value),
            Some(AttributeValue::Text(raw)) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ProfileError::InvalidScore { value: raw.clone() }),
            _ => Err(ProfileError::MissingField { kind, field }),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeRecord
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Raw attributes of a workload class before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadAttributes {
    pub workload_type: String,
    pub latency_requirement: String,
    pub consistency_model: String,
    pub transaction_pattern: String,
    pub suitability_score: f64,
}

/// Validated workload class with its descriptors parsed once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadProfile {
    workload_type: String,
    latency_requirement: String,
    consistency_model: String,
    transaction_pattern: String,
    suitability_score: f64,
    #[serde(skip)]
    latency_tolerance: LatencyTolerance,
    #[serde(skip)]
    consistency: ConsistencyRequirement,
    #[serde(skip)]
    transaction_shape: TransactionShape,
}

impl WorkloadProfile {
    pub fn new(attributes: WorkloadAttributes) -> Result<Self, ProfileError> {
        let kind = ProfileKind::Workload;
        let workload_type = non_blank(kind, "workload_type", attributes.workload_type)?;
        let latency_requirement = trimmed(attributes.latency_requirement);
        let consistency_model = trimmed(attributes.consistency_model);
        let transaction_pattern = trimmed(attributes.transaction_pattern);
        let suitability_score = validate_score(attributes.suitability_score)?;

        Ok(Self {
            latency_tolerance: LatencyTolerance::parse(&latency_requirement),
            consistency: ConsistencyRequirement::parse(&consistency_model),
            transaction_shape: TransactionShape::parse(&transaction_pattern),
            workload_type,
            latency_requirement,
            consistency_model,
            transaction_pattern,
            suitability_score,
        })
    }

    pub fn workload_type(&self) -> &str {
        &self.workload_type
    }

    pub fn latency_requirement(&self) -> &str {
        &self.latency_requirement
    }

    pub fn consistency_model(&self) -> &str {
        &self.consistency_model
    }

    pub fn transaction_pattern(&self) -> &str {
        &self.transaction_pattern
    }

    pub fn suitability_score(&self) -> f64 {
        self.suitability_score
    }

    pub fn latency_tolerance(&self) -> LatencyTolerance {
        self.latency_tolerance
    }

    pub fn consistency(&self) -> ConsistencyRequirement {
        self.consistency
    }

    pub fn transaction_shape(&self) -> TransactionShape {
        self.transaction_shape
    }
}

/// Raw attributes of a compute-storage architecture before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureAttributes {
    pub architecture_pattern: String,
    pub commit_latency_p99: String,
    pub consistency_model: String,
    pub throughput_characteristics: String,
    pub network_dependency: String,
    pub failure_recovery_time: String,
}

/// Validated architecture pattern with its descriptors parsed once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchitecturePattern {
    architecture_pattern: String,
    commit_latency_p99: String,
    consistency_model: String,
    throughput_characteristics: String,
    network_dependency: String,
    failure_recovery_time: String,
    #[serde(skip)]
    commit_latency: CommitLatency,
    #[serde(skip)]
    consistency: ConsistencyGuarantee,
    #[serde(skip)]
    throughput: ThroughputProfile,
    #[serde(skip)]
    network: NetworkDependency,
    #[serde(skip)]
    recovery: RecoveryWindow,
}

impl ArchitecturePattern {
    pub fn new(attributes: ArchitectureAttributes) -> Result<Self, ProfileError> {
        let kind = ProfileKind::Architecture;
        let architecture_pattern =
            non_blank(kind, "architecture_pattern", attributes.architecture_pattern)?;
        let commit_latency_p99 = trimmed(attributes.commit_latency_p99);
        let consistency_model = trimmed(attributes.consistency_model);
        let throughput_characteristics = trimmed(attributes.throughput_characteristics);
        let network_dependency = trimmed(attributes.network_dependency);
        let failure_recovery_time = trimmed(attributes.failure_recovery_time);

        Ok(Self {
            commit_latency: CommitLatency::parse(&commit_latency_p99),
            consistency: ConsistencyGuarantee::parse(&consistency_model),
            throughput: ThroughputProfile::parse(&throughput_characteristics),
            network: NetworkDependency::parse(&network_dependency),
            recovery: RecoveryWindow::parse(&failure_recovery_time),
            architecture_pattern,
            commit_latency_p99,
            consistency_model,
            throughput_characteristics,
            network_dependency,
            failure_recovery_time,
        })
    }

    pub fn architecture_pattern(&self) -> &str {
        &self.architecture_pattern
    }

    pub fn commit_latency_p99(&self) -> &str {
        &self.commit_latency_p99
    }

    pub fn consistency_model(&self) -> &str {
        &self.consistency_model
    }

    pub fn throughput_characteristics(&self) -> &str {
        &self.throughput_characteristics
    }

    pub fn network_dependency(&self) -> &str {
        &self.network_dependency
    }

    pub fn failure_recovery_time(&self) -> &str {
        &self.failure_recovery_time
    }

    pub fn commit_latency(&self) -> CommitLatency {
        self.commit_latency
    }

    pub fn consistency(&self) -> ConsistencyGuarantee {
        self.consistency
    }

    pub fn throughput(&self) -> ThroughputProfile {
        self.throughput
    }

    pub fn network(&self) -> NetworkDependency {
        self.network
    }

    pub fn recovery(&self) -> RecoveryWindow {
        self.recovery
    }
}

/// Guard responsible for producing profiles from flat catalog records.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileGuard;

impl ProfileGuard {
    pub fn new() -> Self {
        Self
    }

    pub fn workload(&self, record: &AttributeRecord) -> Result<WorkloadProfile, ProfileError> {
        let kind = ProfileKind::Workload;
        WorkloadProfile::new(WorkloadAttributes {
            workload_type: record.require_text(kind, "workload_type")?,
            latency_requirement: record.require_descriptor(kind, "latency_requirement")?,
            consistency_model: record.require_descriptor(kind, "consistency_model")?,
            transaction_pattern: record.require_descriptor(kind, "transaction_pattern")?,
            suitability_score: record.require_number(kind, "suitability_score")?,
        })
    }

    pub fn architecture(
        &self,
        record: &AttributeRecord,
    ) -> Result<ArchitecturePattern, ProfileError> {
        let kind = ProfileKind::Architecture;
        ArchitecturePattern::new(ArchitectureAttributes {
            architecture_pattern: record.require_text(kind, "architecture_pattern")?,
            commit_latency_p99: record.require_descriptor(kind, "commit_latency_p99")?,
            consistency_model: record.require_descriptor(kind, "consistency_model")?,
            throughput_characteristics: record.require_descriptor(kind, "throughput_characteristics")?,
            network_dependency: record.require_descriptor(kind, "network_dependency")?,
            failure_recovery_time: record.require_descriptor(kind, "failure_recovery_time")?,
        })
    }
}

fn non_blank(kind: ProfileKind, field: &'static str, value: String) -> Result<String, ProfileError> {
    let value = trimmed(value);
    if value.is_empty() {
        Err(ProfileError::MissingField { kind, field })
    } else {
        Ok(value)
    }
}

fn trimmed(value: String) -> String {
    if value.trim().len() == value.len() {
        value
    } else {
        value.trim().to_string()
    }
}

fn validate_score(value: f64) -> Result<f64, ProfileError> {
    let (low, high) = SUITABILITY_SCORE_RANGE;
    if value.is_finite() && (low..=high).contains(&value) {
        Ok(value)
    } else {
        Err(ProfileError::ScoreOutOfRange { value })
    }
}
