//! Typed forms of the free-text descriptors carried by workload and architecture catalogs.
//!
//! Every descriptor is parsed once, when a profile is constructed. The parse functions below
//! are translation tables: each checks its known substrings in a fixed priority order and the
//! first hit wins, so the ordering of the checks is part of the observable behavior.

use serde::{Deserialize, Serialize};

/// How much commit latency a workload can tolerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LatencyTolerance {
    UltraLow,
    Moderate,
    Relaxed,
}

impl LatencyTolerance {
    /// Case-sensitive on purpose: the markers are unit strings such as "< 10ms".
    pub fn parse(raw: &str) -> Self {
        if raw.contains("< 1ms") || raw.contains("< 10ms") {
            Self::UltraLow
        } else if raw.contains("10-50ms") || raw.contains("< 100ms") {
            Self::Moderate
        } else {
            Self::Relaxed
        }
    }
}

/// Outcome of one ladder of substring checks against an architecture descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierFit {
    Tight,
    Partial,
    Mismatch,
}

/// Architecture p99 commit latency, pre-classified against each demanding workload tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitLatency {
    pub ultra_low: TierFit,
    pub moderate: TierFit,
}

impl CommitLatency {
    pub fn parse(raw: &str) -> Self {
        let ultra_low = if raw.contains("< 5ms") || raw.contains("< 1ms") {
            TierFit::Tight
        } else if raw.contains("< 20ms") {
            TierFit::Partial
        } else {
            TierFit::Mismatch
        };

        let moderate = if raw.contains("< 20ms") || raw.contains("< 10ms") {
            TierFit::Tight
        } else if raw.contains("20-100ms") {
            TierFit::Partial
        } else {
            TierFit::Mismatch
        };

        Self {
            ultra_low,
            moderate,
        }
    }
}

/// Consistency a workload demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyRequirement {
    Strong,
    Eventual,
    Unspecified,
}

impl ConsistencyRequirement {
    pub fn parse(raw: &str) -> Self {
        let text = raw.to_lowercase();
        if text.contains("strong") || text.contains("acid") {
            Self::Strong
        } else if text.contains("eventual") {
            Self::Eventual
        } else {
            Self::Unspecified
        }
    }
}

/// Consistency an architecture provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyGuarantee {
    Strong,
    Hybrid,
    Weak,
}

impl ConsistencyGuarantee {
    pub fn parse(raw: &str) -> Self {
        let text = raw.to_lowercase();
        if text.contains("strong") || text.contains("acid") {
            Self::Strong
        } else if text.contains("hybrid") {
            Self::Hybrid
        } else {
            Self::Weak
        }
    }
}

/// Read/write shape of a workload's transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionShape {
    Bulk,
    SmallFrequent,
    Mixed,
}

impl TransactionShape {
    pub fn parse(raw: &str) -> Self {
        let text = raw.to_lowercase();
        if text.contains("large") || text.contains("bulk") {
            Self::Bulk
        } else if text.contains("small") || text.contains("frequent") {
            Self::SmallFrequent
        } else {
            Self::Mixed
        }
    }
}

/// Architecture throughput, pre-classified against each transaction shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThroughputProfile {
    pub bulk: TierFit,
    pub small_frequent: TierFit,
    pub elastic: bool,
}

impl ThroughputProfile {
    pub fn parse(raw: &str) -> Self {
        let text = raw.to_lowercase();

        // "very high" is covered by "high"; "variable" is only reached when neither matches.
        let bulk = if text.contains("high") || text.contains("very high") {
            TierFit::Tight
        } else if text.contains("variable") {
            TierFit::Partial
        } else {
            TierFit::Mismatch
        };

        let small_frequent = if text.contains("limited") {
            TierFit::Mismatch
        } else if text.contains("high") && text.contains("local") {
            TierFit::Tight
        } else {
            TierFit::Partial
        };

        Self {
            bulk,
            small_frequent,
            elastic: text.contains("elastic"),
        }
    }
}

/// How strongly an architecture depends on the network between compute and storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkDependency {
    High,
    Medium,
    Low,
}

impl NetworkDependency {
    pub fn parse(raw: &str) -> Self {
        let text = raw.to_lowercase();
        if text.contains("high") {
            Self::High
        } else if text.contains("medium") {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Failure recovery window markers used by the narrative rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryWindow {
    pub minutes_to_hours: bool,
    pub mentions_hours: bool,
}

impl RecoveryWindow {
    pub fn parse(raw: &str) -> Self {
        Self {
            minutes_to_hours: raw.contains("minutes to hours"),
            mentions_hours: raw.contains("hours"),
        }
    }
}
