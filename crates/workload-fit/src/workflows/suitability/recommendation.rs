use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive lower bounds of the recommendation ladder, evaluated top-down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecommendationThresholds {
    pub highly_recommended: f64,
    pub recommended: f64,
    pub consider_with_caution: f64,
    pub not_recommended: f64,
}

pub const RECOMMENDATION_THRESHOLDS: RecommendationThresholds = RecommendationThresholds {
    highly_recommended: 4.5,
    recommended: 3.5,
    consider_with_caution: 2.5,
    not_recommended: 1.5,
};

/// Qualitative tier derived from a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Highly Recommended")]
    HighlyRecommended,
    #[serde(rename = "Recommended")]
    Recommended,
    #[serde(rename = "Consider with Caution")]
    ConsiderWithCaution,
    #[serde(rename = "Not Recommended")]
    NotRecommended,
    #[serde(rename = "Strongly Discouraged")]
    StronglyDiscouraged,
}

impl Recommendation {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::HighlyRecommended,
            Self::Recommended,
            Self::ConsiderWithCaution,
            Self::NotRecommended,
            Self::StronglyDiscouraged,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HighlyRecommended => "Highly Recommended",
            Self::Recommended => "Recommended",
            Self::ConsiderWithCaution => "Consider with Caution",
            Self::NotRecommended => "Not Recommended",
            Self::StronglyDiscouraged => "Strongly Discouraged",
        }
    }

    pub fn classify(score: f64) -> Self {
        let ladder = RECOMMENDATION_THRESHOLDS;
        if score >= ladder.highly_recommended {
            Self::HighlyRecommended
        } else if score >= ladder.recommended {
            Self::Recommended
        } else if score >= ladder.consider_with_caution {
            Self::ConsiderWithCaution
        } else if score >= ladder.not_recommended {
            Self::NotRecommended
        } else {
            Self::StronglyDiscouraged
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
