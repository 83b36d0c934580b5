use serde::{Deserialize, Serialize};

use crate::models::chant::ChantDetail;

/// One ranked classifier candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Chant identifier.
    pub target: String,
    /// Class probability as a percentage, rounded to two decimals.
    pub probability_pct: f64,
}

/// Classifier output for a completed questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Best prediction, if it cleared the confidence floor.
    pub target: Option<String>,
    /// Ranked top-N candidates with confidence, best first.
    pub candidates: Vec<Candidate>,
    /// Templated natural-language justification.
    pub explanation: String,
}

/// Ordered multi-record answer from context resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextResult {
    /// Matching chants, ascending by stage order.
    pub records: Vec<ChantDetail>,
    /// True when no stage filter was applied (full ordered guide mode).
    pub mode_all_stages: bool,
}

/// How a recommendation was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    /// The classifier produced a confident prediction.
    Success,
    /// The classifier abstained; records come from context resolution.
    Fallback,
    /// No knowledge for this context.
    Empty,
}

/// Top-level answer of the recommendation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub status: RecommendationStatus,
    /// Present whenever the classifier was consulted on a trained model.
    pub prediction: Option<Prediction>,
    /// Resolved chant records, best/first-stage first.
    pub records: Vec<ChantDetail>,
    /// Human-readable outcome message.
    pub message: String,
}
